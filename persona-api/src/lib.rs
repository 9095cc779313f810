pub mod dto;
pub mod error;
pub mod handlers;
pub mod inference;

pub use dto::*;
pub use error::*;
pub use inference::InferenceClient;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use persona_storage::DatasetStore;

/// Shared state for the HTTP surface.
///
/// The inference client is stateless and the dataset store is immutable
/// after load, so handlers never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    pub inference: InferenceClient,
    pub datasets: Arc<DatasetStore>,
}

impl AppState {
    pub fn new(inference: InferenceClient, datasets: Arc<DatasetStore>) -> Self {
        Self {
            inference,
            datasets,
        }
    }
}

/// Builds the `/api` router.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict::predict))
        .route("/data", get(handlers::dataset::page))
        .with_state(state)
}
