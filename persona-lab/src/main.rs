use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use persona_api::{AppState, InferenceClient};
use persona_storage::DatasetStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "persona_lab=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Persona Lab server");

    // Load configuration
    let config = config::Config::load()?;
    tracing::info!(backend_url = %config.backend_url, "Configuration loaded");

    // Load the training dataset
    let datasets = Arc::new(DatasetStore::load(&config.dataset_path)?);

    // Build application state
    let api_state = AppState::new(InferenceClient::new(config.backend_url.clone()), datasets);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api", persona_api::routes(api_state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
