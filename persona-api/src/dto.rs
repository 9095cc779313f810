pub mod dataset;
pub mod predict;

pub use dataset::*;
pub use predict::*;

// Error response format
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}
