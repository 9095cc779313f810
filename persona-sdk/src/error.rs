//! SDK error types
//!
//! Every failed call surfaces as a single `SdkError`; there is no retry
//! machinery behind any of these variants.

use thiserror::Error;

/// The main error type for the SDK
#[derive(Error, Debug)]
pub enum SdkError {
    /// API returned an error response
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Network or connection error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

/// Error envelope returned by the API (`{error, details}`).
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub details: Option<String>,
}

impl SdkError {
    /// Builds an `Api` error from a response body, falling back to the raw
    /// text when the body is not the standard envelope.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(envelope) => match envelope.details {
                Some(details) => format!("{}: {}", envelope.error, details),
                None => envelope.error,
            },
            Err(_) => body.to_string(),
        };
        SdkError::Api { status, message }
    }
}
