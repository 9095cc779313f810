//! Inference backend client
//!
//! Thin reqwest wrapper for the external classifier's `POST /predict`
//! endpoint. Single attempt per call, no retry, no caching; a non-success
//! status or an unreadable body is the caller's failure to report.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::dto::PredictRequest;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("backend responded with status {0}")]
    Status(u16),

    #[error("backend request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("backend returned malformed JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the external inference service.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: reqwest::Client,
    base_url: String,
}

impl InferenceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Forwards one assessment and relays the backend's JSON verbatim.
    pub async fn predict(&self, payload: &PredictRequest) -> Result<Value, InferenceError> {
        let url = self.url("/predict");
        debug!("Forwarding prediction request to {}", url);

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(payload)
            .send()
            .await
            .map_err(InferenceError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(InferenceError::Status(status.as_u16()));
        }

        response.json().await.map_err(InferenceError::Decode)
    }
}
