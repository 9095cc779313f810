//! HTTP client implementation
//!
//! Core HTTP client for the SDK. One attempt per call: requests either
//! succeed or fail, matching the server's no-retry contract.

use std::sync::Arc;

use reqwest::{header, Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::config::SdkConfig;
use crate::error::{SdkError, SdkResult};

/// The HTTP client for making API requests
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: Arc<SdkConfig>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        config.validate()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(SdkError::Network)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Build the full URL for an endpoint
    pub fn url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> SdkResult<T> {
        let url = self.url(path);
        if self.config.enable_logging {
            debug!("Request: GET {}", url);
        }

        let response = self
            .client
            .request(Method::GET, &url)
            .query(query)
            .send()
            .await?;

        self.decode(response).await
    }

    /// Make a POST request
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> SdkResult<T> {
        let url = self.url(path);
        if self.config.enable_logging {
            debug!("Request: POST {}", url);
        }

        let response = self
            .client
            .request(Method::POST, &url)
            .json(body)
            .send()
            .await?;

        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> SdkResult<T> {
        let status = response.status();
        let text = response.text().await.map_err(SdkError::Network)?;

        if self.config.enable_logging {
            debug!("Response body: {}", text);
        }

        if status.is_success() {
            serde_json::from_str(&text).map_err(SdkError::Serialization)
        } else {
            Err(SdkError::from_response(status.as_u16(), &text))
        }
    }
}
