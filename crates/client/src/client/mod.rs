//! HTTP client for the CMS content API.

use async_trait::async_trait;
use serde_json::Value;
use sitecms_core::{ContentSource, Endpoint, FetchError};

use crate::config::Config;
use crate::error::{ClientError, Result};

/// HTTP client for the CMS content API.
#[derive(Debug, Clone)]
pub struct CmsClient {
    client: reqwest::Client,
    base_url: String,
}

impl CmsClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Fetch the raw payload of an endpoint, unwrapped from its envelope.
    pub async fn get(&self, endpoint: Endpoint) -> Result<Value> {
        let url = self.url(endpoint);
        tracing::debug!(%endpoint, %url, "fetching");
        let response = self.client.get(&url).send().await?;
        let body = self.handle_response(response, endpoint).await?;
        unwrap_envelope(body)
    }

    /// Handle error responses.
    async fn handle_response(&self, response: reqwest::Response, endpoint: Endpoint) -> Result<Value> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                resource: endpoint.name().to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Extracts the payload from a `{ "data": ... }` response body.
pub fn unwrap_envelope(body: Value) -> Result<Value> {
    match body {
        Value::Object(mut map) => map
            .remove("data")
            .ok_or_else(|| ClientError::InvalidResponse("missing `data` envelope".to_string())),
        other => Err(ClientError::InvalidResponse(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

#[async_trait]
impl ContentSource for CmsClient {
    async fn fetch(&self, endpoint: Endpoint) -> std::result::Result<Value, FetchError> {
        self.get(endpoint).await.map_err(|e| {
            tracing::warn!(%endpoint, error = %e, "fetch failed");
            e.into_fetch_error(endpoint)
        })
    }
}
