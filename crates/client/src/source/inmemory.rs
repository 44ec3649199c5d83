//! In-memory content source for tests and offline fixtures.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use sitecms_core::{ContentSource, Endpoint, FetchError};

use crate::client::unwrap_envelope;
use crate::error::Result;

/// Serves canned payloads, or canned failures, per endpoint.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    responses: HashMap<Endpoint, std::result::Result<Value, String>>,
}

impl InMemorySource {
    /// Create an empty source; every fetch fails until a payload is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` for `endpoint`.
    pub fn with_payload(mut self, endpoint: Endpoint, payload: Value) -> Self {
        self.responses.insert(endpoint, Ok(payload));
        self
    }

    /// Fail every fetch of `endpoint` with `message`.
    pub fn with_failure(mut self, endpoint: Endpoint, message: impl Into<String>) -> Self {
        self.responses.insert(endpoint, Err(message.into()));
        self
    }

    /// Load saved API responses from a fixture directory.
    ///
    /// Each endpoint reads its [`Endpoint::fixture_file`]; files hold the
    /// response body including the `data` envelope. Missing files leave the
    /// endpoint unset.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut source = Self::new();
        for endpoint in Endpoint::ALL {
            let path = dir.join(endpoint.fixture_file());
            if !path.is_file() {
                tracing::debug!(%endpoint, path = %path.display(), "no fixture");
                continue;
            }
            let body: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
            source = source.with_payload(endpoint, unwrap_envelope(body)?);
        }
        Ok(source)
    }
}

#[async_trait]
impl ContentSource for InMemorySource {
    async fn fetch(&self, endpoint: Endpoint) -> std::result::Result<Value, FetchError> {
        match self.responses.get(&endpoint) {
            Some(Ok(payload)) => Ok(payload.clone()),
            Some(Err(message)) => Err(FetchError::new(endpoint, message.clone())),
            None => Err(FetchError::new(endpoint, "no payload configured")),
        }
    }
}
