use async_trait::async_trait;
use serde_json::Value;

use super::{Endpoint, FetchError};

/// Inbound contract for reading raw content from the CMS.
///
/// Implementations return the endpoint's payload already unwrapped from any
/// transport envelope. They own transport concerns (timeouts, retries,
/// authentication); a failure is reported once and never retried here.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches the raw payload behind an endpoint.
    async fn fetch(&self, endpoint: Endpoint) -> Result<Value, FetchError>;
}
