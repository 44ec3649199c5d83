use thiserror::Error;

use super::Endpoint;
use crate::normalize::MalformedResponse;

/// An upstream fetch failed before any content could be normalized.
///
/// The message is already flattened into a single human-readable string by
/// the source implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to fetch {endpoint}: {message}")]
pub struct FetchError {
    pub endpoint: Endpoint,
    pub message: String,
}

impl FetchError {
    /// Creates a fetch error for the given endpoint.
    pub fn new(endpoint: Endpoint, message: impl Into<String>) -> Self {
        Self {
            endpoint,
            message: message.into(),
        }
    }
}

/// Errors that abort a whole content operation.
///
/// Data irregularities inside an otherwise well-formed payload (unknown
/// variant keys, unpublished records, absent optional lists) never surface
/// here; they are dropped during normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Malformed(#[from] MalformedResponse),
}

/// Result type for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let error = FetchError::new(Endpoint::GlobalConfig, "connection refused");
        assert_eq!(
            error.to_string(),
            "Failed to fetch global config: connection refused"
        );
    }

    #[test]
    fn test_content_error_is_transparent() {
        let error: ContentError = FetchError::new(Endpoint::Page, "timed out").into();
        assert_eq!(error.to_string(), "Failed to fetch page: timed out");

        let error: ContentError = MalformedResponse::MissingField {
            entity: "page",
            field: "key",
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Malformed page record: missing required field `key`"
        );
    }
}
