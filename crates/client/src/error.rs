//! Client error types.

use std::error::Error as StdError;

use sitecms_core::{Endpoint, FetchError};
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the CMS.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Converts the error into the fetch failure reported for `endpoint`.
    pub fn into_fetch_error(self, endpoint: Endpoint) -> FetchError {
        FetchError::new(endpoint, error_message(&self))
    }
}

/// Flattens an error and its `source()` chain into one line.
///
/// Sources whose text is already part of the outer message are skipped, so
/// `#[error("...: {0}")]` wrappers do not repeat themselves.
pub fn error_message(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
