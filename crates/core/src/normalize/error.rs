use std::fmt;

use thiserror::Error;

/// A CMS record could not be turned into its document type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedResponse {
    #[error("Malformed {entity} record: missing required field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    #[error("Malformed {entity} record: {message}")]
    UnexpectedShape {
        entity: &'static str,
        message: String,
    },
}

impl MalformedResponse {
    pub(crate) fn missing(entity: &'static str, field: &'static str) -> Self {
        MalformedResponse::MissingField { entity, field }
    }

    pub(crate) fn shape(entity: &'static str, message: impl fmt::Display) -> Self {
        MalformedResponse::UnexpectedShape {
            entity,
            message: message.to_string(),
        }
    }
}

/// Result type for normalization.
pub type Result<T> = std::result::Result<T, MalformedResponse>;

/// Returns a required field, or a [`MalformedResponse::MissingField`] error.
pub(crate) fn require<T>(value: Option<T>, entity: &'static str, field: &'static str) -> Result<T> {
    value.ok_or(MalformedResponse::MissingField { entity, field })
}
