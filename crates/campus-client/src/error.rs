//! Client error types.

use campus_core::errors::CoreError;
use thiserror::Error;

/// Errors that can occur when loading or changing Campus data.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// No record with the given key.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The request is well-formed but the current state forbids it.
    #[error("{0}")]
    Rejected(String),

    /// Input failed validation before anything was sent or stored.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading or writing the session file failed.
    #[error("session store error: {0}")]
    Session(String),
}

impl ClientError {
    /// Shorthand for [`ClientError::NotFound`].
    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    /// Whether re-running the same load might succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<CoreError> for ClientError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            CoreError::Rejected(message) => Self::Rejected(message),
        }
    }
}
