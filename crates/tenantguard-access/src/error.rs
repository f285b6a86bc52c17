//! Error types for permission queries
//!
//! Denials are not errors: they come back as a [`crate::Decision`] inside
//! `Ok`. The variants here cover the two remaining cases, a request the
//! caller built incorrectly and a store that failed to answer.

use thiserror::Error;

/// Failure reported by a store collaborator.
///
/// The engine never retries or rewrites these; they reach the caller as
/// [`AccessError::Store`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The backing store returned an error
    #[error("Store error: {0}")]
    Backend(String),
}

/// Access engine error types.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The caller built an invalid request
    #[error("Validation error: {0}")]
    Validation(String),

    /// A store collaborator failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for access engine operations.
pub type AccessResult<T> = Result<T, AccessError>;

impl AccessError {
    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AccessError::Validation(message.into())
    }

    /// Check if this error should be logged at error level.
    ///
    /// Validation errors point at the caller and are logged by whoever
    /// built the request.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AccessError::Store(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AccessError::Validation(_) => 400,
            AccessError::Store(StoreError::Unavailable(_)) => 503,
            AccessError::Store(StoreError::Backend(_)) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessError::Validation(_) => "VALIDATION_ERROR",
            AccessError::Store(StoreError::Unavailable(_)) => "STORE_UNAVAILABLE",
            AccessError::Store(StoreError::Backend(_)) => "STORE_ERROR",
        }
    }
}
