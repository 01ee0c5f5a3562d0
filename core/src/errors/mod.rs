//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{AuthError, ErrorResponse, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// The refresh token store could not be reached or timed out. This is
    /// the only retryable condition; everything else is deterministic for a
    /// given input.
    #[error("Refresh token store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// A storage uniqueness constraint was violated. Not expected under
    /// correct orchestration (the manager deletes before inserting).
    #[error("Storage conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Whether a caller may reasonably retry the failed request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::StoreUnavailable { .. })
    }
}
