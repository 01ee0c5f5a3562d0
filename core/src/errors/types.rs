//! Error type definitions for authentication and token management.
//!
//! Presentation-layer concerns (HTTP status codes, response bodies) map from
//! these via the stable error codes in the `ErrorResponse` conversions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Credential mismatch. Deliberately undifferentiated: callers must not
    /// learn whether the identifier or the secret was wrong.
    #[error("Authentication failed")]
    AuthenticationFailed,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Input that cannot be parsed as a compact token at all
    #[error("Malformed token")]
    Malformed,

    /// Signature verification failed (tampering or wrong key)
    #[error("Token signature verification failed")]
    InvalidSignature,

    /// Signature valid but past expiry; re-authentication is the remedy
    #[error("Token expired")]
    Expired,

    /// Refresh token absent from the store. Covers "never existed",
    /// "already rotated", and "revoked" without distinguishing them, so a
    /// replayed token leaks no session state.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Convert AuthError to ErrorResponse
impl From<&AuthError> for ErrorResponse {
    fn from(err: &AuthError) -> Self {
        let error_code = match err {
            AuthError::AuthenticationFailed => "AUTHENTICATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<&TokenError> for ErrorResponse {
    fn from(err: &TokenError) -> Self {
        let error_code = match err {
            TokenError::Malformed => "MALFORMED_TOKEN",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            TokenError::GenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
