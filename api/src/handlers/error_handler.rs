//! Maps domain errors onto HTTP responses.

use actix_web::HttpResponse;
use tracing::error;

use vg_core::errors::{AuthError, DomainError, ErrorResponse, TokenError};

/// Converts a [`DomainError`] into the appropriate HTTP response.
///
/// Credential and token failures become 400/401 with a machine-readable
/// error code; store outages and internal faults become an opaque 500 so
/// callers learn nothing about the backend.
pub fn handle_domain_error(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Auth(auth_err) => {
            HttpResponse::Unauthorized().json(ErrorResponse::from(auth_err))
        }
        DomainError::Token(token_err) => match token_err {
            TokenError::Malformed => {
                HttpResponse::BadRequest().json(ErrorResponse::from(token_err))
            }
            TokenError::InvalidSignature
            | TokenError::Expired
            | TokenError::InvalidRefreshToken => {
                HttpResponse::Unauthorized().json(ErrorResponse::from(token_err))
            }
            TokenError::GenerationFailed => {
                error!("token generation failed");
                internal_error()
            }
        },
        DomainError::StoreUnavailable { message } => {
            error!(message = %message, "refresh token store unavailable");
            internal_error()
        }
        DomainError::Conflict { message } | DomainError::Internal { message } => {
            error!(message = %message, "internal error");
            internal_error()
        }
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": "INTERNAL_ERROR",
        "message": "An internal error occurred",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_authentication_failure_is_401() {
        let err = DomainError::Auth(AuthError::AuthenticationFailed);
        assert_eq!(handle_domain_error(&err).status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_malformed_token_is_400() {
        let err = DomainError::Token(TokenError::Malformed);
        assert_eq!(handle_domain_error(&err).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_token_failures_are_401() {
        for token_err in [
            TokenError::InvalidSignature,
            TokenError::Expired,
            TokenError::InvalidRefreshToken,
        ] {
            let err = DomainError::Token(token_err);
            assert_eq!(handle_domain_error(&err).status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_store_outage_is_opaque_500() {
        let err = DomainError::StoreUnavailable {
            message: "pool timed out".to_string(),
        };
        let response = handle_domain_error(&err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
