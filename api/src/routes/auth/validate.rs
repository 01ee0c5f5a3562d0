use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth_dto::IdentityResponse;
use crate::handlers::error_handler::handle_domain_error;

use vg_core::errors::{AuthError, DomainError};
use vg_core::repositories::RefreshTokenStore;
use vg_core::services::auth::{CredentialVerifier, SubjectLookup};

use super::{bearer_token, AppState};

/// Handler for GET /auth/validate
///
/// Checks the bearer access token purely cryptographically and returns the
/// identity it encodes. No store access happens here, so a token stays
/// valid for its full lifetime even after logout.
///
/// # Errors
/// - 400 Bad Request: token is not a structurally valid JWT
/// - 401 Unauthorized: token expired or signature invalid
pub async fn validate<V, S, L>(
    state: web::Data<AppState<V, S, L>>,
    req: HttpRequest,
) -> HttpResponse
where
    V: CredentialVerifier + 'static,
    S: RefreshTokenStore + 'static,
    L: SubjectLookup + 'static,
{
    let token = match bearer_token(&req) {
        Some(token) => token,
        None => {
            return handle_domain_error(&DomainError::Auth(AuthError::AuthenticationFailed))
        }
    };

    match state.tokens.verify(token) {
        Ok(identity) => HttpResponse::Ok().json(IdentityResponse::from(identity)),
        Err(error) => handle_domain_error(&error),
    }
}
