use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth_dto::LogoutResponse;
use crate::handlers::error_handler::handle_domain_error;

use vg_core::errors::{AuthError, DomainError};
use vg_core::repositories::RefreshTokenStore;
use vg_core::services::auth::{CredentialVerifier, SubjectLookup};

use super::{bearer_token, AppState};

/// Handler for POST /auth/logout
///
/// Identifies the caller from the bearer access token and deletes their
/// outstanding refresh token, ending the session. The access token itself
/// keeps verifying until it expires; only the refresh path is cut off.
///
/// # Errors
/// - 401 Unauthorized: bearer token missing, malformed, expired, or forged
pub async fn logout<V, S, L>(
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

    let identity = match state.tokens.verify(token) {
        Ok(identity) => identity,
        Err(error) => return handle_domain_error(&error),
    };

    match state.tokens.revoke(&identity.subject).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
