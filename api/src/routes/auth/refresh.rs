use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth_dto::TokenResponse;
use crate::handlers::error_handler::handle_domain_error;

use vg_core::errors::{DomainError, TokenError};
use vg_core::repositories::RefreshTokenStore;
use vg_core::services::auth::{CredentialVerifier, SubjectLookup};

use super::{AppState, REFRESH_TOKEN_HEADER};

/// Handler for POST /auth/token/refresh
///
/// Rotates the refresh token presented in the `Refresh-Token` header:
/// the presented token is consumed and a brand-new pair is returned.
/// Presenting the same token a second time fails.
///
/// # Errors
/// - 400 Bad Request: token is not a structurally valid JWT
/// - 401 Unauthorized: header missing, token expired, signature invalid,
///   or token not the subject's outstanding one
/// - 500 Internal Server Error: token store unavailable
pub async fn refresh<V, S, L>(
    state: web::Data<AppState<V, S, L>>,
    req: HttpRequest,
) -> HttpResponse
where
    V: CredentialVerifier + 'static,
    S: RefreshTokenStore + 'static,
    L: SubjectLookup + 'static,
{
    let presented = match req
        .headers()
        .get(REFRESH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|token| !token.is_empty())
    {
        Some(token) => token,
        None => {
            return handle_domain_error(&DomainError::Token(TokenError::InvalidRefreshToken))
        }
    };

    match state.tokens.rotate(presented).await {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
