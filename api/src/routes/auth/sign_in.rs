use std::sync::Arc;

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{SignInRequest, TokenResponse};
use crate::handlers::error_handler::handle_domain_error;

use vg_core::repositories::RefreshTokenStore;
use vg_core::services::auth::{AuthService, CredentialVerifier, SubjectLookup};
use vg_core::services::token::TokenLifecycleManager;

/// Shared application state injected into every handler.
pub struct AppState<V, S, L>
where
    V: CredentialVerifier,
    S: RefreshTokenStore,
    L: SubjectLookup,
{
    pub auth_service: Arc<AuthService<V, S, L>>,
    pub tokens: Arc<TokenLifecycleManager<S, L>>,
}

/// Handler for POST /auth/sign-in
///
/// Verifies the submitted credentials and issues a fresh token pair,
/// replacing any refresh token the subject already had outstanding.
///
/// # Errors
/// - 400 Bad Request: request body fails validation
/// - 401 Unauthorized: unknown user or wrong secret (indistinguishable)
/// - 500 Internal Server Error: token store unavailable
pub async fn sign_in<V, S, L>(
    state: web::Data<AppState<V, S, L>>,
    request: web::Json<SignInRequest>,
) -> HttpResponse
where
    V: CredentialVerifier + 'static,
    S: RefreshTokenStore + 'static,
    L: SubjectLookup + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "VALIDATION_ERROR",
            "message": errors.to_string(),
        }));
    }

    match state
        .auth_service
        .sign_in(&request.user_id, &request.secret)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenResponse::from(pair)),
        Err(error) => handle_domain_error(&error),
    }
}
