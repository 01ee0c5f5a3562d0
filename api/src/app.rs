//! Application factory
//!
//! Builds the Actix-web application with all routes registered against a
//! shared [`AppState`].

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::routes::auth::{
    logout::logout, refresh::refresh, sign_in::sign_in, validate::validate, AppState,
};

use vg_core::repositories::RefreshTokenStore;
use vg_core::services::auth::{CredentialVerifier, SubjectLookup};

/// Create and configure the application with all dependencies
pub fn create_app<V, S, L>(
    app_state: web::Data<AppState<V, S, L>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody<Error: std::fmt::Debug>,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    V: CredentialVerifier + 'static,
    S: RefreshTokenStore + 'static,
    L: SubjectLookup + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/auth")
                .route("/sign-in", web::post().to(sign_in::<V, S, L>))
                .route("/token/refresh", web::post().to(refresh::<V, S, L>))
                .route("/logout", web::post().to(logout::<V, S, L>))
                .route("/validate", web::get().to(validate::<V, S, L>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "vanguard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
