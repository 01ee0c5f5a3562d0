//! End-to-end handler tests over in-memory trait implementations.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use async_trait::async_trait;
use tokio::sync::RwLock;

use vg_api::app::create_app;
use vg_api::routes::auth::AppState;
use vg_core::domain::entities::identity::Identity;
use vg_core::domain::entities::token::RefreshTokenRecord;
use vg_core::errors::{AuthError, DomainError, DomainResult};
use vg_core::repositories::RefreshTokenStore;
use vg_core::services::auth::{AuthService, CredentialVerifier, SubjectLookup};
use vg_core::services::token::{TokenConfig, TokenLifecycleManager};

/// In-memory refresh token store keyed by token hash.
struct MemoryStore {
    records: RwLock<HashMap<String, RefreshTokenRecord>>,
}

impl MemoryStore {
    fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl RefreshTokenStore for MemoryStore {
    async fn insert(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError> {
        let mut records = self.records.write().await;
        records.insert(record.token_hash.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        Ok(self.records.read().await.get(token_hash).cloned())
    }

    async fn find_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .find(|r| r.subject == subject)
            .cloned())
    }

    async fn delete_by_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        Ok(self.records.write().await.remove(token_hash).is_some())
    }

    async fn delete_by_subject(&self, subject: &str) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| r.subject != subject);
        Ok(before - records.len())
    }
}

/// Fixed single-user directory: alice / "correct-horse" with role USER.
struct Directory;

#[async_trait]
impl CredentialVerifier for Directory {
    async fn verify(&self, user_id: &str, secret: &str) -> DomainResult<Identity> {
        if user_id == "alice" && secret == "correct-horse" {
            Ok(Identity::new("alice", vec!["USER".to_string()]))
        } else {
            Err(AuthError::AuthenticationFailed.into())
        }
    }
}

#[async_trait]
impl SubjectLookup for Directory {
    async fn lookup(&self, subject: &str) -> DomainResult<Option<Identity>> {
        if subject == "alice" {
            Ok(Some(Identity::new("alice", vec!["USER".to_string()])))
        } else {
            Ok(None)
        }
    }
}

fn app_state() -> web::Data<AppState<Directory, MemoryStore, Directory>> {
    let tokens = Arc::new(TokenLifecycleManager::new(
        MemoryStore::new(),
        Directory,
        TokenConfig::default(),
    ));
    let auth_service = Arc::new(AuthService::new(Directory, Arc::clone(&tokens)));

    web::Data::new(AppState {
        auth_service,
        tokens,
    })
}

async fn sign_in_body<S, B>(app: &S) -> serde_json::Value
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
    B::Error: std::fmt::Debug,
{
    let req = test::TestRequest::post()
        .uri("/auth/sign-in")
        .set_json(serde_json::json!({
            "user_id": "alice",
            "secret": "correct-horse",
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn test_sign_in_returns_token_pair() {
    let app = test::init_service(create_app(app_state())).await;

    let body = sign_in_body(&app).await;

    assert_eq!(body["grant_type"], "Bearer");
    assert!(body["access_token"].as_str().unwrap().contains('.'));
    assert!(body["refresh_token"].as_str().unwrap().contains('.'));
    assert_eq!(body["access_expires_in"], 3600);
}

#[actix_web::test]
async fn test_sign_in_with_wrong_secret_is_401() {
    let app = test::init_service(create_app(app_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/sign-in")
        .set_json(serde_json::json!({
            "user_id": "alice",
            "secret": "wrong",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "AUTHENTICATION_FAILED");
}

#[actix_web::test]
async fn test_sign_in_with_empty_user_id_is_400() {
    let app = test::init_service(create_app(app_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/sign-in")
        .set_json(serde_json::json!({
            "user_id": "",
            "secret": "correct-horse",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_validate_returns_identity() {
    let app = test::init_service(create_app(app_state())).await;
    let body = sign_in_body(&app).await;
    let access_token = body["access_token"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri("/auth/validate")
        .insert_header(("Authorization", format!("Bearer {access_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["subject"], "alice");
    assert_eq!(body["authorities"], serde_json::json!(["USER"]));
}

#[actix_web::test]
async fn test_validate_without_bearer_is_401() {
    let app = test::init_service(create_app(app_state())).await;

    let req = test::TestRequest::get().uri("/auth/validate").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_validate_with_garbage_token_is_400() {
    let app = test::init_service(create_app(app_state())).await;

    let req = test::TestRequest::get()
        .uri("/auth/validate")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "MALFORMED_TOKEN");
}

#[actix_web::test]
async fn test_refresh_rotates_and_consumes() {
    let app = test::init_service(create_app(app_state())).await;
    let body = sign_in_body(&app).await;
    let refresh_token = body["refresh_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/auth/token/refresh")
        .insert_header(("Refresh-Token", refresh_token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let rotated: serde_json::Value = test::read_body_json(resp).await;
    assert_ne!(rotated["refresh_token"], body["refresh_token"]);

    // Replaying the consumed token must fail.
    let replay = test::TestRequest::post()
        .uri("/auth/token/refresh")
        .insert_header(("Refresh-Token", refresh_token))
        .to_request();
    let resp = test::call_service(&app, replay).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_REFRESH_TOKEN");
}

#[actix_web::test]
async fn test_refresh_without_header_is_401() {
    let app = test::init_service(create_app(app_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth/token/refresh")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_logout_ends_the_session() {
    let app = test::init_service(create_app(app_state())).await;
    let body = sign_in_body(&app).await;
    let access_token = body["access_token"].as_str().unwrap();
    let refresh_token = body["refresh_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/auth/logout")
        .insert_header(("Authorization", format!("Bearer {access_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The refresh path is cut off after logout.
    let req = test::TestRequest::post()
        .uri("/auth/token/refresh")
        .insert_header(("Refresh-Token", refresh_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // But the outstanding access token still verifies until expiry.
    let req = test::TestRequest::get()
        .uri("/auth/validate")
        .insert_header(("Authorization", format!("Bearer {access_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(create_app(app_state())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
