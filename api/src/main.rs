//! Vanguard API server entry point.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vg_api::app::create_app;
use vg_api::config::ApiConfig;
use vg_api::routes::auth::AppState;
use vg_core::services::auth::AuthService;
use vg_core::services::token::TokenLifecycleManager;
use vg_infra::database::mysql::{MySqlRefreshTokenStore, MySqlUserDirectory};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env()?;

    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await?;
    info!("database pool established");

    let store = MySqlRefreshTokenStore::new(pool.clone());
    let directory = MySqlUserDirectory::new(pool.clone());
    let verifier = MySqlUserDirectory::new(pool);

    let tokens = Arc::new(TokenLifecycleManager::new(
        store,
        directory,
        config.tokens.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(verifier, Arc::clone(&tokens)));

    let app_state = web::Data::new(AppState {
        auth_service,
        tokens,
    });

    info!(address = %config.bind_address, "starting server");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&config.bind_address)?
        .run()
        .await?;

    Ok(())
}
