//! Environment-driven configuration for the API binary.

use std::env;

use vg_core::services::token::TokenConfig;

/// Server configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// MySQL connection string
    pub database_url: String,
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Token lifecycle configuration
    pub tokens: TokenConfig,
}

impl ApiConfig {
    /// Reads configuration from the environment.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required; everything else has a
    /// development default.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| anyhow::anyhow!("JWT_SECRET must be set"))?;

        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT must be a valid port number"))?;

        let defaults = TokenConfig::default();
        let tokens = TokenConfig {
            jwt_secret,
            access_token_expiry_minutes: env_i64(
                "ACCESS_TOKEN_EXPIRY_MINUTES",
                defaults.access_token_expiry_minutes,
            )?,
            refresh_token_expiry_days: env_i64(
                "REFRESH_TOKEN_EXPIRY_DAYS",
                defaults.refresh_token_expiry_days,
            )?,
        };

        Ok(Self {
            database_url,
            bind_address: format!("{}:{}", host, port),
            tokens,
        })
    }
}

fn env_i64(name: &str, default: i64) -> anyhow::Result<i64> {
    match env::var(name) {
        Ok(value) => value
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("{} must be an integer", name)),
        Err(_) => Ok(default),
    }
}
