//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (1 hour)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 60;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims carried by an access token.
///
/// Access tokens are self-contained: subject and authorities are embedded so
/// protected routes never consult the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Authorities, comma-joined into a single claim
    pub auth: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl AccessClaims {
    /// Creates claims for a new access token with the given TTL.
    pub fn new(subject: &str, auth: String, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);

        Self {
            sub: subject.to_string(),
            auth,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks whether the claims have expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Claims carried by a refresh token.
///
/// A refresh token deliberately carries no subject claim; the owning subject
/// is recovered from the store record, so a leaked token reveals nothing
/// about its owner on its own. The `jti` nonce makes every minted token
/// distinct even within the same second, which the single-use guarantee
/// depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Expiration timestamp
    pub exp: i64,

    /// Random nonce distinguishing tokens minted for the same expiry
    pub jti: String,
}

impl RefreshClaims {
    /// Creates claims for a new refresh token with the given TTL.
    pub fn new(ttl_days: i64) -> Self {
        let expiry = Utc::now() + Duration::days(ttl_days);

        Self {
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks whether the claims have expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Refresh token record as persisted in the store.
///
/// Expiry lives in the signed token itself, not in the record; the store is
/// never swept proactively and stale rows simply fail the expiry check when
/// presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// Unique row identifier
    pub id: Uuid,

    /// Subject this token belongs to
    pub subject: String,

    /// SHA-256 hash of the token string; the raw token is never stored
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    pub fn new(subject: &str, token_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.to_string(),
            token_hash,
            created_at: Utc::now(),
        }
    }
}

/// Token pair returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Token scheme expected in the Authorization header
    pub grant_type: String,

    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_ttl_minutes: i64,
        refresh_ttl_days: i64,
    ) -> Self {
        Self {
            grant_type: "Bearer".to_string(),
            access_token,
            refresh_token,
            access_expires_in: access_ttl_minutes * 60,
            refresh_expires_in: refresh_ttl_days * 24 * 60 * 60,
        }
    }
}
