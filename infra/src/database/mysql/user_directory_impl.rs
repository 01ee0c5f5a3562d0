//! MySQL-backed credential verifier and subject lookup.
//!
//! Users are stored with a bcrypt password hash and a comma-joined roles
//! column. Password hashing scheme design is out of scope here; this module
//! only delegates verification to bcrypt.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use tracing::warn;

use vg_core::domain::entities::identity::Identity;
use vg_core::errors::{AuthError, DomainError, DomainResult};
use vg_core::services::auth::{CredentialVerifier, SubjectLookup};

/// User directory over the `users` table, serving both capability traits
/// the token core depends on.
pub struct MySqlUserDirectory {
    pool: MySqlPool,
}

impl MySqlUserDirectory {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_user(&self, user_id: &str) -> DomainResult<Option<(String, String)>> {
        let query = r#"
            SELECT password_hash, roles
            FROM users
            WHERE user_id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: e.to_string(),
            })?;

        match row {
            Some(row) => {
                let password_hash: String =
                    row.try_get("password_hash")
                        .map_err(|e| DomainError::Internal {
                            message: format!("Failed to get password_hash: {}", e),
                        })?;
                let roles: String = row.try_get("roles").map_err(|e| DomainError::Internal {
                    message: format!("Failed to get roles: {}", e),
                })?;
                Ok(Some((password_hash, roles)))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl CredentialVerifier for MySqlUserDirectory {
    async fn verify(&self, user_id: &str, secret: &str) -> DomainResult<Identity> {
        // Unknown identifier and wrong secret take the same exit.
        let (password_hash, roles) = match self.fetch_user(user_id).await? {
            Some(user) => user,
            None => return Err(AuthError::AuthenticationFailed.into()),
        };

        let matches = bcrypt::verify(secret, &password_hash).map_err(|e| {
            warn!("bcrypt verification error: {}", e);
            DomainError::from(AuthError::AuthenticationFailed)
        })?;

        if !matches {
            return Err(AuthError::AuthenticationFailed.into());
        }

        Ok(Identity::new(
            user_id,
            Identity::authorities_from_claim(&roles),
        ))
    }
}

#[async_trait]
impl SubjectLookup for MySqlUserDirectory {
    async fn lookup(&self, subject: &str) -> DomainResult<Option<Identity>> {
        Ok(self.fetch_user(subject).await?.map(|(_, roles)| {
            Identity::new(subject, Identity::authorities_from_claim(&roles))
        }))
    }
}
