//! MySQL implementation of the RefreshTokenStore trait.
//!
//! Persists refresh token records keyed by token hash and by owning
//! subject. The table carries a unique index on `token_hash` and one on
//! `subject`; the lifecycle manager's delete-before-insert keeps the
//! subject index from ever firing under correct orchestration.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vg_core::domain::entities::token::RefreshTokenRecord;
use vg_core::errors::DomainError;
use vg_core::repositories::RefreshTokenStore;

/// MySQL-backed refresh token store.
pub struct MySqlRefreshTokenStore {
    pool: MySqlPool,
}

impl MySqlRefreshTokenStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<RefreshTokenRecord, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get id: {}", e),
            })?;

        Ok(RefreshTokenRecord {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid record UUID: {}", e),
            })?,
            subject: row.try_get("subject").map_err(|e| DomainError::Internal {
                message: format!("Failed to get subject: {}", e),
            })?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get token_hash: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }

    fn map_sqlx_error(err: sqlx::Error) -> DomainError {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::Conflict {
                    message: db_err.message().to_string(),
                }
            }
            _ => DomainError::StoreUnavailable {
                message: err.to_string(),
            },
        }
    }
}

#[async_trait]
impl RefreshTokenStore for MySqlRefreshTokenStore {
    async fn insert(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (id, subject, token_hash, created_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(&record.subject)
            .bind(&record.token_hash)
            .bind(record.created_at)
            .execute(&self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        Ok(record)
    }

    async fn find_by_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let query = r#"
            SELECT id, subject, token_hash, created_at
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let query = r#"
            SELECT id, subject, token_hash, created_at
            FROM refresh_tokens
            WHERE subject = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(subject)
            .fetch_optional(&self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_subject(&self, subject: &str) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE subject = ?")
            .bind(subject)
            .execute(&self.pool)
            .await
            .map_err(Self::map_sqlx_error)?;

        Ok(result.rows_affected() as usize)
    }
}
