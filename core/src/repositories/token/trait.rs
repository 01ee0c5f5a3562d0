//! Refresh token store trait defining the interface for token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

/// Durable mapping from token hash to its record, and from subject to its
/// single outstanding record.
///
/// The store holds raw data only; the single-outstanding-token and
/// single-use invariants are enforced by the lifecycle manager, which
/// serializes its delete/insert sequences per subject. Implementations map
/// backend outages to `DomainError::StoreUnavailable` and uniqueness
/// violations to `DomainError::Conflict`.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Persist a new refresh token record.
    ///
    /// Fails with `Conflict` only if a storage uniqueness constraint is
    /// violated; callers are expected to have removed any prior record for
    /// the subject first.
    async fn insert(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError>;

    /// Look up a record by the hash of its token string.
    async fn find_by_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Look up the outstanding record for a subject, if any.
    async fn find_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Delete a record by token hash. Idempotent; returns whether a record
    /// was actually removed.
    async fn delete_by_token(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Delete all records for a subject. Idempotent; returns the number of
    /// records removed.
    async fn delete_by_subject(&self, subject: &str) -> Result<usize, DomainError>;
}
