//! Capability traits for the external identity collaborators.
//!
//! The token lifecycle manager and the authentication gate depend only on
//! these narrow interfaces, never on a concrete persistence technology.

use async_trait::async_trait;

use crate::domain::entities::identity::Identity;
use crate::errors::DomainResult;

/// Confirms a credential pair and returns the authenticated identity.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns the identity and its authorization roles when the secret
    /// matches, or `AuthError::AuthenticationFailed` when it does not.
    async fn verify(&self, user_id: &str, secret: &str) -> DomainResult<Identity>;
}

/// Resolves a subject to its current roles.
///
/// Used during rotation so that role changes since the original sign-in are
/// reflected in the next access token. `None` means the subject no longer
/// exists (e.g. account deleted).
#[async_trait]
pub trait SubjectLookup: Send + Sync {
    async fn lookup(&self, subject: &str) -> DomainResult<Option<Identity>>;
}
