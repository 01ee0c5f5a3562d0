//! Token lifecycle manager: issuance, verification, rotation, revocation.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{AccessClaims, RefreshClaims, RefreshTokenRecord, TokenPair};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::RefreshTokenStore;
use crate::services::auth::SubjectLookup;

use super::codec::{DecodeError, TokenCodec};
use super::config::TokenConfig;
use super::keys::SigningKey;
use super::locks::SubjectLocks;

/// Orchestrates the refresh token state machine over an injected store.
///
/// A refresh token is Active while its record exists and its expiry claim
/// holds. Every transition out of Active is terminal for that token value:
/// rotation and revocation delete the record, and expiry is enforced at use
/// time rather than by a background sweep. Store mutations for one subject
/// are serialized through a per-subject lock, so concurrent issue/rotate
/// calls cannot leave two live tokens or consume the same token twice.
pub struct TokenLifecycleManager<S: RefreshTokenStore, L: SubjectLookup> {
    pub(crate) store: S,
    subjects: L,
    pub(crate) codec: TokenCodec,
    config: TokenConfig,
    locks: SubjectLocks,
}

impl<S: RefreshTokenStore, L: SubjectLookup> TokenLifecycleManager<S, L> {
    /// Creates a manager, deriving the signing key from the config once.
    pub fn new(store: S, subjects: L, config: TokenConfig) -> Self {
        let key = Arc::new(SigningKey::from_secret(&config.jwt_secret));

        Self {
            store,
            subjects,
            codec: TokenCodec::new(key),
            config,
            locks: SubjectLocks::new(),
        }
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Mints a fresh access/refresh pair for an authenticated identity.
    ///
    /// Any refresh token the subject already holds is removed before the new
    /// one is persisted, keeping exactly one outstanding token per subject.
    pub async fn issue(&self, identity: &Identity) -> DomainResult<TokenPair> {
        let access_token = self.mint_access_token(identity)?;
        let refresh_token = self.mint_refresh_token()?;

        let lock = self.locks.for_subject(&identity.subject).await;
        let _guard = lock.lock().await;

        self.store.delete_by_subject(&identity.subject).await?;
        self.store
            .insert(RefreshTokenRecord::new(
                &identity.subject,
                Self::hash_token(&refresh_token),
            ))
            .await?;

        debug!(subject = %identity.subject, "issued token pair");

        Ok(self.pair(access_token, refresh_token))
    }

    /// Consumes a refresh token and mints its successor pair.
    ///
    /// The presented token is validated cryptographically before the store
    /// is consulted, then consumed under the subject's lock: the record is
    /// re-checked, deleted, and replaced as one serialized sequence. A token
    /// that was already rotated or revoked fails with `InvalidRefreshToken`
    /// regardless of why it is absent.
    pub async fn rotate(&self, presented: &str) -> DomainResult<TokenPair> {
        if let Err(err) = self.codec.decode::<RefreshClaims>(presented) {
            if matches!(err, DecodeError::Expired { .. }) {
                debug!("expired refresh token presented");
            }
            return Err(err.into_token_error().into());
        }

        let presented_hash = Self::hash_token(presented);
        let record = self
            .store
            .find_by_token(&presented_hash)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        let lock = self.locks.for_subject(&record.subject).await;
        let _guard = lock.lock().await;

        // Re-check under the lock; a concurrent rotation of the same token
        // may have consumed it between lookup and lock acquisition.
        if self.store.find_by_token(&presented_hash).await?.is_none() {
            warn!(subject = %record.subject, "refresh token reuse detected");
            return Err(TokenError::InvalidRefreshToken.into());
        }

        // Authorities are re-resolved so role changes since sign-in take
        // effect on the next access token.
        let identity = self
            .subjects
            .lookup(&record.subject)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        self.store.delete_by_token(&presented_hash).await?;

        let refresh_token = self.mint_refresh_token()?;
        self.store
            .insert(RefreshTokenRecord::new(
                &record.subject,
                Self::hash_token(&refresh_token),
            ))
            .await?;

        let access_token = self.mint_access_token(&identity)?;

        info!(subject = %record.subject, "rotated refresh token");

        Ok(self.pair(access_token, refresh_token))
    }

    /// Verifies an access token and reconstructs the identity it proves.
    ///
    /// Pure and lock-free: signature and expiry are checked against the
    /// signing key only, never the store, so this is safe on every
    /// protected request.
    pub fn verify(&self, token: &str) -> DomainResult<Identity> {
        match self.codec.decode::<AccessClaims>(token) {
            Ok(claims) => Ok(Identity::new(
                claims.sub,
                Identity::authorities_from_claim(&claims.auth),
            )),
            Err(DecodeError::Expired { claims }) => {
                // Expired claims identify the caller for logging only.
                debug!(subject = %claims.sub, "expired access token presented");
                Err(TokenError::Expired.into())
            }
            Err(err) => Err(err.into_token_error().into()),
        }
    }

    /// Revokes the subject's outstanding refresh token (logout, account
    /// deletion). Idempotent; succeeds even when nothing was active.
    pub async fn revoke(&self, subject: &str) -> DomainResult<()> {
        let lock = self.locks.for_subject(subject).await;
        let _guard = lock.lock().await;

        let removed = self.store.delete_by_subject(subject).await?;
        info!(subject, removed, "revoked refresh tokens");

        Ok(())
    }

    fn mint_access_token(&self, identity: &Identity) -> Result<String, DomainError> {
        let claims = AccessClaims::new(
            &identity.subject,
            identity.auth_claim(),
            self.config.access_token_expiry_minutes,
        );
        Ok(self.codec.encode(&claims)?)
    }

    fn mint_refresh_token(&self) -> Result<String, DomainError> {
        let claims = RefreshClaims::new(self.config.refresh_token_expiry_days);
        Ok(self.codec.encode(&claims)?)
    }

    fn pair(&self, access_token: String, refresh_token: String) -> TokenPair {
        TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_minutes,
            self.config.refresh_token_expiry_days,
        )
    }

    /// Hashes a token for storage; the store never sees the raw value.
    pub(crate) fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
