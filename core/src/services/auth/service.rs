//! Authentication gate service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::token::TokenPair;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::RefreshTokenStore;
use crate::services::token::TokenLifecycleManager;

use super::traits::{CredentialVerifier, SubjectLookup};

/// Converts a presented credential pair into a token pair.
pub struct AuthService<V, S, L>
where
    V: CredentialVerifier,
    S: RefreshTokenStore,
    L: SubjectLookup,
{
    verifier: V,
    tokens: Arc<TokenLifecycleManager<S, L>>,
}

impl<V, S, L> AuthService<V, S, L>
where
    V: CredentialVerifier,
    S: RefreshTokenStore,
    L: SubjectLookup,
{
    pub fn new(verifier: V, tokens: Arc<TokenLifecycleManager<S, L>>) -> Self {
        Self { verifier, tokens }
    }

    /// Verifies the credentials and issues a token pair.
    ///
    /// Every verifier rejection collapses to the single undifferentiated
    /// `AuthenticationFailed`: the response must not reveal whether the
    /// identifier or the secret was wrong. Store unavailability passes
    /// through so callers can retry.
    pub async fn sign_in(&self, user_id: &str, secret: &str) -> DomainResult<TokenPair> {
        match self.verifier.verify(user_id, secret).await {
            Ok(identity) => {
                info!(subject = %identity.subject, "sign-in verified");
                self.tokens.issue(&identity).await
            }
            Err(err @ DomainError::StoreUnavailable { .. }) => Err(err),
            Err(_) => {
                warn!("sign-in rejected");
                Err(AuthError::AuthenticationFailed.into())
            }
        }
    }
}
