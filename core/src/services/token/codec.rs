//! Pure encode/decode of signed compact tokens.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::domain::entities::token::{AccessClaims, RefreshClaims};
use crate::errors::TokenError;

use super::keys::SigningKey;

/// Claim sets the codec can check expiry on.
pub trait Expiring {
    /// Unix timestamp after which the claims are no longer valid.
    fn expires_at(&self) -> i64;
}

impl Expiring for AccessClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}

impl Expiring for RefreshClaims {
    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// Decode failure, checked in order: signature, then expiry.
///
/// `Expired` still carries the decoded claims: an expired token is a
/// recoverable case, and callers sometimes need to know whose token expired.
/// Expired claims are for diagnostics only, never authorization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError<C> {
    #[error("malformed token")]
    Malformed,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired { claims: C },
}

impl<C> DecodeError<C> {
    /// Drops the carried claims and maps to the domain-level taxonomy.
    pub fn into_token_error(self) -> TokenError {
        match self {
            DecodeError::Malformed => TokenError::Malformed,
            DecodeError::InvalidSignature => TokenError::InvalidSignature,
            DecodeError::Expired { .. } => TokenError::Expired,
        }
    }
}

/// Stateless codec for HS256 compact tokens. No I/O, no side effects.
pub struct TokenCodec {
    key: Arc<SigningKey>,
    header: Header,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(key: Arc<SigningKey>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is enforced manually after decoding so that callers still
        // receive the claims of an expired token.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            key,
            header: Header::new(Algorithm::HS256),
            validation,
        }
    }

    /// Serializes and signs a claim set into its compact representation.
    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&self.header, claims, self.key.encoding()).map_err(|_| TokenError::GenerationFailed)
    }

    /// Verifies the signature, then the expiry, of a compact token.
    pub fn decode<C>(&self, token: &str) -> Result<C, DecodeError<C>>
    where
        C: DeserializeOwned + Expiring,
    {
        let data = decode::<C>(token, self.key.decoding(), &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => DecodeError::InvalidSignature,
                _ => DecodeError::Malformed,
            }
        })?;

        let claims = data.claims;
        if Utc::now().timestamp() > claims.expires_at() {
            return Err(DecodeError::Expired { claims });
        }

        Ok(claims)
    }
}
