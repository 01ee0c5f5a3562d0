//! # Vanguard Core
//!
//! Core domain layer for the Vanguard backend. This crate contains the token
//! lifecycle manager, the authentication gate, the refresh token store
//! interface, and the error taxonomy shared by the outer layers. It performs
//! no I/O of its own; persistence and credential checking are injected
//! through the traits defined here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AccessClaims, Identity, RefreshClaims, RefreshTokenRecord, TokenPair};
pub use errors::{AuthError, DomainError, DomainResult, ErrorResponse, TokenError};
pub use repositories::RefreshTokenStore;
pub use services::{
    AuthService, CredentialVerifier, DecodeError, SigningKey, SubjectLookup, TokenCodec,
    TokenConfig, TokenLifecycleManager,
};
