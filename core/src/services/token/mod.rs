//! Token service module for JWT lifecycle management
//!
//! This module handles all token-related operations:
//! - signing key loading and the pure encode/decode codec
//! - access/refresh token issuance and stateless verification
//! - single-use refresh token rotation
//! - revocation on logout or account deletion

mod codec;
mod config;
mod keys;
mod locks;
mod manager;

#[cfg(test)]
mod tests;

pub use codec::{DecodeError, Expiring, TokenCodec};
pub use config::TokenConfig;
pub use keys::SigningKey;
pub use manager::TokenLifecycleManager;
