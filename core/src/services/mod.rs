//! Business services containing domain logic and use cases.

pub mod auth;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, CredentialVerifier, SubjectLookup};
pub use token::{DecodeError, SigningKey, TokenCodec, TokenConfig, TokenLifecycleManager};
