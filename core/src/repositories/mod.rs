//! Repository interfaces for persistence, implemented by the infra layer.

pub mod token;

pub use token::RefreshTokenStore;

#[cfg(test)]
pub use token::MockRefreshTokenStore;
