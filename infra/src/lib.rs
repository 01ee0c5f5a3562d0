//! # Infrastructure Layer
//!
//! Concrete implementations of the `vg_core` persistence and identity
//! traits:
//!
//! - **Database**: MySQL refresh token store and user directory using SQLx.
//!
//! Everything here maps backend failures into the core taxonomy: outages
//! and timeouts become `DomainError::StoreUnavailable`, uniqueness
//! violations become `DomainError::Conflict`.

pub mod database;

pub use database::mysql::{MySqlRefreshTokenStore, MySqlUserDirectory};
