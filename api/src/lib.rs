//! # Vanguard API
//!
//! Thin actix-web surface over the token lifecycle core: sign-in, refresh,
//! logout, and the protected-route validity check. All token semantics live
//! in `vg_core`; this crate only parses requests and maps domain errors to
//! HTTP responses.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
