//! Database implementations using SQLx.

pub mod mysql;
