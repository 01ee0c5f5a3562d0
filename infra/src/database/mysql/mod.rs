//! MySQL implementations of the core persistence traits.

mod token_store_impl;
mod user_directory_impl;

pub use token_store_impl::MySqlRefreshTokenStore;
pub use user_directory_impl::MySqlUserDirectory;
