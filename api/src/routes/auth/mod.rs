//! Authentication route handlers
//!
//! - Sign-in (credentials to token pair)
//! - Token refresh (single-use rotation)
//! - Logout (session revocation)
//! - Validity check for protected routes

pub mod logout;
pub mod refresh;
pub mod sign_in;
pub mod validate;

use actix_web::http::header;
use actix_web::HttpRequest;

pub use sign_in::AppState;

/// Header carrying the opaque refresh token on the rotation endpoint.
pub const REFRESH_TOKEN_HEADER: &str = "Refresh-Token";

/// Extracts the bearer token from the `Authorization` header.
///
/// Returns `None` when the header is missing, not valid UTF-8, lacks the
/// `Bearer ` prefix, or carries an empty token.
pub(crate) fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
