//! Authentication gate: credential pair in, token pair out.

mod service;
mod traits;

pub use service::AuthService;
pub use traits::{CredentialVerifier, SubjectLookup};
