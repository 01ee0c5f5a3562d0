//! Authenticated identity value object.

use serde::{Deserialize, Serialize};

/// An authenticated subject together with its current authorities.
///
/// Produced by the credential verifier on sign-in, by the subject lookup
/// during token rotation, and reconstructed from access token claims on
/// `verify`. Authorities are plain role strings (e.g. `"USER"`, `"ADMIN"`);
/// ordering is preserved as issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable user identifier (JWT `sub`)
    pub subject: String,

    /// Role strings granted to the subject
    pub authorities: Vec<String>,
}

impl Identity {
    pub fn new(subject: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            subject: subject.into(),
            authorities,
        }
    }

    /// Serializes the authorities as the comma-joined `auth` claim value.
    pub fn auth_claim(&self) -> String {
        self.authorities.join(",")
    }

    /// Rebuilds the authority list from a comma-joined `auth` claim value.
    pub fn authorities_from_claim(claim: &str) -> Vec<String> {
        claim
            .split(',')
            .filter(|role| !role.is_empty())
            .map(str::to_string)
            .collect()
    }
}
