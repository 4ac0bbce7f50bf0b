//! Admin console access check.
//!
//! The console only asks a [`CredentialCheck`] whether a credential is
//! accepted. The stock [`SharedSecret`] compares against a single configured
//! string; it gates the UI and is not a security boundary, the backend
//! authorizes every request on its own.

use std::fmt;

use thiserror::Error;

/// Secret accepted when none is configured.
pub const DEFAULT_ADMIN_TOKEN: &str = "admin123";

pub trait CredentialCheck: Send + Sync + fmt::Debug {
    fn verify(&self, credential: &str) -> bool;
}

#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl Default for SharedSecret {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_TOKEN)
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "REDACTED SHARED SECRET")
    }
}

impl CredentialCheck for SharedSecret {
    fn verify(&self, credential: &str) -> bool {
        credential == self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid token!")]
    InvalidToken,
}
