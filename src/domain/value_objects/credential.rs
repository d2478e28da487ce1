//! Credential Status Value Object
//!
//! Result of the authentication check, threaded explicitly into the
//! publish step instead of living in ambient process state.

use std::fmt;

/// How the run obtained an authenticated hosting session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    /// A session was already active in the hosting CLI
    Session,
    /// A session was established from a supplied access token
    Token,
}

impl CredentialStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::Token => "token",
        }
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
