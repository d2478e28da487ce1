//! Domain Value Objects
//!
//! Immutable value types used by both workflows.

mod credential;
mod fingerprint;
mod repo_slug;
mod secret;

pub use credential::CredentialStatus;
pub use fingerprint::Fingerprint;
pub use repo_slug::{mirror_dir_name, RepoSlug};
pub use secret::{AccessToken, ExposedSecret};
