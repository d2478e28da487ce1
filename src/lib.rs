//! themeops - storefront theme scaffolding and history redaction
//!
//! Two operator workflows:
//! - `scaffold` regenerates a theme directory from a fixed layout and
//!   publishes it as the initial commit of a branch on a hosted repository.
//! - `redact` rewrites the full history of a remote repository so a leaked
//!   secret is replaced by a placeholder, then force-publishes the result.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CheckToolsOptions, CheckToolsUseCase, RedactOptions, RedactResult, RedactUseCase,
    ScaffoldOptions, ScaffoldResult, ScaffoldUseCase,
};
pub use config::Config;
pub use domain::value_objects::{AccessToken, ExposedSecret, RepoSlug};
pub use error::{ThemeOpsError, ThemeOpsResult};
