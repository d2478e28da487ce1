//! Scaffold Use Case
//!
//! Builds a theme directory, packages it, and publishes it as the initial
//! commit of a branch on a remote repository.
//!
//! This module handles:
//! - Checking for a hosting session (or establishing one from a token)
//! - Resetting the theme directory skeleton
//! - Copying optional assets and writing generated files
//! - Best-effort archiving
//! - Initializing, committing and pushing the repository

mod options;
mod result;
mod use_case;


pub use options::{ScaffoldOptions, DEFAULT_BRANCH, DEFAULT_COMMIT_MESSAGE, DEFAULT_HOST};
pub use result::ScaffoldResult;
pub use use_case::{archive_path_for, authenticate, ensure_safe_target, ScaffoldUseCase};
