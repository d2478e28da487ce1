//! Error types for themeops
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for themeops operations
pub type ThemeOpsResult<T> = Result<T, ThemeOpsError>;

/// Main error type for themeops operations
#[derive(Error, Debug)]
pub enum ThemeOpsError {
    /// Neither a hosting session nor an access token is available
    #[error("no hosting session is active and no access token was supplied")]
    MissingCredential,

    /// A token was supplied but the hosting CLI rejected it
    #[error("authentication with the hosting provider failed: {message}")]
    AuthenticationFailed { message: String },

    /// Pushing to the remote failed
    #[error("push to '{remote}' failed: {message}")]
    PushFailed { remote: String, message: String },

    /// A required external tool is not installed
    #[error("required tool '{tool}' was not found on PATH")]
    MissingDependency { tool: String, hint: String },

    /// The operator declined to continue
    #[error("aborted by operator: {reason}")]
    AbortedByOperator { reason: String },

    /// An external command exited unsuccessfully
    #[error("`{command}` failed: {message}")]
    CommandFailed { command: String, message: String },

    /// The target path must never be wiped
    #[error("refusing to reset '{path}': target must be a dedicated directory")]
    UnsafeTarget { path: PathBuf },

    /// Owner/repository pair could not be parsed
    #[error("invalid repository '{value}', expected OWNER/REPO")]
    InvalidRepoSlug { value: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ThemeOpsError {
    /// Stable machine-readable code (used by JSON error events)
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::AuthenticationFailed { .. } => "authentication_failed",
            Self::PushFailed { .. } => "push_failed",
            Self::MissingDependency { .. } => "missing_dependency",
            Self::AbortedByOperator { .. } => "aborted_by_operator",
            Self::CommandFailed { .. } => "command_failed",
            Self::UnsafeTarget { .. } => "unsafe_target",
            Self::InvalidRepoSlug { .. } => "invalid_repo",
            Self::InvalidConfig { .. } => "invalid_config",
            Self::Io(_) => "io",
        }
    }

    /// Remediation text shown to the operator, if any
    pub fn help(&self) -> Option<String> {
        match self {
            Self::MissingCredential => Some(
                "Run `gh auth login`, or export GH_TOKEN (or GITHUB_TOKEN) with a token that can push to the repository."
                    .to_string(),
            ),
            Self::AuthenticationFailed { .. } => Some(
                "Check that the token is valid and not expired, then retry. `gh auth status` shows the current session."
                    .to_string(),
            ),
            Self::PushFailed { .. } => Some(
                "Verify the repository exists and that your session can push to it (`gh auth status`, `gh repo view OWNER/REPO`). The local commit is kept; re-run after fixing access."
                    .to_string(),
            ),
            Self::MissingDependency { hint, .. } => Some(hint.clone()),
            Self::AbortedByOperator { .. } => Some(
                "Revoke the exposed credential at its source first, then re-run and answer `yes`."
                    .to_string(),
            ),
            Self::UnsafeTarget { .. } => Some(
                "Pass --target pointing at a directory that only holds generated output."
                    .to_string(),
            ),
            Self::InvalidRepoSlug { .. } => Some(
                "Use --owner and --repo, or set [scaffold] owner/repo in themeops.toml."
                    .to_string(),
            ),
            _ => None,
        }
    }

    /// Whether this error came from the operator rather than the environment
    pub fn is_operator_abort(&self) -> bool {
        matches!(self, Self::AbortedByOperator { .. })
    }
}
