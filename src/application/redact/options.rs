//! Redact options

use std::path::PathBuf;

use crate::domain::entities::replacement_rule::DEFAULT_PLACEHOLDER;

/// Options for the redact command
#[derive(Debug, Clone)]
pub struct RedactOptions {
    /// Remote repository URL, rewritten in place
    pub remote: String,
    /// Text that replaces the secret
    pub placeholder: String,
    /// Leave the scratch workspace on disk for inspection
    pub keep_workspace: bool,
    /// Parent directory for the scratch workspace (system temp dir if unset)
    pub workspace_root: Option<PathBuf>,
}

impl RedactOptions {
    pub fn new(remote: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            keep_workspace: true,
            workspace_root: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_keep_workspace(mut self, keep: bool) -> Self {
        self.keep_workspace = keep;
        self
    }

    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = Some(root.into());
        self
    }
}
