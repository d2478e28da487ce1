//! Scaffold options

use std::path::PathBuf;

use crate::domain::entities::ThemeLayout;
use crate::domain::value_objects::{AccessToken, RepoSlug};

/// Default branch the scaffold is pushed to
pub const DEFAULT_BRANCH: &str = "main";

/// Default message of the initial commit
pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial theme scaffold";

/// Default hosting provider
pub const DEFAULT_HOST: &str = "github.com";

/// Options for the scaffold command
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Theme directory (wiped and regenerated)
    pub target: PathBuf,
    /// Directory holding optional binary assets
    pub assets_source: PathBuf,
    /// Remote repository
    pub repo: RepoSlug,
    /// Hosting provider host name
    pub host: String,
    /// Branch to publish
    pub branch: String,
    /// Message of the initial commit
    pub commit_message: String,
    /// Shape of the generated theme
    pub layout: ThemeLayout,
    /// Access token used when no session is active
    pub token: Option<AccessToken>,
}

impl ScaffoldOptions {
    pub fn new(target: impl Into<PathBuf>, repo: RepoSlug) -> Self {
        Self {
            target: target.into(),
            assets_source: PathBuf::from("."),
            repo,
            host: DEFAULT_HOST.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            layout: ThemeLayout::default(),
            token: None,
        }
    }

    pub fn with_assets_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.assets_source = source.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn with_commit_message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    pub fn with_layout(mut self, layout: ThemeLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_token(mut self, token: Option<AccessToken>) -> Self {
        self.token = token;
        self
    }

    /// Credential-free URL of the remote
    pub fn remote_url(&self) -> String {
        self.repo.remote_url(&self.host)
    }
}
