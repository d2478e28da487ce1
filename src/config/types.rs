//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::scaffold::{DEFAULT_BRANCH, DEFAULT_COMMIT_MESSAGE, DEFAULT_HOST};
use crate::domain::entities::replacement_rule::DEFAULT_PLACEHOLDER;
use crate::domain::entities::theme_layout::DEFAULT_ASSETS;
use crate::error::ThemeOpsResult;

use super::loader::{self, ConfigWarning};

/// `[scaffold]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Theme directory that is wiped and regenerated
    pub target: PathBuf,
    /// Where optional assets are copied from
    pub assets_source: PathBuf,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub commit_message: String,
    pub host: String,
    /// Optional asset file names expected in `assets_source`
    pub assets: Vec<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from("theme"),
            assets_source: PathBuf::from("."),
            owner: String::new(),
            repo: String::new(),
            branch: DEFAULT_BRANCH.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            host: DEFAULT_HOST.to_string(),
            assets: DEFAULT_ASSETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// `[redact]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactConfig {
    pub placeholder: String,
    /// Leave the scratch clone on disk after a run
    pub keep_workspace: bool,
}

impl Default for RedactConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            keep_workspace: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scaffold: ScaffoldConfig,

    #[serde(default)]
    pub redact: RedactConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ThemeOpsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config file (explicit, project, user) and apply
    /// `THEMEOPS_*` overrides. Missing files fall back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> ThemeOpsResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit)
    }
}
