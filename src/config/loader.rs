//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ThemeOpsError, ThemeOpsResult};

use super::env_validator::{closest_match, EnvVarValidator};
use super::types::Config;

/// File looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "themeops.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ThemeOpsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ThemeOpsError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First existing config file: explicit path, then `./themeops.toml`, then
/// the user config directory.
///
/// An explicit path that does not exist is an error; the fallbacks are not.
pub fn locate(explicit: Option<&Path>) -> ThemeOpsResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ThemeOpsError::InvalidConfig {
                file: path.to_path_buf(),
                message: "file not found".to_string(),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    let project = PathBuf::from(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Ok(Some(project));
    }

    Ok(dirs::config_dir()
        .map(|dir| dir.join("themeops").join("config.toml"))
        .filter(|path| path.is_file()))
}

/// Locate, load and apply environment overrides
pub fn resolve(explicit: Option<&Path>) -> ThemeOpsResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match locate(explicit)? {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (THEMEOPS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(
        config,
        |name| std::env::var(name).ok(),
        &mut std::io::stderr(),
    )
}

/// Apply overrides from an arbitrary lookup. Invalid values are reported
/// to `writer` and ignored.
pub fn apply_env_overrides<F, W>(mut config: Config, get_env: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let get = |name: &str| get_env(name).filter(|v| !v.trim().is_empty());

    if let Some(target) = get("THEMEOPS_TARGET") {
        config.scaffold.target = PathBuf::from(target);
    }
    if let Some(source) = get("THEMEOPS_ASSETS_SOURCE") {
        config.scaffold.assets_source = PathBuf::from(source);
    }
    if let Some(owner) = get("THEMEOPS_OWNER") {
        config.scaffold.owner = owner.trim().to_string();
    }
    if let Some(repo) = get("THEMEOPS_REPO") {
        config.scaffold.repo = repo.trim().to_string();
    }
    if let Some(branch) = get("THEMEOPS_BRANCH") {
        config.scaffold.branch = branch.trim().to_string();
    }

    if let Some(keep) = get("THEMEOPS_KEEP_WORKSPACE") {
        let validator =
            EnvVarValidator::new("THEMEOPS_KEEP_WORKSPACE", &["true", "false", "1", "0"]);
        config.redact.keep_workspace =
            validator.parse_with_writer(&keep, parse_bool, config.redact.keep_workspace, writer);
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "scaffold",
        "target",
        "assets_source",
        "owner",
        "repo",
        "branch",
        "commit_message",
        "host",
        "assets",
        "redact",
        "placeholder",
        "keep_workspace",
    ];

    closest_match(unknown, CANDIDATES).map(str::to_string)
}
