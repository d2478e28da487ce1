//! Configuration module for themeops
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (THEMEOPS_*)
//! 3. `--config` file, else `./themeops.toml`, else `<config_dir>/themeops/config.toml`
//! 4. Built-in defaults
//!
//! Credentials are never read from configuration.

mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{apply_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, RedactConfig, ScaffoldConfig};
