//! ThemeLayout entity - the fixed shape of a theme directory
//!
//! Every scaffold run regenerates exactly these subdirectories; no partial
//! state survives from a previous run.

use std::fmt;
use std::path::{Path, PathBuf};

/// Top-level subdirectories of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeDir {
    Assets,
    Layout,
    Sections,
    Templates,
    Config,
}

impl ThemeDir {
    pub const ALL: [ThemeDir; 5] = [
        ThemeDir::Assets,
        ThemeDir::Layout,
        ThemeDir::Sections,
        ThemeDir::Templates,
        ThemeDir::Config,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assets => "assets",
            Self::Layout => "layout",
            Self::Sections => "sections",
            Self::Templates => "templates",
            Self::Config => "config",
        }
    }

    /// Path of a file inside this directory, relative to the theme root
    pub fn join(&self, file: &str) -> PathBuf {
        Path::new(self.as_str()).join(file)
    }
}

impl fmt::Display for ThemeDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the section fragments generated for every theme
pub const SECTIONS: &[&str] = &[
    "age-verification",
    "cart-upsell",
    "email-capture",
    "exit-intent",
    "luxury-toggle",
];

/// Names of the page templates generated for every theme
pub const TEMPLATES: &[&str] = &["index", "product", "collection", "cart", "page"];

/// Optional binary assets copied from the asset source when present
pub const DEFAULT_ASSETS: &[&str] = &["logo.png", "hero.jpg", "favicon.png"];

pub const STYLESHEET: &str = "theme.css";
pub const SCRIPT: &str = "theme.js";
pub const LAYOUT: &str = "theme.liquid";
pub const SETTINGS_SCHEMA: &str = "settings_schema.json";
pub const SETTINGS_DATA: &str = "settings_data.json";

/// Everything the renderer and scaffolder need to know about a theme's shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeLayout {
    sections: Vec<String>,
    templates: Vec<String>,
    assets: Vec<String>,
}

impl Default for ThemeLayout {
    fn default() -> Self {
        Self {
            sections: SECTIONS.iter().map(|s| s.to_string()).collect(),
            templates: TEMPLATES.iter().map(|s| s.to_string()).collect(),
            assets: DEFAULT_ASSETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ThemeLayout {
    /// Replace the list of optional assets (from configuration)
    pub fn with_assets(mut self, assets: Vec<String>) -> Self {
        self.assets = assets;
        self
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    pub fn dirs(&self) -> &'static [ThemeDir] {
        &ThemeDir::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_names_are_fixed() {
        let names: Vec<_> = ThemeDir::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(
            names,
            ["assets", "layout", "sections", "templates", "config"]
        );
    }

    #[test]
    fn default_layout_lists_all_sections() {
        let layout = ThemeLayout::default();
        assert_eq!(layout.sections().len(), 5);
        assert!(layout.sections().iter().any(|s| s == "luxury-toggle"));
        assert_eq!(layout.templates().len(), 5);
    }

    #[test]
    fn with_assets_overrides_defaults() {
        let layout = ThemeLayout::default().with_assets(vec!["banner.webp".into()]);
        assert_eq!(layout.assets(), ["banner.webp".to_string()]);
    }

    #[test]
    fn join_builds_relative_paths() {
        assert_eq!(
            ThemeDir::Config.join(SETTINGS_DATA),
            PathBuf::from("config/settings_data.json")
        );
    }
}
