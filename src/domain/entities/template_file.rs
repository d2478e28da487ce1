//! TemplateFile entity - a generated theme file
//!
//! TemplateFiles are written once per scaffold run and never mutated
//! afterwards by this tool.

use std::path::{Path, PathBuf};

/// A generated file ready to be written under the theme directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the theme root (e.g. `sections/cart-upsell.liquid`)
    path: PathBuf,
    content: String,
}

impl TemplateFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// File name without extension (the section/template name)
    pub fn stem(&self) -> Option<&str> {
        self.path.file_stem().and_then(|s| s.to_str())
    }
}
