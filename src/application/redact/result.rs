//! Redact result types

use std::path::PathBuf;

/// Result of a successful redaction
#[derive(Debug, Clone)]
pub struct RedactResult {
    /// Remote that was rewritten
    pub remote: String,
    /// Scratch workspace
    pub workspace: PathBuf,
    /// Mirror clone inside the workspace
    pub mirror: PathBuf,
    /// Whether the workspace was left on disk
    pub retained: bool,
    /// Text now standing in for the secret
    pub placeholder: String,
}
