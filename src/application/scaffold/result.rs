//! Scaffold result types

use std::path::PathBuf;

use crate::domain::value_objects::{CredentialStatus, Fingerprint};

/// Result of a successful scaffold run
#[derive(Debug, Clone)]
pub struct ScaffoldResult {
    /// Theme directory that was regenerated
    pub target: PathBuf,
    /// How the run authenticated
    pub credential: CredentialStatus,
    /// Optional assets copied (file names)
    pub copied: Vec<String>,
    /// Optional assets not found (file names)
    pub skipped: Vec<String>,
    /// Generated files, relative to `target`
    pub generated: Vec<PathBuf>,
    /// Fingerprint of the generated files
    pub fingerprint: Fingerprint,
    /// Archive path, if archiving succeeded
    pub archive: Option<PathBuf>,
    /// Whether the initial commit was created
    pub committed: bool,
    /// Remote the branch was pushed to
    pub remote_url: String,
    /// Published branch
    pub branch: String,
}

impl ScaffoldResult {
    /// Whether any best-effort step fell through
    pub fn has_notices(&self) -> bool {
        self.archive.is_none() || !self.committed || !self.skipped.is_empty()
    }
}
