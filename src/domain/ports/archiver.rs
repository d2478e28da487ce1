//! Archiver Port
//!
//! Best-effort packaging of a directory into a single archive.

use std::path::Path;

use super::CommandResult;

pub trait Archiver {
    fn name(&self) -> &'static str;

    /// Compress `source_dir` (including the directory itself) into `archive`
    fn archive(&self, source_dir: &Path, archive: &Path) -> CommandResult<()>;
}
