//! Tool Locator Port
//!
//! Finds external programs without running them.

use std::path::PathBuf;

pub trait ToolLocator {
    /// Full path of `program` if it is installed
    fn locate(&self, program: &str) -> Option<PathBuf>;
}
