//! PATH lookup

use std::path::PathBuf;

use crate::domain::ports::ToolLocator;

/// Finds programs on `PATH` with `which`
pub struct PathToolLocator;

impl ToolLocator for PathToolLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_program_is_not_found() {
        assert!(PathToolLocator
            .locate("themeops-definitely-not-installed")
            .is_none());
    }
}
