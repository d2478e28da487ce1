//! zip archiver adapter

use std::path::Path;
use std::process::Command;

use super::process;
use crate::domain::ports::{Archiver, CommandError, CommandResult};

/// Archiver backed by the `zip` executable.
///
/// Runs from the directory's parent so entries are stored as
/// `<dir>/...` rather than with absolute paths.
pub struct ZipCli {
    program: String,
}

impl ZipCli {
    pub fn new() -> Self {
        Self {
            program: "zip".to_string(),
        }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ZipCli {
    fn default() -> Self {
        Self::new()
    }
}

impl Archiver for ZipCli {
    fn name(&self) -> &'static str {
        "zip"
    }

    fn archive(&self, source_dir: &Path, archive: &Path) -> CommandResult<()> {
        let dir_name = source_dir.file_name().ok_or_else(|| CommandError::Spawn {
            command: "zip".to_string(),
            message: format!("{} has no directory name", source_dir.display()),
        })?;
        let archive_name = archive.file_name().ok_or_else(|| CommandError::Spawn {
            command: "zip".to_string(),
            message: format!("{} has no file name", archive.display()),
        })?;
        let parent = source_dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut cmd = Command::new(&self.program);
        cmd.current_dir(parent)
            .args(["-r", "-q"])
            .arg(archive_name)
            .arg(dir_name);
        process::run("zip", &mut cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_zip_is_an_error_not_a_panic() {
        let dir = tempdir().unwrap();
        let theme = dir.path().join("theme");
        std::fs::create_dir(&theme).unwrap();

        let err = ZipCli::with_program("themeops-no-such-zip")
            .archive(&theme, &dir.path().join("theme.zip"))
            .unwrap_err();

        assert_eq!(err.command(), "zip");
    }

    #[test]
    fn zips_next_to_directory() {
        if !process::succeeds(Command::new("zip").arg("-v")) {
            return;
        }
        let dir = tempdir().unwrap();
        let theme = dir.path().join("theme");
        std::fs::create_dir(&theme).unwrap();
        std::fs::write(theme.join("a.txt"), "a").unwrap();

        ZipCli::new()
            .archive(&theme, &dir.path().join("theme.zip"))
            .unwrap();

        assert!(dir.path().join("theme.zip").is_file());
    }
}
