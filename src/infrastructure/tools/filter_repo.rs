//! git-filter-repo adapter

use std::path::Path;
use std::process::Command;

use super::process;
use crate::domain::ports::{CommandResult, HistoryRewriter};

const PROGRAM: &str = "git-filter-repo";

/// History rewriter backed by `git filter-repo --replace-text`
pub struct FilterRepo;

impl FilterRepo {
    /// Check if git-filter-repo is installed and available
    pub fn check_available() -> bool {
        which::which(PROGRAM).is_ok()
    }
}

impl HistoryRewriter for FilterRepo {
    fn name(&self) -> &'static str {
        PROGRAM
    }

    fn is_available(&self) -> bool {
        Self::check_available()
    }

    fn install_hint(&self) -> &'static str {
        "Install git-filter-repo: `pip install git-filter-repo`, `brew install git-filter-repo`, or your distribution's package"
    }

    fn replace_text(&self, repo: &Path, rules_file: &Path) -> CommandResult<()> {
        let mut cmd = Command::new("git");
        cmd.current_dir(repo)
            .arg("filter-repo")
            .arg("--replace-text")
            .arg(rules_file)
            .arg("--force");
        process::run("git filter-repo", &mut cmd)
    }
}
