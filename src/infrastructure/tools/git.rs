//! Git adapter
//!
//! Implements `VersionControl` by running the `git` executable. Network
//! operations never prompt on the terminal: a missing credential fails the
//! command instead of blocking on input.

use std::path::Path;
use std::process::Command;

use super::process;
use crate::domain::ports::{CommandResult, VersionControl};

pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Use a different git executable (e.g. a wrapper script)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn in_dir(&self, dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(dir);
        cmd
    }

    fn networked(&self, dir: Option<&Path>) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }
        cmd.env("GIT_TERMINAL_PROMPT", "0");
        cmd
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    fn init(&self, dir: &Path) -> CommandResult<()> {
        process::run("git init", self.in_dir(dir).arg("init"))
    }

    fn add_all(&self, dir: &Path) -> CommandResult<()> {
        process::run("git add", self.in_dir(dir).args(["add", "-A"]))
    }

    fn commit(&self, dir: &Path, message: &str) -> CommandResult<()> {
        process::run("git commit", self.in_dir(dir).args(["commit", "-m", message]))
    }

    fn rename_branch(&self, dir: &Path, branch: &str) -> CommandResult<()> {
        process::run("git branch", self.in_dir(dir).args(["branch", "-M", branch]))
    }

    fn set_remote(&self, dir: &Path, name: &str, url: &str) -> CommandResult<()> {
        let mut probe = self.in_dir(dir);
        probe.args(["remote", "get-url", name]);
        if process::succeeds(&mut probe) {
            process::run(
                "git remote",
                self.in_dir(dir).args(["remote", "set-url", name, url]),
            )
        } else {
            process::run("git remote", self.in_dir(dir).args(["remote", "add", name, url]))
        }
    }

    fn push(&self, dir: &Path, remote: &str, branch: &str) -> CommandResult<()> {
        process::run(
            "git push",
            self.networked(Some(dir)).args(["push", "-u", remote, branch]),
        )
    }

    fn clone_mirror(&self, url: &str, dest: &Path) -> CommandResult<()> {
        process::run(
            "git clone",
            self.networked(None)
                .args(["clone", "--mirror", url])
                .arg(dest),
        )
    }

    fn expire_reflog(&self, repo: &Path) -> CommandResult<()> {
        process::run(
            "git reflog",
            self.in_dir(repo)
                .args(["reflog", "expire", "--expire=now", "--all"]),
        )
    }

    fn gc_aggressive(&self, repo: &Path) -> CommandResult<()> {
        process::run(
            "git gc",
            self.in_dir(repo).args(["gc", "--prune=now", "--aggressive"]),
        )
    }

    fn push_mirror(&self, repo: &Path, url: &str) -> CommandResult<()> {
        process::run(
            "git push",
            self.networked(Some(repo))
                .args(["push", "--force", "--mirror", url]),
        )
    }
}
