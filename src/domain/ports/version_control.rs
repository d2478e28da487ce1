//! Version Control Port
//!
//! Opaque version-control operations. Implementations report success or
//! failure only; no repository internals cross this boundary.

use std::path::Path;

use super::CommandResult;

pub trait VersionControl {
    /// Create a fresh repository in `dir`
    fn init(&self, dir: &Path) -> CommandResult<()>;

    /// Stage every file under `dir`
    fn add_all(&self, dir: &Path) -> CommandResult<()>;

    /// Commit staged changes
    fn commit(&self, dir: &Path, message: &str) -> CommandResult<()>;

    /// Rename the current branch
    fn rename_branch(&self, dir: &Path, branch: &str) -> CommandResult<()>;

    /// Add (or replace) a named remote
    fn set_remote(&self, dir: &Path, name: &str, url: &str) -> CommandResult<()>;

    /// Push `branch` to `remote`, setting upstream
    fn push(&self, dir: &Path, remote: &str, branch: &str) -> CommandResult<()>;

    /// Bare mirror clone of `url` into `dest` (all refs, no working tree)
    fn clone_mirror(&self, url: &str, dest: &Path) -> CommandResult<()>;

    /// Expire every reflog entry immediately
    fn expire_reflog(&self, repo: &Path) -> CommandResult<()>;

    /// Aggressive garbage collection, pruning unreachable objects now
    fn gc_aggressive(&self, repo: &Path) -> CommandResult<()>;

    /// Force-push all refs of the mirror back to `url`
    fn push_mirror(&self, repo: &Path, url: &str) -> CommandResult<()>;
}
