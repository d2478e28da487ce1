//! History Rewriter Port
//!
//! External utility that replaces text across every revision of a
//! repository, driven by a rule file.

use std::path::Path;

use super::CommandResult;

pub trait HistoryRewriter {
    /// Tool name (for messages)
    fn name(&self) -> &'static str;

    /// Whether the tool is installed
    fn is_available(&self) -> bool;

    /// How to install the tool when it is missing
    fn install_hint(&self) -> &'static str;

    /// Apply every rule in `rules_file` to all revisions and refs of `repo`
    fn replace_text(&self, repo: &Path, rules_file: &Path) -> CommandResult<()>;
}

impl<T: HistoryRewriter + ?Sized> HistoryRewriter for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn install_hint(&self) -> &'static str {
        (**self).install_hint()
    }

    fn replace_text(&self, repo: &Path, rules_file: &Path) -> CommandResult<()> {
        (**self).replace_text(repo, rules_file)
    }
}
