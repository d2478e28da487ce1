//! Repository Slug Value Object
//!
//! An `OWNER/REPO` pair on a hosting provider, and the credential-free
//! remote URL derived from it.

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeOpsError;

/// Owner/repository pair identifying a remote repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    owner: String,
    repo: String,
}

impl RepoSlug {
    /// Create a slug from its two halves, validating both
    pub fn new(owner: &str, repo: &str) -> Result<Self, ThemeOpsError> {
        let owner = owner.trim();
        let repo = repo.trim().trim_end_matches(".git");
        if !is_valid_segment(owner) || !is_valid_segment(repo) {
            return Err(ThemeOpsError::InvalidRepoSlug {
                value: format!("{}/{}", owner, repo),
            });
        }
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// HTTPS remote URL on `host`.
    ///
    /// Never embeds a credential: pushes authenticate through the
    /// hosting CLI's git credential helper.
    pub fn remote_url(&self, host: &str) -> String {
        format!(
            "https://{}/{}/{}.git",
            host.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }
}

impl FromStr for RepoSlug {
    type Err = ThemeOpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, repo)) => Self::new(owner, repo),
            None => Err(ThemeOpsError::InvalidRepoSlug {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

fn is_valid_segment(s: &str) -> bool {
    !s.is_empty()
        && s != "."
        && s != ".."
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Directory name for a mirror clone of `url` (e.g. `shop-theme.git`)
pub fn mirror_dir_name(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    let last = trimmed
        .rsplit(['/', ':'])
        .next()
        .unwrap_or_default()
        .trim_end_matches(".git");

    let name: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if name.is_empty() || name.chars().all(|c| c == '.') {
        "mirror.git".to_string()
    } else {
        format!("{}.git", name)
    }
}
