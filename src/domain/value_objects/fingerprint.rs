//! Generated Tree Fingerprint
//!
//! SHA-256 over the generated (non-copied) files of a scaffold run,
//! keyed by relative path, so two runs can be compared at a glance.

use std::fmt;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Content fingerprint of a set of generated files
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub const PREFIX: &'static str = "sha256:";

    /// Compute over `(relative path, content)` pairs.
    ///
    /// Order-independent: entries are sorted by path first.
    pub fn compute<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a Path, &'a [u8])>,
    {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut hasher = Sha256::new();
        for (path, content) in entries {
            hasher.update(path.to_string_lossy().replace('\\', "/").as_bytes());
            hasher.update([0u8]);
            hasher.update((content.len() as u64).to_le_bytes());
            hasher.update(content);
        }
        Self(format!("{}{:x}", Self::PREFIX, hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
