//! ReplacementRule entity - one secret/placeholder pair
//!
//! Rendered into the rule-file format consumed by `git filter-repo
//! --replace-text`. The `literal:` prefix keeps secrets that happen to
//! start with `regex:` or `glob:` from being reinterpreted.

use zeroize::Zeroizing;

use crate::domain::value_objects::ExposedSecret;

/// Default text substituted for the secret
pub const DEFAULT_PLACEHOLDER: &str = "***REMOVED***";

/// Separator between the match and the replacement in a rule line
const RULE_SEPARATOR: &str = "==>";

/// A secret and the placeholder that replaces it in every revision
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    secret: ExposedSecret,
    placeholder: String,
}

impl ReplacementRule {
    /// Create a rule. Returns `None` when the pair cannot be expressed as
    /// a single rule line: an empty secret, a line break in either side, or
    /// the separator in either side (the rewriter splits on the last one).
    pub fn new(secret: ExposedSecret, placeholder: impl Into<String>) -> Option<Self> {
        let placeholder = placeholder.into();
        let single_line = |s: &str| !s.contains(['\n', '\r']);
        if secret.is_empty()
            || !single_line(secret.expose())
            || !single_line(&placeholder)
            || secret.expose().contains(RULE_SEPARATOR)
            || placeholder.contains(RULE_SEPARATOR)
        {
            return None;
        }
        Some(Self {
            secret,
            placeholder,
        })
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Rule file body. Zeroized when dropped.
    pub fn to_rules_file(&self) -> Zeroizing<String> {
        Zeroizing::new(format!(
            "literal:{}{}{}\n",
            self.secret.expose(),
            RULE_SEPARATOR,
            self.placeholder
        ))
    }

    /// Apply the rule to a piece of text (what the rewriter does per blob)
    #[cfg(test)]
    pub fn apply(&self, text: &str) -> String {
        text.replace(self.secret.expose(), &self.placeholder)
    }
}
