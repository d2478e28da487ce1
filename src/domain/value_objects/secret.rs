//! Sensitive string values
//!
//! Access tokens and exposed secrets never appear in `Debug`/`Display`
//! output and are zeroized on drop. They deliberately do not implement
//! `Serialize`, so they cannot leak into JSON events.

use std::fmt;

use zeroize::Zeroize;

macro_rules! sensitive_string {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name {
            inner: String,
        }

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self {
                    inner: value.into(),
                }
            }

            /// Raw value. Only call this at the point of handing it to a collaborator.
            #[inline]
            pub fn expose(&self) -> &str {
                &self.inner
            }

            #[inline]
            pub fn len(&self) -> usize {
                self.inner.len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "([REDACTED])"))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("[REDACTED ", $label, "]"))
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                self.inner.zeroize();
            }
        }
    };
}

sensitive_string!(
    /// Hosting-provider access token (from `GH_TOKEN` / `GITHUB_TOKEN`)
    AccessToken,
    "TOKEN"
);

sensitive_string!(
    /// The leaked value that must be scrubbed from history
    ExposedSecret,
    "SECRET"
);

impl AccessToken {
    /// Read the first non-empty token from the given environment lookup
    pub fn from_env_with(get_env: impl Fn(&str) -> Option<String>) -> Option<Self> {
        const KEYS: &[&str] = &["GH_TOKEN", "GITHUB_TOKEN"];
        KEYS.iter()
            .filter_map(|k| get_env(k))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
            .map(Self::new)
    }

    /// Read the token from the process environment
    pub fn from_env() -> Option<Self> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display_are_redacted() {
        let token = AccessToken::new("ghp_supersecret");
        assert_eq!(format!("{:?}", token), "AccessToken([REDACTED])");
        assert_eq!(token.to_string(), "[REDACTED TOKEN]");

        let secret = ExposedSecret::new("hunter2");
        assert!(!format!("{:?} {}", secret, secret).contains("hunter2"));
    }

    #[test]
    fn expose_returns_raw_value() {
        let secret = ExposedSecret::new("hunter2");
        assert_eq!(secret.expose(), "hunter2");
        assert_eq!(secret.len(), 7);
        assert!(!secret.is_empty());
    }

    #[test]
    fn token_prefers_gh_token() {
        let token = AccessToken::from_env_with(|k| match k {
            "GH_TOKEN" => Some("first".to_string()),
            "GITHUB_TOKEN" => Some("second".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(token.expose(), "first");
    }

    #[test]
    fn blank_token_is_ignored() {
        let token = AccessToken::from_env_with(|k| match k {
            "GH_TOKEN" => Some("   ".to_string()),
            "GITHUB_TOKEN" => Some("fallback".to_string()),
            _ => None,
        });
        assert_eq!(token.unwrap().expose(), "fallback");

        assert!(AccessToken::from_env_with(|_| None).is_none());
    }
}
