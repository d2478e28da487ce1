//! Secret sources
//!
//! The exposed secret is read from an environment variable or typed at a
//! prompt that does not echo. It is never a command-line argument.

use std::io::{self, BufRead, IsTerminal, Write};

use zeroize::Zeroizing;

use crate::domain::ports::SecretSource;
use crate::domain::value_objects::ExposedSecret;

/// Environment variable consulted before prompting
pub const SECRET_ENV_VAR: &str = "THEMEOPS_REDACT_SECRET";

/// Reads the secret from one environment variable
pub struct EnvSecretSource {
    var: &'static str,
}

impl EnvSecretSource {
    pub fn new(var: &'static str) -> Self {
        Self { var }
    }
}

impl Default for EnvSecretSource {
    fn default() -> Self {
        Self::new(SECRET_ENV_VAR)
    }
}

impl SecretSource for EnvSecretSource {
    fn read_secret(&self, _prompt: &str) -> io::Result<Option<ExposedSecret>> {
        Ok(std::env::var(self.var)
            .ok()
            .map(Zeroizing::new)
            .filter(|v| !v.is_empty())
            .map(|v| ExposedSecret::new(v.as_str())))
    }
}

/// Masked terminal prompt; falls back to a plain stdin line when stdin is
/// not a terminal (piped input is not echoed by anyone).
pub struct PromptSecretSource;

impl SecretSource for PromptSecretSource {
    fn read_secret(&self, prompt: &str) -> io::Result<Option<ExposedSecret>> {
        let value = if io::stdin().is_terminal() {
            Zeroizing::new(
                dialoguer::Password::new()
                    .with_prompt(prompt)
                    .allow_empty_password(true)
                    .interact()
                    .map_err(|e| io::Error::other(e.to_string()))?,
            )
        } else {
            eprint!("{}: ", prompt);
            let _ = io::stderr().flush();
            read_line(&mut io::stdin().lock())?
        };

        Ok((!value.is_empty()).then(|| ExposedSecret::new(value.as_str())))
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    input.read_line(&mut line)?;
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Tries `first`, then `second` when `first` yields nothing
pub struct ChainedSecretSource<A, B> {
    first: A,
    second: B,
}

impl<A: SecretSource, B: SecretSource> ChainedSecretSource<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: SecretSource, B: SecretSource> SecretSource for ChainedSecretSource<A, B> {
    fn read_secret(&self, prompt: &str) -> io::Result<Option<ExposedSecret>> {
        match self.first.read_secret(prompt)? {
            Some(secret) => Ok(Some(secret)),
            None => self.second.read_secret(prompt),
        }
    }
}
