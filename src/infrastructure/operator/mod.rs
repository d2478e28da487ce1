//! Operator interaction adapters

mod prompt;
mod secrets;

pub use prompt::{ask_with, StdinPrompt};
pub use secrets::{ChainedSecretSource, EnvSecretSource, PromptSecretSource, SECRET_ENV_VAR};
