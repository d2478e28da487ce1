//! Infrastructure Layer
//!
//! Concrete adapters behind the domain ports:
//! - `tools` - git, gh, git-filter-repo and zip, run as child processes
//! - `operator` - confirmation prompt and secret sources
//! - `events` - console and NDJSON event sinks

pub mod events;
pub mod operator;
pub mod tools;

pub use events::{ConsoleEventSink, ConsoleStyle, JsonEventSink};
pub use operator::{ChainedSecretSource, EnvSecretSource, PromptSecretSource, StdinPrompt};
pub use tools::{FilterRepo, GhCliSession, GitCli, PathToolLocator, ZipCli};
