//! Application Layer
//!
//! Use cases that orchestrate the workflows.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT talk to external tools directly (adapters do, via ports)
//!
//! ## Use Cases
//!
//! - `ScaffoldUseCase` - Regenerates a theme directory and publishes it
//! - `RedactUseCase` - Scrubs a leaked secret from a remote's history
//! - `CheckToolsUseCase` - Reports external tool and credential availability

pub mod check_tools;
pub mod redact;
pub mod scaffold;

#[cfg(test)]
mod test_support;

pub use check_tools::{
    CheckItem, CheckStatus, CheckToolsOptions, CheckToolsResult, CheckToolsUseCase,
};
pub use redact::{RedactOptions, RedactResult, RedactUseCase};
pub use scaffold::{ScaffoldOptions, ScaffoldResult, ScaffoldUseCase};
