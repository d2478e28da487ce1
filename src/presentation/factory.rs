//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CheckToolsUseCase, RedactUseCase, ScaffoldUseCase};
use crate::domain::ports::WorkflowEventSink;
use crate::infrastructure::{
    ChainedSecretSource, ConsoleEventSink, ConsoleStyle, EnvSecretSource, FilterRepo,
    GhCliSession, GitCli, JsonEventSink, PathToolLocator, PromptSecretSource, StdinPrompt, ZipCli,
};

/// Boxed event sink chosen at runtime (console or NDJSON)
pub type DynEventSink = Box<dyn WorkflowEventSink>;

/// Type alias for the concrete ScaffoldUseCase with all dependencies
pub type ConcreteScaffoldUseCase = ScaffoldUseCase<GhCliSession, GitCli, ZipCli, DynEventSink>;

/// Secret lookup: environment first, then a masked prompt
pub type DefaultSecretSource = ChainedSecretSource<EnvSecretSource, PromptSecretSource>;

/// Type alias for the concrete RedactUseCase with all dependencies
pub type ConcreteRedactUseCase =
    RedactUseCase<StdinPrompt, DefaultSecretSource, GitCli, FilterRepo, DynEventSink>;

/// Type alias for the concrete CheckToolsUseCase
pub type ConcreteCheckToolsUseCase = CheckToolsUseCase<PathToolLocator, GhCliSession>;

/// NDJSON on stdout when `json`, otherwise console text on stderr
pub fn create_event_sink(command: &'static str, json: bool, style: ConsoleStyle) -> DynEventSink {
    if json {
        Box::new(JsonEventSink::stdout(command))
    } else {
        Box::new(ConsoleEventSink::stderr(style))
    }
}

/// Create a scaffold use case publishing to `host`
pub fn create_scaffold_use_case(host: &str, events: DynEventSink) -> ConcreteScaffoldUseCase {
    ScaffoldUseCase::new(GhCliSession::new(host), GitCli::new(), ZipCli::new(), events)
}

/// Create a redact use case
pub fn create_redact_use_case(events: DynEventSink) -> ConcreteRedactUseCase {
    let secrets = ChainedSecretSource::new(EnvSecretSource::default(), PromptSecretSource);
    RedactUseCase::new(StdinPrompt, secrets, GitCli::new(), FilterRepo, events)
}

/// Create a tool check use case for `host`
pub fn create_check_tools_use_case(host: &str) -> ConcreteCheckToolsUseCase {
    CheckToolsUseCase::new(PathToolLocator, GhCliSession::new(host))
}
