//! Domain Ports (Interfaces)
//!
//! Every external collaborator the workflows depend on is reached through
//! one of these traits. Infrastructure provides the concrete adapters;
//! tests substitute recording fakes.

pub mod archiver;
pub mod command_error;
pub mod history_rewriter;
pub mod hosting_session;
pub mod operator_prompt;
pub mod secret_source;
pub mod tool_locator;
pub mod version_control;
pub mod workflow_events;

pub use archiver::Archiver;
pub use command_error::{CommandError, CommandResult};
pub use history_rewriter::HistoryRewriter;
pub use hosting_session::HostingSession;
pub use operator_prompt::OperatorPrompt;
pub use secret_source::SecretSource;
pub use tool_locator::ToolLocator;
pub use version_control::VersionControl;
pub use workflow_events::{NoopEventSink, Workflow, WorkflowEvent, WorkflowEventSink};
