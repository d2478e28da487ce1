//! Workflow Event Port
//!
//! Observable progress for both workflows. Drives console output, NDJSON
//! event streams and test assertions. Events never carry secret values.

use std::fmt;
use std::path::PathBuf;

/// Which workflow emitted an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    Scaffold,
    Redact,
}

impl Workflow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scaffold => "scaffold",
            Self::Redact => "redact",
        }
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during a workflow run
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowEvent {
    /// A numbered step began
    StepStarted { step: &'static str },

    /// Non-fatal condition the operator should know about
    Notice { message: String },

    /// Authenticated with the hosting provider
    Authenticated { via: &'static str },

    /// Theme directory wiped and skeleton recreated
    DirectoryReset { target: PathBuf },

    /// Optional asset copied into the theme
    AssetCopied { name: String },

    /// Optional asset absent from the source directory
    AssetSkipped { name: String },

    /// Generated file written
    FileWritten { path: PathBuf },

    /// Archive created next to the theme
    ArchiveCreated { path: PathBuf },

    /// Initial commit created
    Committed { message: String },

    /// Branch pushed
    Pushed { remote: String, branch: String },

    /// Mirror clone finished
    MirrorCloned { path: PathBuf },

    /// History rewrite finished
    HistoryRewritten { placeholder: String },

    /// Reflog expired and objects pruned
    Compacted,

    /// Rewritten mirror force-pushed
    MirrorPushed { remote: String },

    /// Scratch workspace left on disk
    WorkspaceRetained { path: PathBuf },

    /// Scratch workspace removed
    WorkspaceRemoved { path: PathBuf },

    /// Workflow finished successfully
    Completed { workflow: Workflow },
}

/// Trait for receiving workflow events
///
/// Implementations:
/// - `ConsoleEventSink` - human-readable progress on stderr
/// - `JsonEventSink` - NDJSON stream for CI
/// - `NoopEventSink` - silent operation
pub trait WorkflowEventSink {
    fn on_event(&self, event: WorkflowEvent);

    /// Whether per-file events are wanted
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl WorkflowEventSink for NoopEventSink {
    fn on_event(&self, _event: WorkflowEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

impl<T: WorkflowEventSink + ?Sized> WorkflowEventSink for &T {
    fn on_event(&self, event: WorkflowEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}

impl<T: WorkflowEventSink + ?Sized> WorkflowEventSink for Box<T> {
    fn on_event(&self, event: WorkflowEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}
