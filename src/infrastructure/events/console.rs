//! Console Event Sink
//!
//! Human-readable progress on stderr. Per-file events are shown only in
//! verbose mode.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::domain::ports::{WorkflowEvent, WorkflowEventSink};

/// How console output is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleStyle {
    pub color: bool,
    pub unicode: bool,
    pub verbose: bool,
}

#[derive(Clone, Copy)]
enum Tone {
    Step,
    Success,
    Warning,
    Detail,
}

impl Tone {
    fn icon(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Step, true) => "●",
            (Self::Success, true) => "✓",
            (Self::Warning, true) => "⚠",
            (Self::Detail, true) => "  ↳",
            (Self::Step, false) => "[..]",
            (Self::Success, false) => "[OK]",
            (Self::Warning, false) => "[WARN]",
            (Self::Detail, false) => "  [>]",
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Step => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Detail => Color::DarkGrey,
        }
    }
}

pub struct ConsoleEventSink {
    style: ConsoleStyle,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(style: ConsoleStyle) -> Self {
        Self::with_writer(style, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(style: ConsoleStyle, writer: W) -> Self {
        Self {
            style,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, tone: Tone, text: String) {
        let icon = tone.icon(self.style.unicode);
        let icon = if self.style.color {
            icon.with(tone.color()).to_string()
        } else {
            icon.to_string()
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{} {}", icon, text);
        }
    }

    fn detail(&self, text: String) {
        if self.style.verbose {
            self.line(Tone::Detail, text);
        }
    }
}

fn step_label(step: &str) -> &str {
    match step {
        "credentials" => "Checking credentials",
        "reset" => "Resetting theme directory",
        "assets" => "Copying assets",
        "generate" => "Generating theme files",
        "archive" => "Creating archive",
        "publish" => "Publishing",
        "confirm" => "Waiting for confirmation",
        "dependencies" => "Checking history rewriter",
        "secret" => "Reading secret",
        "clone" => "Cloning mirror",
        "rewrite" => "Rewriting history",
        "compact" => "Expiring reflog and pruning objects",
        other => other,
    }
}

impl WorkflowEventSink for ConsoleEventSink {
    fn on_event(&self, event: WorkflowEvent) {
        match event {
            WorkflowEvent::StepStarted { step } => {
                self.line(Tone::Step, step_label(step).to_string())
            }
            WorkflowEvent::Notice { message } => self.line(Tone::Warning, message),
            WorkflowEvent::Authenticated { via } => {
                self.line(Tone::Success, format!("Authenticated via {}", via))
            }
            WorkflowEvent::DirectoryReset { target } => {
                self.detail(format!("recreated {}", target.display()))
            }
            WorkflowEvent::AssetCopied { name } => self.detail(format!("copied assets/{}", name)),
            WorkflowEvent::AssetSkipped { name } => self.line(
                Tone::Warning,
                format!("Asset {} not found in source directory, skipped", name),
            ),
            WorkflowEvent::FileWritten { path } => {
                self.detail(format!("wrote {}", path.display()))
            }
            WorkflowEvent::ArchiveCreated { path } => {
                self.line(Tone::Success, format!("Archive {}", path.display()))
            }
            WorkflowEvent::Committed { message } => {
                self.line(Tone::Success, format!("Committed \"{}\"", message))
            }
            WorkflowEvent::Pushed { remote, branch } => {
                self.line(Tone::Success, format!("Pushed {} to {}", branch, remote))
            }
            WorkflowEvent::MirrorCloned { path } => {
                self.detail(format!("mirror at {}", path.display()))
            }
            WorkflowEvent::HistoryRewritten { placeholder } => self.line(
                Tone::Success,
                format!("Secret replaced with {} in every revision", placeholder),
            ),
            WorkflowEvent::Compacted => self.detail("reflog expired, objects pruned".to_string()),
            WorkflowEvent::MirrorPushed { remote } => {
                self.line(Tone::Success, format!("Force-pushed all refs to {}", remote))
            }
            WorkflowEvent::WorkspaceRetained { path } => self.line(
                Tone::Warning,
                format!("Workspace kept for inspection: {}", path.display()),
            ),
            WorkflowEvent::WorkspaceRemoved { path } => {
                self.detail(format!("removed {}", path.display()))
            }
            WorkflowEvent::Completed { workflow } => {
                self.line(Tone::Success, format!("{} complete", workflow))
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.style.verbose
    }
}
