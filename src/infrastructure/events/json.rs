//! JSON Event Sink
//!
//! Outputs workflow events as NDJSON for CI/automation consumption.

use crate::domain::ports::{WorkflowEvent, WorkflowEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl WorkflowEventSink for JsonEventSink {
    fn on_event(&self, event: WorkflowEvent) {
        let command = self.command;
        let json = match event {
            WorkflowEvent::StepStarted { step } => serde_json::json!({
                "event": "step",
                "command": command,
                "step": step,
            }),
            WorkflowEvent::Notice { message } => serde_json::json!({
                "event": "notice",
                "command": command,
                "message": message,
            }),
            WorkflowEvent::Authenticated { via } => serde_json::json!({
                "event": "authenticated",
                "command": command,
                "via": via,
            }),
            WorkflowEvent::DirectoryReset { target } => serde_json::json!({
                "event": "directory_reset",
                "command": command,
                "target": target.display().to_string(),
            }),
            WorkflowEvent::AssetCopied { name } => serde_json::json!({
                "event": "asset_copied",
                "command": command,
                "name": name,
            }),
            WorkflowEvent::AssetSkipped { name } => serde_json::json!({
                "event": "asset_skipped",
                "command": command,
                "name": name,
            }),
            WorkflowEvent::FileWritten { path } => serde_json::json!({
                "event": "item_written",
                "command": command,
                "path": path.display().to_string(),
            }),
            WorkflowEvent::ArchiveCreated { path } => serde_json::json!({
                "event": "archive_created",
                "command": command,
                "path": path.display().to_string(),
            }),
            WorkflowEvent::Committed { message } => serde_json::json!({
                "event": "committed",
                "command": command,
                "message": message,
            }),
            WorkflowEvent::Pushed { remote, branch } => serde_json::json!({
                "event": "pushed",
                "command": command,
                "remote": remote,
                "branch": branch,
            }),
            WorkflowEvent::MirrorCloned { path } => serde_json::json!({
                "event": "mirror_cloned",
                "command": command,
                "path": path.display().to_string(),
            }),
            WorkflowEvent::HistoryRewritten { placeholder } => serde_json::json!({
                "event": "history_rewritten",
                "command": command,
                "placeholder": placeholder,
            }),
            WorkflowEvent::Compacted => serde_json::json!({
                "event": "compacted",
                "command": command,
            }),
            WorkflowEvent::MirrorPushed { remote } => serde_json::json!({
                "event": "mirror_pushed",
                "command": command,
                "remote": remote,
            }),
            WorkflowEvent::WorkspaceRetained { path } => serde_json::json!({
                "event": "workspace_retained",
                "command": command,
                "path": path.display().to_string(),
            }),
            WorkflowEvent::WorkspaceRemoved { path } => serde_json::json!({
                "event": "workspace_removed",
                "command": command,
                "path": path.display().to_string(),
            }),
            WorkflowEvent::Completed { workflow } => serde_json::json!({
                "event": "complete",
                "command": command,
                "workflow": workflow.as_str(),
                "status": "success",
            }),
        };
        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Workflow;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        String::from_utf8(buffer.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_writes_one_object_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("scaffold", writer);

        sink.on_event(WorkflowEvent::AssetSkipped {
            name: "hero.jpg".to_string(),
        });
        sink.on_event(WorkflowEvent::FileWritten {
            path: PathBuf::from("sections/cart-upsell.liquid"),
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "asset_skipped");
        assert_eq!(events[0]["command"], "scaffold");
        assert_eq!(events[0]["name"], "hero.jpg");
        assert_eq!(events[1]["path"], "sections/cart-upsell.liquid");
    }

    #[test]
    fn json_sink_outputs_complete_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("redact", writer);

        sink.on_event(WorkflowEvent::Completed {
            workflow: Workflow::Redact,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "complete");
        assert_eq!(events[0]["workflow"], "redact");
        assert_eq!(events[0]["status"], "success");
    }
}
