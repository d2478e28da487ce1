//! Command Error
//!
//! Failure of an external collaborator. Only the exit status is consulted;
//! captured stderr is carried along so the operator sees it verbatim.

/// Result type for collaborator calls
pub type CommandResult<T> = Result<T, CommandError>;

/// Error from running an external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Program could not be started (not installed, not executable)
    Spawn { command: String, message: String },
    /// Program ran and exited unsuccessfully
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl CommandError {
    /// Command line (program and subcommand) that failed
    pub fn command(&self) -> &str {
        match self {
            Self::Spawn { command, .. } | Self::Failed { command, .. } => command,
        }
    }

    /// Human-readable detail without the command prefix
    pub fn detail(&self) -> String {
        match self {
            Self::Spawn { message, .. } => message.clone(),
            Self::Failed { code, stderr, .. } => {
                let stderr = stderr.trim();
                match (code, stderr.is_empty()) {
                    (Some(code), true) => format!("exited with status {}", code),
                    (Some(code), false) => format!("exited with status {}: {}", code, stderr),
                    (None, true) => "terminated by signal".to_string(),
                    (None, false) => format!("terminated by signal: {}", stderr),
                }
            }
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` {}", self.command(), self.detail())
    }
}

impl std::error::Error for CommandError {}
