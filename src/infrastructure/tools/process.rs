//! Process runner
//!
//! Runs external programs to completion. Only the exit status decides
//! success; stderr is captured so failures can be shown verbatim.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use crate::domain::ports::{CommandError, CommandResult};

/// Run `cmd`, discarding stdout and capturing stderr.
///
/// `label` names the command in errors. It must not carry arguments the
/// operator did not type (URLs, temp paths).
pub fn run(label: &str, cmd: &mut Command) -> CommandResult<()> {
    let output = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| spawn_error(label, e))?;
    check(label, output)
}

/// Run `cmd` with `input` written to its stdin, then closed
pub fn run_with_input(label: &str, cmd: &mut Command, input: &[u8]) -> CommandResult<()> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(label, e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input).map_err(|e| spawn_error(label, e))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| spawn_error(label, e))?;
    check(label, output)
}

/// Whether `cmd` runs and exits successfully; all output discarded
pub fn succeeds(cmd: &mut Command) -> bool {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn check(label: &str, output: Output) -> CommandResult<()> {
    if output.status.success() {
        Ok(())
    } else {
        Err(CommandError::Failed {
            command: label.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn spawn_error(label: &str, err: std::io::Error) -> CommandError {
    CommandError::Spawn {
        command: label.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "themeops-definitely-not-installed";

    #[test]
    fn missing_program_is_spawn_error() {
        let err = run("probe", &mut Command::new(MISSING)).unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
        assert_eq!(err.command(), "probe");
    }

    #[test]
    fn missing_program_does_not_succeed() {
        assert!(!succeeds(&mut Command::new(MISSING)));
    }

    #[cfg(unix)]
    #[test]
    fn failure_carries_exit_code_and_stderr() {
        let err = run(
            "sh",
            Command::new("sh").arg("-c").arg("echo boom >&2; exit 3"),
        )
        .unwrap_err();
        match err {
            CommandError::Failed { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr.trim(), "boom");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn input_reaches_stdin() {
        let result = run_with_input(
            "sh",
            Command::new("sh").arg("-c").arg("read line; test \"$line\" = hello"),
            b"hello\n",
        );
        assert!(result.is_ok());
    }
}
