//! Isolated environment for running the themeops binary.
//!
//! Every run gets an empty PATH, its own HOME/config/temp directories and
//! none of the credential variables, so results never depend on the
//! machine the tests run on.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde_json::Value;
use tempfile::TempDir;

const CREDENTIAL_VARS: &[&str] = &["GH_TOKEN", "GITHUB_TOKEN", "THEMEOPS_REDACT_SECRET"];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON, skipping blank lines
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("invalid NDJSON line {l:?}: {e}"))
            })
            .collect()
    }

    pub fn last_event(&self) -> Value {
        self.events()
            .pop()
            .unwrap_or_else(|| panic!("no events on stdout; stderr:\n{}", self.stderr))
    }
}

pub struct TestEnv {
    pub project: TempDir,
    pub home: TempDir,
    pub tmp: TempDir,
    /// The only directory on PATH
    pub bin_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
            tmp: TempDir::new().unwrap(),
            bin_dir: TempDir::new().unwrap(),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Put an executable shell script on PATH
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.path().join(name);
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Expose a real executable from the host PATH; false when it is not installed
    #[cfg(unix)]
    pub fn link_host_tool(&self, name: &str) -> bool {
        match which::which(name) {
            Ok(path) => {
                std::os::unix::fs::symlink(path, self.bin_dir.path().join(name)).unwrap();
                true
            }
            Err(_) => false,
        }
    }

    pub fn tmp_entries(&self) -> usize {
        std::fs::read_dir(self.tmp.path()).unwrap().count()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, "")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestResult {
        self.run_with_env(args, stdin, &[])
    }

    pub fn run_with_env(
        &self,
        args: &[&str],
        stdin: &str,
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_themeops"));
        cmd.current_dir(self.project.path())
            .args(args)
            .env("PATH", self.bin_dir.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("APPDATA", self.home.path())
            .env("TMPDIR", self.tmp.path())
            .env("TMP", self.tmp.path())
            .env("TEMP", self.tmp.path())
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for var in CREDENTIAL_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("failed to execute themeops");
        {
            let mut input = child.stdin.take().unwrap();
            // The binary may exit before reading everything.
            let _ = input.write_all(stdin.as_bytes());
        }
        let output = child.wait_with_output().unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
