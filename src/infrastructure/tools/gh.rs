//! GitHub CLI session adapter

use std::process::Command;

use zeroize::Zeroizing;

use super::process;
use crate::domain::ports::{CommandResult, HostingSession};
use crate::domain::value_objects::AccessToken;

/// Hosting session backed by `gh auth`
pub struct GhCliSession {
    program: String,
    host: String,
}

impl GhCliSession {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            program: "gh".to_string(),
            host: host.into(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn auth(&self, subcommand: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["auth", subcommand, "--hostname", &self.host]);
        cmd
    }
}

impl HostingSession for GhCliSession {
    fn name(&self) -> &'static str {
        "gh"
    }

    fn is_active(&self) -> bool {
        process::succeeds(&mut self.auth("status"))
    }

    fn login(&self, token: &AccessToken) -> CommandResult<()> {
        let mut cmd = self.auth("login");
        // gh refuses to store a token while one is exported
        cmd.arg("--with-token")
            .env_remove("GH_TOKEN")
            .env_remove("GITHUB_TOKEN");
        let input = Zeroizing::new(format!("{}\n", token.expose()));
        process::run_with_input("gh auth login", &mut cmd, input.as_bytes())
    }

    fn setup_git(&self) -> CommandResult<()> {
        process::run("gh auth setup-git", &mut self.auth("setup-git"))
    }
}
