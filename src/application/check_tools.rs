//! Check Tools Use Case
//!
//! Reports whether the external programs both workflows shell out to are
//! installed, and whether publishing would find a credential.

use std::path::PathBuf;

use crate::domain::ports::{HostingSession, ToolLocator};

/// An external program the workflows depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRequirement {
    pub program: &'static str,
    /// Which workflow needs it
    pub used_by: &'static str,
    /// Missing required tools fail the check; optional ones only warn
    pub required: bool,
    pub install_hint: &'static str,
}

pub const TOOLS: &[ToolRequirement] = &[
    ToolRequirement {
        program: "git",
        used_by: "scaffold, redact",
        required: true,
        install_hint: "Install git from https://git-scm.com/downloads",
    },
    ToolRequirement {
        program: "gh",
        used_by: "scaffold",
        required: true,
        install_hint: "Install the GitHub CLI from https://cli.github.com",
    },
    ToolRequirement {
        program: "git-filter-repo",
        used_by: "redact",
        required: true,
        install_hint: "pip install git-filter-repo (or your package manager's git-filter-repo)",
    },
    ToolRequirement {
        program: "zip",
        used_by: "scaffold (archive)",
        required: false,
        install_hint: "Install zip; without it the theme archive is skipped",
    },
];

/// Options for the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckToolsOptions {
    /// Whether GH_TOKEN / GITHUB_TOKEN is set
    pub token_present: bool,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Result of a single check
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    /// Where the program was found
    pub location: Option<PathBuf>,
    pub recommendation: Option<String>,
}

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckToolsResult {
    pub items: Vec<CheckItem>,
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl CheckToolsResult {
    /// No required tool is missing
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    fn push(&mut self, item: CheckItem) {
        match item.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(item);
    }
}

/// Check Tools Use Case
pub struct CheckToolsUseCase<L, S>
where
    L: ToolLocator,
    S: HostingSession,
{
    locator: L,
    session: S,
}

impl<L, S> CheckToolsUseCase<L, S>
where
    L: ToolLocator,
    S: HostingSession,
{
    pub fn new(locator: L, session: S) -> Self {
        Self { locator, session }
    }

    /// Run every check, calling `on_check` as each one completes
    pub fn execute_with_callback<F>(
        &self,
        options: &CheckToolsOptions,
        mut on_check: F,
    ) -> CheckToolsResult
    where
        F: FnMut(&CheckItem),
    {
        let mut result = CheckToolsResult::default();
        let mut session_tool_found = false;

        for tool in TOOLS {
            let location = self.locator.locate(tool.program);
            if tool.program == self.session.name() {
                session_tool_found = location.is_some();
            }
            let item = match location {
                Some(path) => CheckItem {
                    name: tool.program.to_string(),
                    status: CheckStatus::Pass,
                    message: format!("found (used by {})", tool.used_by),
                    location: Some(path),
                    recommendation: None,
                },
                None => CheckItem {
                    name: tool.program.to_string(),
                    status: if tool.required {
                        CheckStatus::Error
                    } else {
                        CheckStatus::Warning
                    },
                    message: format!("not found on PATH (used by {})", tool.used_by),
                    location: None,
                    recommendation: Some(tool.install_hint.to_string()),
                },
            };
            on_check(&item);
            result.push(item);
        }

        let item = self.credential_item(session_tool_found, options.token_present);
        on_check(&item);
        result.push(item);

        result
    }

    pub fn execute(&self, options: &CheckToolsOptions) -> CheckToolsResult {
        self.execute_with_callback(options, |_| {})
    }

    fn credential_item(&self, session_tool_found: bool, token_present: bool) -> CheckItem {
        let (status, message, recommendation) =
            if session_tool_found && self.session.is_active() {
                (
                    CheckStatus::Pass,
                    format!("{} session is active", self.session.name()),
                    None,
                )
            } else if token_present {
                (
                    CheckStatus::Pass,
                    "access token found in environment".to_string(),
                    None,
                )
            } else {
                (
                    CheckStatus::Warning,
                    "no active session and no access token".to_string(),
                    Some(
                        "Run `gh auth login` or export GH_TOKEN before `themeops scaffold`"
                            .to_string(),
                    ),
                )
            };
        CheckItem {
            name: "credentials".to_string(),
            status,
            message,
            location: None,
            recommendation,
        }
    }
}
