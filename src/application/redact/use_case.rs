//! Redact Use Case
//!
//! Orchestrates history redaction. Each external call blocks until it
//! finishes; nothing is retried, since a half-applied rewrite must not be
//! replayed blindly.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::domain::entities::ReplacementRule;
use crate::domain::ports::{
    CommandError, HistoryRewriter, OperatorPrompt, SecretSource, VersionControl, Workflow,
    WorkflowEvent, WorkflowEventSink,
};
use crate::domain::value_objects::mirror_dir_name;
use crate::error::{ThemeOpsError, ThemeOpsResult};

use super::options::RedactOptions;
use super::result::RedactResult;

/// The only answer that passes the confirmation gate
pub const CONFIRMATION_PHRASE: &str = "yes";

pub const CONFIRM_QUESTION: &str = "Rewriting history does not revoke a leaked credential.\n\
Has the exposed credential already been revoked at its source? Type 'yes' to continue";

pub const SECRET_PROMPT: &str = "Secret to redact (input hidden)";

const WORKSPACE_PREFIX: &str = "themeops-redact-";

/// Redact use case - scrubs a secret from every revision of a remote
pub struct RedactUseCase<P, S, V, R, E>
where
    P: OperatorPrompt,
    S: SecretSource,
    V: VersionControl,
    R: HistoryRewriter,
    E: WorkflowEventSink,
{
    prompt: P,
    secrets: S,
    vcs: V,
    rewriter: R,
    events: E,
}

/// Scratch directory that is either kept for inspection or removed on drop
enum Workspace {
    Kept(PathBuf),
    Temporary(TempDir),
}

impl Workspace {
    fn create(options: &RedactOptions) -> ThemeOpsResult<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORKSPACE_PREFIX);
        let dir = match &options.workspace_root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };
        Ok(if options.keep_workspace {
            Self::Kept(dir.keep())
        } else {
            Self::Temporary(dir)
        })
    }

    fn path(&self) -> &Path {
        match self {
            Self::Kept(path) => path,
            Self::Temporary(dir) => dir.path(),
        }
    }
}

impl<P, S, V, R, E> RedactUseCase<P, S, V, R, E>
where
    P: OperatorPrompt,
    S: SecretSource,
    V: VersionControl,
    R: HistoryRewriter,
    E: WorkflowEventSink,
{
    pub fn new(prompt: P, secrets: S, vcs: V, rewriter: R, events: E) -> Self {
        Self {
            prompt,
            secrets,
            vcs,
            rewriter,
            events,
        }
    }

    /// Run the whole workflow.
    ///
    /// The confirmation gate, tool check and secret capture all happen
    /// before anything is cloned.
    pub fn execute(&self, options: &RedactOptions) -> ThemeOpsResult<RedactResult> {
        self.step("confirm");
        let answer = self.prompt.ask(CONFIRM_QUESTION)?;
        if answer.trim() != CONFIRMATION_PHRASE {
            return Err(ThemeOpsError::AbortedByOperator {
                reason: "revocation of the exposed credential was not confirmed".to_string(),
            });
        }

        self.step("dependencies");
        if !self.rewriter.is_available() {
            return Err(ThemeOpsError::MissingDependency {
                tool: self.rewriter.name().to_string(),
                hint: self.rewriter.install_hint().to_string(),
            });
        }

        self.step("secret");
        let secret = self
            .secrets
            .read_secret(SECRET_PROMPT)?
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ThemeOpsError::AbortedByOperator {
                reason: "no secret entered".to_string(),
            })?;
        let rule = ReplacementRule::new(secret, options.placeholder.as_str()).ok_or_else(|| {
            ThemeOpsError::AbortedByOperator {
                reason: "secret and placeholder must be single-line and must not contain '==>'"
                    .to_string(),
            }
        })?;

        self.step("clone");
        let workspace = Workspace::create(options)?;
        let mirror = workspace.path().join(mirror_dir_name(&options.remote));
        self.vcs
            .clone_mirror(&options.remote, &mirror)
            .map_err(command_failed)?;
        self.events.on_event(WorkflowEvent::MirrorCloned {
            path: mirror.clone(),
        });

        self.step("rewrite");
        self.rewrite(&rule, workspace.path(), &mirror)?;
        self.events.on_event(WorkflowEvent::HistoryRewritten {
            placeholder: rule.placeholder().to_string(),
        });
        drop(rule);

        self.step("compact");
        self.vcs.expire_reflog(&mirror).map_err(command_failed)?;
        self.vcs.gc_aggressive(&mirror).map_err(command_failed)?;
        self.events.on_event(WorkflowEvent::Compacted);

        self.step("publish");
        self.vcs
            .push_mirror(&mirror, &options.remote)
            .map_err(|err| ThemeOpsError::PushFailed {
                remote: options.remote.clone(),
                message: err.detail(),
            })?;
        self.events.on_event(WorkflowEvent::MirrorPushed {
            remote: options.remote.clone(),
        });

        let workspace_path = workspace.path().to_path_buf();
        let retained = match workspace {
            Workspace::Kept(path) => {
                self.events
                    .on_event(WorkflowEvent::WorkspaceRetained { path });
                true
            }
            Workspace::Temporary(dir) => {
                dir.close()?;
                self.events.on_event(WorkflowEvent::WorkspaceRemoved {
                    path: workspace_path.clone(),
                });
                false
            }
        };

        self.events.on_event(WorkflowEvent::Completed {
            workflow: Workflow::Redact,
        });

        Ok(RedactResult {
            remote: options.remote.clone(),
            workspace: workspace_path,
            mirror,
            retained,
            placeholder: options.placeholder.clone(),
        })
    }

    /// Write the rule to a private file beside the mirror, run the
    /// rewriter, and delete the file whatever the outcome.
    fn rewrite(
        &self,
        rule: &ReplacementRule,
        workspace: &Path,
        mirror: &Path,
    ) -> ThemeOpsResult<()> {
        let mut rules_file = tempfile::Builder::new()
            .prefix("replace-")
            .suffix(".txt")
            .tempfile_in(workspace)?;
        rules_file.write_all(rule.to_rules_file().as_bytes())?;
        rules_file.flush()?;

        let outcome = self.rewriter.replace_text(mirror, rules_file.path());
        let removed = rules_file.close();

        outcome.map_err(command_failed)?;
        removed?;
        Ok(())
    }

    fn step(&self, step: &'static str) {
        self.events.on_event(WorkflowEvent::StepStarted { step });
    }
}

fn command_failed(err: CommandError) -> ThemeOpsError {
    ThemeOpsError::CommandFailed {
        command: err.command().to_string(),
        message: err.detail(),
    }
}
