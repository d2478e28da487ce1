//! Scaffold Use Case
//!
//! Orchestrates the scaffold-and-publish flow. Every step is blocking and
//! runs only after the previous one returned.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::entities::TemplateFile;
use crate::domain::ports::{
    Archiver, CommandError, HostingSession, VersionControl, Workflow, WorkflowEvent,
    WorkflowEventSink,
};
use crate::domain::services::render_theme;
use crate::domain::value_objects::{AccessToken, CredentialStatus, Fingerprint};
use crate::error::{ThemeOpsError, ThemeOpsResult};

use super::options::ScaffoldOptions;
use super::result::ScaffoldResult;

const REMOTE_NAME: &str = "origin";

/// Scaffold use case - regenerates a theme and publishes it
pub struct ScaffoldUseCase<S, V, A, E>
where
    S: HostingSession,
    V: VersionControl,
    A: Archiver,
    E: WorkflowEventSink,
{
    session: S,
    vcs: V,
    archiver: A,
    events: E,
}

impl<S, V, A, E> ScaffoldUseCase<S, V, A, E>
where
    S: HostingSession,
    V: VersionControl,
    A: Archiver,
    E: WorkflowEventSink,
{
    pub fn new(session: S, vcs: V, archiver: A, events: E) -> Self {
        Self {
            session,
            vcs,
            archiver,
            events,
        }
    }

    /// Run the whole workflow.
    ///
    /// Nothing on disk is touched until authentication has succeeded.
    pub fn execute(&self, options: &ScaffoldOptions) -> ThemeOpsResult<ScaffoldResult> {
        let target = options.target.as_path();
        ensure_safe_target(target)?;

        self.step("credentials");
        let credential = authenticate(&self.session, options.token.as_ref())?;
        self.events.on_event(WorkflowEvent::Authenticated {
            via: credential.as_str(),
        });
        if let Err(err) = self.session.setup_git() {
            self.notice(format!(
                "could not register {} as git credential helper ({}); push may prompt for credentials",
                self.session.name(),
                err
            ));
        }

        self.step("reset");
        self.reset_directory(options)?;

        self.step("assets");
        let (copied, skipped) = self.copy_assets(options)?;

        self.step("generate");
        let files = render_theme(&options.layout);
        self.write_files(target, &files)?;
        let fingerprint = Fingerprint::compute(
            files
                .iter()
                .map(|f| (f.path(), f.content().as_bytes())),
        );

        self.step("archive");
        let archive = self.create_archive(target);

        self.step("publish");
        let committed = self.publish(options, credential)?;

        self.events.on_event(WorkflowEvent::Completed {
            workflow: Workflow::Scaffold,
        });

        Ok(ScaffoldResult {
            target: target.to_path_buf(),
            credential,
            copied,
            skipped,
            generated: files.iter().map(|f| f.path().to_path_buf()).collect(),
            fingerprint,
            archive,
            committed,
            remote_url: options.remote_url(),
            branch: options.branch.clone(),
        })
    }

    fn reset_directory(&self, options: &ScaffoldOptions) -> ThemeOpsResult<()> {
        let target = options.target.as_path();
        if target.exists() {
            fs::remove_dir_all(target)?;
        }
        for dir in options.layout.dirs() {
            fs::create_dir_all(target.join(dir.as_str()))?;
        }
        self.events.on_event(WorkflowEvent::DirectoryReset {
            target: target.to_path_buf(),
        });
        Ok(())
    }

    fn copy_assets(&self, options: &ScaffoldOptions) -> ThemeOpsResult<(Vec<String>, Vec<String>)> {
        let dest_dir = options.target.join("assets");
        let mut copied = Vec::new();
        let mut skipped = Vec::new();

        for name in options.layout.assets() {
            let source = options.assets_source.join(name);
            if source.is_file() {
                fs::copy(&source, dest_dir.join(name))?;
                self.events
                    .on_event(WorkflowEvent::AssetCopied { name: name.clone() });
                copied.push(name.clone());
            } else {
                self.events
                    .on_event(WorkflowEvent::AssetSkipped { name: name.clone() });
                skipped.push(name.clone());
            }
        }

        Ok((copied, skipped))
    }

    fn write_files(&self, target: &Path, files: &[TemplateFile]) -> ThemeOpsResult<()> {
        let detailed = self.events.wants_detailed_events();
        for file in files {
            let path = target.join(file.path());
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, file.content())?;
            if detailed {
                self.events.on_event(WorkflowEvent::FileWritten {
                    path: file.path().to_path_buf(),
                });
            }
        }
        Ok(())
    }

    /// Archive failures are reported and dropped; the archive is a convenience.
    fn create_archive(&self, target: &Path) -> Option<PathBuf> {
        let archive = archive_path_for(target)?;

        if archive.exists() {
            if let Err(err) = fs::remove_file(&archive) {
                self.notice(format!(
                    "could not remove stale archive {}: {}",
                    archive.display(),
                    err
                ));
                return None;
            }
        }

        match self.archiver.archive(target, &archive) {
            Ok(()) => {
                self.events.on_event(WorkflowEvent::ArchiveCreated {
                    path: archive.clone(),
                });
                Some(archive)
            }
            Err(err) => {
                self.notice(format!("archive not created: {}", err));
                None
            }
        }
    }

    /// Returns whether the initial commit was created.
    fn publish(
        &self,
        options: &ScaffoldOptions,
        credential: CredentialStatus,
    ) -> ThemeOpsResult<bool> {
        let target = options.target.as_path();
        let git_dir = target.join(".git");
        if git_dir.exists() {
            fs::remove_dir_all(&git_dir)?;
        }

        self.vcs.init(target).map_err(command_failed)?;
        self.vcs.add_all(target).map_err(command_failed)?;

        let committed = match self.vcs.commit(target, &options.commit_message) {
            Ok(()) => {
                self.events.on_event(WorkflowEvent::Committed {
                    message: options.commit_message.clone(),
                });
                true
            }
            Err(err) => {
                self.notice(format!("commit skipped: {}", err));
                false
            }
        };

        self.vcs
            .rename_branch(target, &options.branch)
            .map_err(command_failed)?;

        let remote_url = options.remote_url();
        self.vcs
            .set_remote(target, REMOTE_NAME, &remote_url)
            .map_err(command_failed)?;

        self.vcs
            .push(target, REMOTE_NAME, &options.branch)
            .map_err(|err| ThemeOpsError::PushFailed {
                remote: remote_url.clone(),
                message: format!("{} (authenticated via {})", err.detail(), credential),
            })?;

        self.events.on_event(WorkflowEvent::Pushed {
            remote: remote_url,
            branch: options.branch.clone(),
        });
        Ok(committed)
    }

    fn step(&self, step: &'static str) {
        self.events.on_event(WorkflowEvent::StepStarted { step });
    }

    fn notice(&self, message: String) {
        self.events.on_event(WorkflowEvent::Notice { message });
    }
}

/// Decide how this run is authenticated.
///
/// An active session wins; otherwise a supplied token is used to log in.
/// With neither, the run cannot publish and must not start.
pub fn authenticate(
    session: &impl HostingSession,
    token: Option<&AccessToken>,
) -> ThemeOpsResult<CredentialStatus> {
    if session.is_active() {
        return Ok(CredentialStatus::Session);
    }

    let token = token.ok_or(ThemeOpsError::MissingCredential)?;
    session
        .login(token)
        .map_err(|err| ThemeOpsError::AuthenticationFailed {
            message: err.detail(),
        })?;

    if !session.is_active() {
        return Err(ThemeOpsError::AuthenticationFailed {
            message: format!("{} reports no active session after login", session.name()),
        });
    }
    Ok(CredentialStatus::Token)
}

/// Refuse targets whose recursive deletion would destroy something
/// other than generated output.
pub fn ensure_safe_target(target: &Path) -> ThemeOpsResult<()> {
    let unsafe_target = || ThemeOpsError::UnsafeTarget {
        path: target.to_path_buf(),
    };

    if !target
        .components()
        .any(|c| matches!(c, Component::Normal(_)))
    {
        return Err(unsafe_target());
    }

    if let Ok(canonical) = target.canonicalize() {
        if canonical.parent().is_none() {
            return Err(unsafe_target());
        }
        if dirs::home_dir()
            .and_then(|h| h.canonicalize().ok())
            .is_some_and(|home| home == canonical)
        {
            return Err(unsafe_target());
        }
        if std::env::current_dir()
            .and_then(|d| d.canonicalize())
            .is_ok_and(|cwd| cwd == canonical || cwd.starts_with(&canonical))
        {
            return Err(unsafe_target());
        }
    }

    Ok(())
}

/// `<target>.zip`, next to the theme directory
pub fn archive_path_for(target: &Path) -> Option<PathBuf> {
    let name = target.file_name()?;
    let mut archive_name = name.to_os_string();
    archive_name.push(".zip");
    Some(target.with_file_name(archive_name))
}

fn command_failed(err: CommandError) -> ThemeOpsError {
    ThemeOpsError::CommandFailed {
        command: err.command().to_string(),
        message: err.detail(),
    }
}
