//! Recording fakes for use case tests

use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::domain::ports::{
    Archiver, CommandError, CommandResult, HistoryRewriter, HostingSession, OperatorPrompt,
    SecretSource, VersionControl, WorkflowEvent, WorkflowEventSink,
};
use crate::domain::value_objects::{AccessToken, ExposedSecret};

pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

fn failed(command: &str) -> CommandError {
    CommandError::Failed {
        command: command.to_string(),
        code: Some(1),
        stderr: format!("{} failed", command),
    }
}

pub struct FakeSession {
    pub active: Cell<bool>,
    pub accepted_token: Option<String>,
    pub setup_git_fails: bool,
    pub log: CallLog,
}

impl FakeSession {
    pub fn active(log: &CallLog) -> Self {
        Self {
            active: Cell::new(true),
            accepted_token: None,
            setup_git_fails: false,
            log: log.clone(),
        }
    }

    pub fn inactive(log: &CallLog) -> Self {
        Self {
            active: Cell::new(false),
            ..Self::active(log)
        }
    }

    pub fn accepting(mut self, token: &str) -> Self {
        self.accepted_token = Some(token.to_string());
        self
    }
}

impl HostingSession for FakeSession {
    fn name(&self) -> &'static str {
        "gh"
    }

    fn is_active(&self) -> bool {
        self.log.borrow_mut().push("session.status".to_string());
        self.active.get()
    }

    fn login(&self, token: &AccessToken) -> CommandResult<()> {
        self.log.borrow_mut().push("session.login".to_string());
        if self.accepted_token.as_deref() == Some(token.expose()) {
            self.active.set(true);
            Ok(())
        } else {
            Err(failed("gh auth login"))
        }
    }

    fn setup_git(&self) -> CommandResult<()> {
        self.log.borrow_mut().push("session.setup_git".to_string());
        if self.setup_git_fails {
            Err(failed("gh auth setup-git"))
        } else {
            Ok(())
        }
    }
}

/// Version control fake. `clone_mirror` materialises `history` as files so
/// rewriter fakes have something to scrub.
pub struct FakeVcs {
    pub log: CallLog,
    pub fail_on: Option<&'static str>,
    pub history: Vec<(String, String)>,
}

impl FakeVcs {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail_on: None,
            history: Vec::new(),
        }
    }

    pub fn failing_on(mut self, op: &'static str) -> Self {
        self.fail_on = Some(op);
        self
    }

    pub fn with_history(mut self, files: &[(&str, &str)]) -> Self {
        self.history = files
            .iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect();
        self
    }

    fn record(&self, op: &'static str) -> CommandResult<()> {
        self.log.borrow_mut().push(format!("vcs.{}", op));
        if self.fail_on == Some(op) {
            Err(failed(&format!("git {}", op)))
        } else {
            Ok(())
        }
    }
}

impl VersionControl for FakeVcs {
    fn init(&self, dir: &Path) -> CommandResult<()> {
        self.record("init")?;
        fs::create_dir_all(dir.join(".git")).map_err(|e| CommandError::Spawn {
            command: "git init".into(),
            message: e.to_string(),
        })
    }

    fn add_all(&self, _dir: &Path) -> CommandResult<()> {
        self.record("add")
    }

    fn commit(&self, _dir: &Path, _message: &str) -> CommandResult<()> {
        self.record("commit")
    }

    fn rename_branch(&self, _dir: &Path, _branch: &str) -> CommandResult<()> {
        self.record("branch")
    }

    fn set_remote(&self, _dir: &Path, _name: &str, url: &str) -> CommandResult<()> {
        self.log.borrow_mut().push(format!("remote={}", url));
        self.record("remote")
    }

    fn push(&self, _dir: &Path, _remote: &str, _branch: &str) -> CommandResult<()> {
        self.record("push")
    }

    fn clone_mirror(&self, _url: &str, dest: &Path) -> CommandResult<()> {
        self.record("clone")?;
        for (path, content) in &self.history {
            let file = dest.join(path);
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(file, content).unwrap();
        }
        fs::create_dir_all(dest).unwrap();
        Ok(())
    }

    fn expire_reflog(&self, _repo: &Path) -> CommandResult<()> {
        self.record("reflog")
    }

    fn gc_aggressive(&self, _repo: &Path) -> CommandResult<()> {
        self.record("gc")
    }

    fn push_mirror(&self, _repo: &Path, _url: &str) -> CommandResult<()> {
        self.record("push_mirror")
    }
}

pub struct FakeArchiver {
    pub fail: bool,
    pub log: CallLog,
}

impl Archiver for FakeArchiver {
    fn name(&self) -> &'static str {
        "fake-zip"
    }

    fn archive(&self, _source_dir: &Path, archive: &Path) -> CommandResult<()> {
        self.log.borrow_mut().push("archive".to_string());
        if self.fail {
            return Err(failed("zip"));
        }
        fs::write(archive, b"PK").unwrap();
        Ok(())
    }
}

/// Rewriter fake that applies `literal:` rules to every file in the repo
pub struct FakeRewriter {
    pub available: bool,
    pub log: CallLog,
    pub seen_rules_file: RefCell<Option<PathBuf>>,
}

impl FakeRewriter {
    pub fn new(log: &CallLog) -> Self {
        Self {
            available: true,
            log: log.clone(),
            seen_rules_file: RefCell::new(None),
        }
    }
}

impl HistoryRewriter for FakeRewriter {
    fn name(&self) -> &'static str {
        "fake-filter-repo"
    }

    fn is_available(&self) -> bool {
        self.log.borrow_mut().push("rewriter.available".to_string());
        self.available
    }

    fn install_hint(&self) -> &'static str {
        "install the fake"
    }

    fn replace_text(&self, repo: &Path, rules_file: &Path) -> CommandResult<()> {
        self.log.borrow_mut().push("rewriter.replace".to_string());
        *self.seen_rules_file.borrow_mut() = Some(rules_file.to_path_buf());

        let rules = fs::read_to_string(rules_file).unwrap();
        let pairs: Vec<(String, String)> = rules
            .lines()
            .filter_map(|l| l.strip_prefix("literal:"))
            .filter_map(|l| l.rsplit_once("==>"))
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();

        for file in walk(repo) {
            let mut content = fs::read_to_string(&file).unwrap();
            for (from, to) in &pairs {
                content = content.replace(from.as_str(), to);
            }
            fs::write(&file, content).unwrap();
        }
        Ok(())
    }
}

pub fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                out.extend(walk(&path));
            } else {
                out.push(path);
            }
        }
    }
    out
}

pub struct FixedPrompt {
    pub answer: String,
    pub log: CallLog,
}

impl OperatorPrompt for FixedPrompt {
    fn ask(&self, _question: &str) -> io::Result<String> {
        self.log.borrow_mut().push("prompt.ask".to_string());
        Ok(self.answer.clone())
    }
}

pub struct FixedSecret {
    pub secret: Option<String>,
    pub log: CallLog,
}

impl SecretSource for FixedSecret {
    fn read_secret(&self, _prompt: &str) -> io::Result<Option<ExposedSecret>> {
        self.log.borrow_mut().push("secret.read".to_string());
        Ok(self.secret.clone().map(ExposedSecret::new))
    }
}

#[derive(Clone, Default)]
pub struct RecordingSink {
    pub events: Rc<RefCell<Vec<WorkflowEvent>>>,
}

impl RecordingSink {
    pub fn notices(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                WorkflowEvent::Notice { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl WorkflowEventSink for RecordingSink {
    fn on_event(&self, event: WorkflowEvent) {
        self.events.borrow_mut().push(event);
    }
}
