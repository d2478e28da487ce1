//! Local git fixtures: a bare origin reachable over `file://`

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::process;

pub fn git_available() -> bool {
    process::succeeds(Command::new("git").arg("--version"))
}

/// Run git with a fixed identity and return stdout
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .env("GIT_AUTHOR_NAME", "themeops")
        .env("GIT_AUTHOR_EMAIL", "themeops@example.com")
        .env("GIT_COMMITTER_NAME", "themeops")
        .env("GIT_COMMITTER_EMAIL", "themeops@example.com")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Bare repository whose history is one commit per `(path, content)` entry
pub struct Origin {
    pub path: PathBuf,
}

impl Origin {
    pub fn create(root: &Path, commits: &[(&str, &str)]) -> Self {
        let path = root.join("origin.git");
        std::fs::create_dir_all(&path).unwrap();
        git(&path, &["init", "--bare", "-q"]);

        let work = root.join("work");
        std::fs::create_dir_all(&work).unwrap();
        git(&work, &["init", "-q"]);
        for (i, (file, content)) in commits.iter().enumerate() {
            std::fs::write(work.join(file), content).unwrap();
            git(&work, &["add", "-A"]);
            git(&work, &["commit", "-q", "-m", &format!("change {}", i + 1)]);
        }
        git(&work, &["branch", "feature"]);
        git(&work, &["push", "-q", "--all", path.to_str().unwrap()]);

        Self { path }
    }

    pub fn url(&self) -> String {
        format!("file://{}", self.path.display())
    }

    pub fn branches(&self) -> Vec<String> {
        let mut branches: Vec<String> = git(
            &self.path,
            &["for-each-ref", "--format=%(refname)", "refs/heads"],
        )
        .lines()
        .map(str::to_string)
        .collect();
        branches.sort();
        branches
    }
}

/// Concatenated contents of every object reachable from any ref
pub fn reachable_objects(repo: &Path) -> String {
    let listing = git(repo, &["rev-list", "--all", "--objects"]);
    let ids: String = listing
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .map(|id| format!("{}\n", id))
        .collect();

    let mut child = Command::new("git")
        .current_dir(repo)
        .args(["cat-file", "--batch"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(ids.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Concatenated contents of every object in the store, reachable or not
pub fn stored_objects(repo: &Path) -> String {
    let output = Command::new("git")
        .current_dir(repo)
        .args(["cat-file", "--batch-all-objects", "--batch"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).into_owned()
}
