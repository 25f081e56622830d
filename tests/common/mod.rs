//! Common test utilities
//!
//! A recording mock of the repository-client interface, plus helpers for
//! building scratch git repositories on disk.

#![allow(dead_code)]

use gitask::error::{GitError, GitResult};
use gitask::git::{FileStatus, GitClient, Repository, Status};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    Open(PathBuf),
    Status,
    Add { paths: Vec<String>, all: bool },
    Commit { message: String },
}

/// A git client that records every call and serves a canned status snapshot
pub struct MockGitClient {
    status: Status,
    fail_open: bool,
    fail_add: bool,
    fail_commit: bool,
    calls: Arc<Mutex<Vec<RepoCall>>>,
}

impl MockGitClient {
    pub fn new() -> Self {
        MockGitClient::with_status(Status::default())
    }

    pub fn with_status(status: Status) -> Self {
        MockGitClient {
            status,
            fail_open: false,
            fail_add: false,
            fail_commit: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub fn failing_add(mut self) -> Self {
        self.fail_add = true;
        self
    }

    pub fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    /// All calls recorded so far, in order
    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl GitClient for MockGitClient {
    fn open(&self, working_directory: &Path) -> GitResult<Box<dyn Repository>> {
        self.calls
            .lock()
            .unwrap()
            .push(RepoCall::Open(working_directory.to_path_buf()));

        if self.fail_open {
            return Err(GitError::Open {
                path: working_directory.to_path_buf(),
                reason: "not a git repository".to_string(),
            });
        }

        Ok(Box::new(MockRepository {
            status: self.status.clone(),
            fail_add: self.fail_add,
            fail_commit: self.fail_commit,
            calls: Arc::clone(&self.calls),
        }))
    }
}

struct MockRepository {
    status: Status,
    fail_add: bool,
    fail_commit: bool,
    calls: Arc<Mutex<Vec<RepoCall>>>,
}

impl Repository for MockRepository {
    fn status(&self) -> GitResult<Status> {
        self.calls.lock().unwrap().push(RepoCall::Status);
        Ok(self.status.clone())
    }

    fn add(&self, paths: &[String], all: bool) -> GitResult<()> {
        self.calls.lock().unwrap().push(RepoCall::Add {
            paths: paths.to_vec(),
            all,
        });

        if self.fail_add {
            return Err(GitError::Staging("path no longer exists".to_string()));
        }
        Ok(())
    }

    fn commit(&self, message: &str) -> GitResult<()> {
        self.calls.lock().unwrap().push(RepoCall::Commit {
            message: message.to_string(),
        });

        if self.fail_commit {
            return Err(GitError::Commit("nothing to commit".to_string()));
        }
        Ok(())
    }
}

/// Build a status snapshot from path lists
pub fn status_fixture(
    added: &[&str],
    changed: &[&str],
    deleted: &[&str],
    untracked: &[&str],
) -> Status {
    fn to_map(paths: &[&str], index: char, worktree: char) -> BTreeMap<String, FileStatus> {
        paths
            .iter()
            .map(|p| (p.to_string(), FileStatus { index, worktree }))
            .collect()
    }

    Status {
        added: to_map(added, 'A', ' '),
        changed: to_map(changed, ' ', 'M'),
        deleted: to_map(deleted, ' ', 'D'),
        untracked: to_map(untracked, '?', '?'),
    }
}

/// Run a git command in `dir`, panicking on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .expect("failed to run git");

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create a scratch repository with commit identity configured
pub fn init_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    temp_dir
}

/// Create a scratch repository that already has one commit
pub fn init_repo_with_commit() -> TempDir {
    let temp_dir = init_repo();
    let path = temp_dir.path();

    std::fs::write(path.join("README.md"), "# test\n").unwrap();
    git(path, &["add", "README.md"]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}
