//! Command-line git backend
//!
//! Implements the repository-client traits by shelling out to the `git`
//! binary. Tracked-file classification comes from `git status --porcelain`;
//! untracked files are listed with `git ls-files --others --exclude-standard`
//! because porcelain output collapses an untracked directory into a single
//! entry instead of listing the files inside it.

use crate::error::{GitError, GitResult};
use crate::git::{FileStatus, GitClient, Repository, Status};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Opens working copies by invoking the `git` binary
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandGitClient;

impl CommandGitClient {
    pub fn new() -> Self {
        CommandGitClient
    }
}

impl GitClient for CommandGitClient {
    fn open(&self, working_directory: &Path) -> GitResult<Box<dyn Repository>> {
        let repo = CommandRepository::open(working_directory)?;
        Ok(Box::new(repo))
    }
}

/// A working copy handle backed by `git -C <root> ...` invocations
#[derive(Debug, Clone)]
pub struct CommandRepository {
    root: PathBuf,
}

impl CommandRepository {
    /// Open the working copy containing `working_directory`.
    pub fn open(working_directory: &Path) -> GitResult<Self> {
        let output = run_git(working_directory, &["rev-parse", "--show-toplevel"])
            .map_err(|e| GitError::Open {
                path: working_directory.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(CommandRepository {
            root: PathBuf::from(output.trim()),
        })
    }

    /// Root of the working copy
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn untracked_files(&self) -> GitResult<Vec<String>> {
        let output = run_git(&self.root, &["ls-files", "--others", "--exclude-standard"])?;
        Ok(output
            .lines()
            .filter(|line| !line.is_empty())
            .map(unquote)
            .collect())
    }
}

impl Repository for CommandRepository {
    fn status(&self) -> GitResult<Status> {
        let output = run_git(&self.root, &["status", "--porcelain"])?;
        let mut status = parse_porcelain(&output);

        for path in self.untracked_files()? {
            status
                .untracked
                .insert(path, FileStatus { index: '?', worktree: '?' });
        }

        Ok(status)
    }

    fn add(&self, paths: &[String], all: bool) -> GitResult<()> {
        // `git add -A --` with no pathspec would stage the whole tree
        if paths.is_empty() {
            return Ok(());
        }

        let mut args: Vec<&str> = vec!["add"];
        if all {
            args.push("--all");
        }
        args.push("--");
        args.extend(paths.iter().map(String::as_str));

        run_git(&self.root, &args)
            .map(|_| ())
            .map_err(|e| GitError::Staging(e.to_string()))
    }

    fn commit(&self, message: &str) -> GitResult<()> {
        run_git(&self.root, &["commit", "-m", message])
            .map(|_| ())
            .map_err(|e| GitError::Commit(e.to_string()))
    }
}

/// Run a git subcommand in `dir` and return its stdout.
///
/// `core.quotePath` is disabled so that non-ASCII paths come back as the
/// bytes on disk instead of octal-escaped quoted strings, which would not
/// match as pathspecs when fed back into `add`.
fn run_git(dir: &Path, args: &[&str]) -> GitResult<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["-c", "core.quotePath=false"])
        .args(args)
        .output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Err(GitError::Command {
            command: format!("git {}", args.join(" ")),
            stderr: if stderr.is_empty() { stdout } else { stderr },
        })
    }
}

/// Parse `git status --porcelain` output into tracked categories.
///
/// Untracked (`??`) lines are skipped; the caller fills that set from
/// `ls-files` instead.
fn parse_porcelain(output: &str) -> Status {
    let mut added = BTreeMap::new();
    let mut changed = BTreeMap::new();
    let mut deleted = BTreeMap::new();

    for line in output.lines() {
        if line.len() < 4 {
            continue;
        }

        let mut chars = line.chars();
        let index = chars.next().unwrap_or(' ');
        let worktree = chars.next().unwrap_or(' ');
        let path = &line[3..];

        // Renames are reported as "old -> new"; the new path is the one that
        // can still be staged
        let path = match path.split_once(" -> ") {
            Some((_, new_path)) => new_path,
            None => path,
        };
        let path = unquote(path);

        let file_status = FileStatus { index, worktree };
        match (index, worktree) {
            ('?', '?') => {}
            ('A', _) => {
                added.insert(path, file_status);
            }
            (_, 'D') | ('D', _) => {
                deleted.insert(path, file_status);
            }
            _ => {
                changed.insert(path, file_status);
            }
        }
    }

    Status {
        added,
        changed,
        deleted,
        untracked: BTreeMap::new(),
    }
}

/// Strip the quoting git applies to paths with special characters.
fn unquote(path: &str) -> String {
    if path.len() >= 2 && path.starts_with('"') && path.ends_with('"') {
        path[1..path.len() - 1].replace("\\\"", "\"").replace("\\\\", "\\")
    } else {
        path.to_string()
    }
}
