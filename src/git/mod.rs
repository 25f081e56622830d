//! Repository-client interface
//!
//! The commit task talks to git through the `GitClient`/`Repository` traits
//! so that a backend can be injected per task instance. The production
//! implementation shells out to the `git` binary.

pub mod command;

pub use command::{CommandGitClient, CommandRepository};

use crate::error::GitResult;
use std::collections::BTreeMap;
use std::path::Path;

/// Opens repository handles scoped to a working directory.
pub trait GitClient: Send + Sync {
    /// Open the working copy rooted at (or containing) `working_directory`.
    ///
    /// Fails if the directory is not inside a valid git working copy.
    fn open(&self, working_directory: &Path) -> GitResult<Box<dyn Repository>>;
}

/// A handle to one git working copy, owned for one task invocation.
pub trait Repository: Send + Sync {
    /// Take a point-in-time status snapshot of the working copy.
    fn status(&self) -> GitResult<Status>;

    /// Stage the given paths for the next commit.
    ///
    /// With `all` set, deletions among the paths are staged as well (plain
    /// add does not stage a deletion unless told to).
    fn add(&self, paths: &[String], all: bool) -> GitResult<()>;

    /// Create a commit from the currently staged index.
    fn commit(&self, message: &str) -> GitResult<()>;
}

/// Per-file status metadata from a porcelain status line
///
/// Only the path keys are consumed by the commit task; the codes are kept for
/// callers that want them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStatus {
    /// Status of the index side ('A', 'M', 'D', ' ', '?')
    pub index: char,

    /// Status of the working tree side
    pub worktree: char,
}

/// A point-in-time classification of the working copy's files
///
/// The four sets are disjoint: a path appears under the first category it
/// matches in the order untracked, added, deleted, changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    /// Files staged for addition but never committed
    pub added: BTreeMap<String, FileStatus>,

    /// Tracked files with modifications (staged or not)
    pub changed: BTreeMap<String, FileStatus>,

    /// Tracked files that have been removed
    pub deleted: BTreeMap<String, FileStatus>,

    /// Files present on disk but never added
    pub untracked: BTreeMap<String, FileStatus>,
}

impl Status {
    /// Union of the added, changed, and deleted path sets, sorted and deduplicated
    pub fn tracked_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .added
            .keys()
            .chain(self.changed.keys())
            .chain(self.deleted.keys())
            .cloned()
            .collect();
        paths.sort();
        paths.dedup();
        paths
    }

    /// The untracked path set, sorted
    pub fn untracked_paths(&self) -> Vec<String> {
        self.untracked.keys().cloned().collect()
    }

    /// Whether the working copy is clean
    pub fn is_clean(&self) -> bool {
        self.added.is_empty()
            && self.changed.is_empty()
            && self.deleted.is_empty()
            && self.untracked.is_empty()
    }
}
