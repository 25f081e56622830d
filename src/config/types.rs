//! Core configuration types
//!
//! This module defines the data structures that represent a gitask.yml
//! configuration file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Application name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Application usage description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Commit tasks, keyed by namespace
    #[serde(default)]
    pub tasks: BTreeMap<String, CommitConfig>,
}

/// Configuration of one commit task
///
/// Every field has a default except `message`, which may instead be supplied
/// at invocation time; a message missing in both places fails the invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommitConfig {
    /// Task name within its namespace
    #[serde(default = "default_name")]
    pub name: String,

    /// Description shown in help text
    #[serde(default = "default_description")]
    pub description: String,

    /// Commit message; may contain `${var}` placeholders resolved from
    /// invocation arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Whether to stage modified, added, and deleted tracked files
    #[serde(default = "default_true")]
    pub stage_tracked_files: bool,

    /// Whether to stage untracked (new) files
    #[serde(default = "default_true")]
    pub stage_untracked_files: bool,

    /// Directory of the working copy to commit in
    #[serde(default = "default_working_directory")]
    pub working_directory: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        CommitConfig {
            name: default_name(),
            description: default_description(),
            message: None,
            stage_tracked_files: true,
            stage_untracked_files: true,
            working_directory: default_working_directory(),
        }
    }
}

fn default_name() -> String {
    "commit".to_string()
}

fn default_description() -> String {
    "Commit changes to git.".to_string()
}

fn default_working_directory() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}
