//! Error types for Gitask

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Gitask operations
pub type Result<T> = std::result::Result<T, GitaskError>;

/// Main error type for Gitask
#[derive(Error, Debug)]
pub enum GitaskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Task definition and invocation errors
    #[error("Task error: {0}")]
    Task(#[from] TaskError),

    /// Git repository errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid namespace '{0}': namespaces must be non-empty and free of ':' and whitespace")]
    InvalidNamespace(String),

    #[error("Invalid task name '{0}': task names must be non-empty and free of ':' and whitespace")]
    InvalidTaskName(String),

    #[error("Task '{0}' is already defined")]
    DuplicateTask(String),

    #[error("Task '{0}' is not defined")]
    TaskNotFound(String),
}

/// Task invocation errors
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("No commit message configured (set 'message' or pass one as an argument)")]
    MissingMessage,
}

/// Errors surfaced by the git backend
#[derive(Error, Debug)]
pub enum GitError {
    #[error("'{path}' is not a git working copy: {reason}")]
    Open { path: PathBuf, reason: String },

    #[error("Failed to stage files: {0}")]
    Staging(String),

    #[error("Failed to commit: {0}")]
    Commit(String),

    #[error("git command '{command}' failed: {stderr}")]
    Command { command: String, stderr: String },

    #[error("Failed to run git: {0}")]
    Spawn(#[from] io::Error),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for git operations
pub type GitResult<T> = std::result::Result<T, GitError>;
