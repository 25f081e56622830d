//! Gitask - a namespaced git commit task runner
//!
//! Gitask packages the "stage everything, then commit" workflow as a reusable
//! task: declare it once per namespace in a YAML file (or in code), then
//! invoke it as `<namespace>:commit` with a static or argument-supplied
//! commit message.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod runner;
pub mod tasks;
pub mod ui;

// Re-export commonly used types
pub use error::{GitaskError, Result};
pub use tasks::CommitTask;

/// Current version of Gitask
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
