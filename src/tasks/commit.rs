//! The commit task
//!
//! Stages tracked and/or untracked files and produces a commit on the
//! current branch. The task is declared with a `CommitConfig`, registered
//! under a namespace, and executed against an injected git backend.

use crate::config::CommitConfig;
use crate::error::{Result, TaskError};
use crate::git::{CommandGitClient, GitClient};
use crate::runner::{interpolate, TaskArgs, TaskRegistry};
use crate::ui;
use std::path::Path;
use std::sync::Arc;

/// A declarable, namespaced commit task
///
/// The same task can be defined any number of times under different
/// namespaces; each definition owns an independent copy of its configuration.
#[derive(Debug, Clone, Default)]
pub struct CommitTask {
    config: CommitConfig,
}

impl CommitTask {
    /// Create a task with default configuration
    pub fn new() -> Self {
        CommitTask::default()
    }

    /// Create a task from an existing configuration
    pub fn with_config(config: CommitConfig) -> Self {
        CommitTask { config }
    }

    /// Set the task name (default "commit")
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the task description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.config.description = description.into();
        self
    }

    /// Set a static commit message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.config.message = Some(message.into());
        self
    }

    /// Toggle staging of modified/added/deleted tracked files
    pub fn with_stage_tracked_files(mut self, stage: bool) -> Self {
        self.config.stage_tracked_files = stage;
        self
    }

    /// Toggle staging of untracked files
    pub fn with_stage_untracked_files(mut self, stage: bool) -> Self {
        self.config.stage_untracked_files = stage;
        self
    }

    /// Set the working directory of the repository (default ".")
    pub fn with_working_directory(mut self, dir: impl Into<String>) -> Self {
        self.config.working_directory = dir.into();
        self
    }

    /// The task's configuration
    pub fn config(&self) -> &CommitConfig {
        &self.config
    }

    /// Register this task as `<namespace>:<name>` with the default git
    /// backend.
    ///
    /// Registration succeeds without a message; a message missing at
    /// invocation time fails the invocation, not the definition.
    pub fn define(self, registry: &mut TaskRegistry, namespace: &str) -> Result<()> {
        self.define_with(registry, namespace, |_, _| {})
    }

    /// Register with an initialization callback.
    ///
    /// The callback runs on every invocation with the task's configuration
    /// and the resolved invocation arguments, before the action executes.
    /// This is the hook for late-binding `message` (or any other field) from
    /// caller-supplied arguments.
    pub fn define_with<F>(self, registry: &mut TaskRegistry, namespace: &str, configure: F) -> Result<()>
    where
        F: Fn(&mut CommitConfig, &TaskArgs) + 'static,
    {
        self.define_with_client(registry, namespace, Arc::new(CommandGitClient::new()), configure)
    }

    /// Register with an initialization callback and an injected git backend.
    pub fn define_with_client<F>(
        self,
        registry: &mut TaskRegistry,
        namespace: &str,
        client: Arc<dyn GitClient>,
        configure: F,
    ) -> Result<()>
    where
        F: Fn(&mut CommitConfig, &TaskArgs) + 'static,
    {
        let config = self.config;
        let name = config.name.clone();
        let description = config.description.clone();

        registry.register(
            namespace,
            &name,
            &description,
            Box::new(move |args: &TaskArgs| {
                let mut resolved = config.clone();
                configure(&mut resolved, args);

                // A message given as an argument fills in for a missing
                // static one, but never overrides what the callback set
                if resolved.message.is_none() {
                    if let Some(message) = args.get("message").or_else(|| args.positional(0)) {
                        resolved.message = Some(message.to_string());
                    }
                }

                if let Some(message) = resolved.message.take() {
                    resolved.message = Some(interpolate(&message, args.named()));
                }

                run_commit(&resolved, client.as_ref())
            }),
        )
    }
}

/// Execute the commit sequence against a resolved configuration.
///
/// Steps, in strict order: open the repository, stage tracked files (if
/// enabled), stage untracked files (if enabled), commit. Staging always
/// completes before the commit is attempted, and every failure aborts the
/// remaining steps unchanged.
pub fn run_commit(config: &CommitConfig, client: &dyn GitClient) -> Result<()> {
    ui::progress("Committing...");

    let message = config
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or(TaskError::MissingMessage)?;

    let repo = client.open(Path::new(&config.working_directory))?;

    if config.stage_tracked_files {
        let status = repo.status()?;
        let files = status.tracked_paths();
        ui::debug(&format!("Staging {} tracked file(s)", files.len()));
        if !files.is_empty() {
            repo.add(&files, true)?;
        }
    }

    // The untracked pass takes its own status snapshot rather than reusing
    // the one above
    if config.stage_untracked_files {
        let status = repo.status()?;
        let files = status.untracked_paths();
        ui::debug(&format!("Staging {} untracked file(s)", files.len()));
        if !files.is_empty() {
            repo.add(&files, true)?;
        }
    }

    // A commit with nothing staged is still attempted; whether it succeeds
    // is the backend's policy
    repo.commit(message)?;

    Ok(())
}
