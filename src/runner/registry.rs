//! Task registry
//!
//! Tasks register under `<namespace>:<name>` and are invoked by that full
//! name. Each registration owns its action and whatever state the action
//! captured; two registrations never share mutable state.

use crate::error::{ConfigError, Result};
use crate::runner::TaskArgs;
use std::collections::BTreeMap;

/// The action executed when a task is invoked
pub type Action = Box<dyn Fn(&TaskArgs) -> Result<()>>;

/// A task registered under a full `<namespace>:<name>` key
pub struct RegisteredTask {
    /// Full name, e.g. "git:commit"
    pub full_name: String,

    /// Short name within the namespace
    pub name: String,

    /// Description shown in help output
    pub description: String,

    action: Action,
}

impl RegisteredTask {
    /// Run this task's action
    pub fn invoke(&self, args: &TaskArgs) -> Result<()> {
        (self.action)(args)
    }
}

/// Registry of invocable tasks
#[derive(Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, RegisteredTask>,
}

impl TaskRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        TaskRegistry::default()
    }

    /// Register a task under `<namespace>:<name>`.
    ///
    /// Fails if the namespace or name is not a valid identifier, or if the
    /// full name is already taken.
    pub fn register(
        &mut self,
        namespace: &str,
        name: &str,
        description: &str,
        action: Action,
    ) -> Result<()> {
        if !is_valid_identifier(namespace) {
            return Err(ConfigError::InvalidNamespace(namespace.to_string()).into());
        }
        if !is_valid_identifier(name) {
            return Err(ConfigError::InvalidTaskName(name.to_string()).into());
        }

        let full_name = format!("{}:{}", namespace, name);
        if self.tasks.contains_key(&full_name) {
            return Err(ConfigError::DuplicateTask(full_name).into());
        }

        self.tasks.insert(
            full_name.clone(),
            RegisteredTask {
                full_name,
                name: name.to_string(),
                description: description.to_string(),
                action,
            },
        );

        Ok(())
    }

    /// Invoke a task by its full name
    pub fn invoke(&self, full_name: &str, args: &TaskArgs) -> Result<()> {
        let task = self
            .tasks
            .get(full_name)
            .ok_or_else(|| ConfigError::TaskNotFound(full_name.to_string()))?;
        task.invoke(args)
    }

    /// Look up a registered task
    pub fn get(&self, full_name: &str) -> Option<&RegisteredTask> {
        self.tasks.get(full_name)
    }

    /// Whether a task is registered under the full name
    pub fn contains(&self, full_name: &str) -> bool {
        self.tasks.contains_key(full_name)
    }

    /// All registered tasks, sorted by full name
    pub fn tasks(&self) -> impl Iterator<Item = &RegisteredTask> {
        self.tasks.values()
    }

    /// Number of registered tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn is_valid_identifier(s: &str) -> bool {
    !s.is_empty() && !s.contains(':') && !s.contains(char::is_whitespace)
}
