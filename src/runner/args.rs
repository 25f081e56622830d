//! Invocation arguments
//!
//! Arguments supplied when a task is invoked, resolvable inside the task's
//! initialization callback.

use std::collections::HashMap;

/// Positional and named arguments for one task invocation
#[derive(Debug, Clone, Default)]
pub struct TaskArgs {
    positional: Vec<String>,
    named: HashMap<String, String>,
}

impl TaskArgs {
    /// Create an empty argument bag
    pub fn new() -> Self {
        TaskArgs::default()
    }

    /// Add a positional argument
    pub fn with_positional(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add a named argument
    pub fn with_named(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    /// Get a named argument value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.named.get(key).map(String::as_str)
    }

    /// Get a positional argument by index
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// All named arguments
    pub fn named(&self) -> &HashMap<String, String> {
        &self.named
    }

    /// Whether no arguments were supplied
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}
