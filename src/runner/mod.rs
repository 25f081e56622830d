//! Task registration and invocation
//!
//! This module is the task-runner side of the crate: a registry of named
//! actions keyed by `<namespace>:<name>`, the argument bag passed to an
//! action on invocation, and message interpolation.

pub mod args;
pub mod interpolate;
pub mod registry;

// Re-export main types
pub use args::*;
pub use interpolate::*;
pub use registry::*;
