//! Reusable task definitions
//!
//! Each task in this module can be registered any number of times, once per
//! namespace, with independent configuration.

pub mod commit;

pub use commit::{run_commit, CommitTask};
