//! Command-line interface
//!
//! Builds a clap application from the configuration file, one subcommand per
//! declared commit task.

pub mod app;

pub use app::{run, App};
