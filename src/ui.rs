//! Terminal output helpers
//!
//! All output goes to stderr and is gated by a process-wide verbosity level,
//! so `-q`/`-s` silence every layer, including the task's progress lines.

use colored::Colorize;
use std::sync::atomic::{AtomicU8, Ordering};

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

static VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Normal as u8);

/// Set the process-wide verbosity level
pub fn set_verbosity(verbosity: Verbosity) {
    VERBOSITY.store(verbosity as u8, Ordering::Relaxed);
}

/// The current process-wide verbosity level
pub fn verbosity() -> Verbosity {
    match VERBOSITY.load(Ordering::Relaxed) {
        0 => Verbosity::Silent,
        1 => Verbosity::Quiet,
        3 => Verbosity::Verbose,
        _ => Verbosity::Normal,
    }
}

/// Print a progress message
pub fn progress(message: &str) {
    if verbosity() >= Verbosity::Normal {
        eprintln!("{}", message.cyan());
    }
}

/// Print an informational message
pub fn info(message: &str) {
    if verbosity() >= Verbosity::Normal {
        eprintln!("{}", message);
    }
}

/// Print an error message
pub fn error(message: &str) {
    if verbosity() >= Verbosity::Quiet {
        eprintln!("{} {}", "error:".red().bold(), message);
    }
}

/// Print a debug message (only in verbose mode)
pub fn debug(message: &str) {
    if verbosity() >= Verbosity::Verbose {
        eprintln!("{} {}", "debug:".dimmed(), message.dimmed());
    }
}
