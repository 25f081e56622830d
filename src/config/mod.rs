//! Configuration handling
//!
//! Parses and validates gitask.yml files that declare one commit task per
//! namespace.

pub mod parse;
pub mod types;

pub use parse::*;
pub use types::*;
