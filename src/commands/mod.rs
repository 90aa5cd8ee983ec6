//! CLI command implementations.
//!
//! Commands orchestrate the library components and own all file I/O.

pub mod dedupe;

// Re-export main command functions
pub use dedupe::{execute_dedupe, read_sources, validate_args, DedupeArgs};
