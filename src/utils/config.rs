//! Configuration and constants for stack dump processing.

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Prefix of a stack header line
pub const HEADER_PREFIX: &str = "goroutine ";

/// Prefix of a creator line
pub const CREATOR_PREFIX: &str = "created by ";

/// Separator between the creator function and its origin goroutine
pub const CREATOR_GOROUTINE_SEPARATOR: &str = " in goroutine ";

/// Separator between wait reason and delay inside the header brackets
pub const REASON_DELAY_SEPARATOR: &str = ", ";

// Injected by the runtime when it cannot unwind through an SPWRITE function.
// Never a frame.
pub const NOISE_LINE_PREFIXES: &[&str] = &["traceback: unexpected SPWRITE function"];

// Wait reasons that mark a stack as uninteresting for triage
pub const IGNORED_REASONS: &[&str] = &["idle", "finalizer wait"];
pub const IGNORED_REASON_SUBSTRINGS: &[&str] = &["(idle)"];
pub const IGNORED_REASON_PREFIXES: &[&str] = &["GC "];

/// Whether the idle/runtime filter runs unless disabled
pub const DEFAULT_FILTER_IDLE: bool = true;
