//! Structured records parsed from a goroutine dump.
//!
//! A `Stack` keeps the exact lines it was parsed from so the report can
//! re-display the original text untouched.

use serde::Serialize;

/// Source position from the indented detail line under a frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Source file path (empty if the detail line had no `file:line` token)
    pub filename: String,

    /// Line number within `filename`
    pub line: u64,
}

/// One call frame, innermost first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Call {
    /// Fully qualified function name
    pub name: String,

    /// Raw argument text between the parentheses (unparsed)
    pub args: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Call {
    pub fn filename(&self) -> &str {
        self.location.as_ref().map_or("", |loc| loc.filename.as_str())
    }

    pub fn line(&self) -> u64 {
        self.location.as_ref().map_or(0, |loc| loc.line)
    }
}

/// The `created by` record naming the spawning goroutine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creator {
    pub name: String,

    /// Goroutine that executed the `go` statement
    pub origin_goroutine: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A single parsed goroutine stack
///
/// Immutable once built by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stack {
    pub goroutine_id: u64,

    /// Wait reason or state from the header brackets (e.g. `chan receive`)
    pub reason: String,

    /// Blocked duration from the header (e.g. `5 minutes`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,

    pub calls: Vec<Call>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<Creator>,

    /// Exact input lines this stack was parsed from
    pub raw_lines: Vec<String>,
}

impl Stack {
    /// Original block text, byte-for-byte
    pub fn source(&self) -> String {
        self.raw_lines.join("\n")
    }
}
