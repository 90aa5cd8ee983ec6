//! Canonical signature of a stack's call sequence.
//!
//! Two stacks with the same signature are the same "shape": identical
//! function names and source positions, frame by frame. Goroutine id, wait
//! reason, delay, arguments and creator are deliberately left out.

use crate::parser::Stack;
use std::fmt::Write;

const FIELD_SEPARATOR: char = '\u{1f}';
const RECORD_TERMINATOR: char = '\n';

/// Opaque dedup key derived from a stack's frames
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compute the signature of a stack
///
/// **Public** - used by the dedup engine
///
/// Each call contributes `name`, `filename` and `line`, separated by a unit
/// separator and closed by a newline. Frames without a location contribute
/// an empty filename and line 0.
pub fn signature(stack: &Stack) -> Signature {
    let mut key = String::new();

    for call in &stack.calls {
        // Writing to a String cannot fail
        let _ = write!(
            key,
            "{}{sep}{}{sep}{}{end}",
            call.name,
            call.filename(),
            call.line(),
            sep = FIELD_SEPARATOR,
            end = RECORD_TERMINATOR,
        );
    }

    Signature(key)
}

/// Human-readable `name file:line` form of each frame
///
/// **Public** - used by the JSON report
pub fn frame_labels(stack: &Stack) -> Vec<String> {
    stack
        .calls
        .iter()
        .map(|call| format!("{} {}:{}", call.name, call.filename(), call.line()))
        .collect()
}
