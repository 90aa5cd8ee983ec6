//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a stack dump
///
/// Every variant carries the offending raw line so the failure can be
/// diagnosed without re-reading the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid goroutine header ({detail}):\n\t{line}")]
    Header { line: String, detail: String },

    #[error("trace line should have a function:\n\t{line}")]
    Call { line: String },

    #[error("invalid creator line ({detail}):\n\t{line}")]
    Creator { line: String, detail: String },

    #[error("invalid location line ({detail}):\n\t{line}")]
    Location { line: String, detail: String },
}

impl ParseError {
    /// The raw input line that triggered the error
    pub fn line(&self) -> &str {
        match self {
            ParseError::Header { line, .. }
            | ParseError::Call { line }
            | ParseError::Creator { line, .. }
            | ParseError::Location { line, .. } => line,
        }
    }
}

/// Errors that can occur while running the dedup pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Failed to parse stack dump {source_name}: {error}")]
    Parse {
        source_name: String,
        #[source]
        error: ParseError,
    },
}

/// Errors that can occur while reading input dumps
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
