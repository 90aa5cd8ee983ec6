//! Report writers for deduplicated stacks.
//!
//! This module handles writing the final report in various formats:
//! - Plain text (`(N copies)` followed by the original stack)
//! - JSON

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{build_report, read_report, write_json, Report, ReportGroup, ReportStats};
pub use text::{render_text, write_text};

use crate::pipeline::PipelineOutput;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Report format selectable from the CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write a report to any writer
///
/// **Public** - used for stdout and files alike
pub fn write_report_to<W: Write>(
    output: &PipelineOutput,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Text => write_text(&output.groups, writer),
        OutputFormat::Json => write_json(&build_report(output), writer),
    }
}

/// Write a report to a file
///
/// **Public** - main entry point for file output
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its
///   parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_report(
    output: &PipelineOutput,
    format: OutputFormat,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    write_report_to(output, format, &mut writer)
}

/// Validate that an output path is writable
///
/// **Public** - reusable validation for output paths
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
