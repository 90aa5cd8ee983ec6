//! Dedupe command implementation.
//!
//! The dedupe command:
//! 1. Reads every input dump (fail-fast)
//! 2. Parses, deduplicates and filters the stacks
//! 3. Writes the report to stdout or a file

use crate::output::{write_report, write_report_to, OutputFormat};
use crate::pipeline::{run_pipeline, DumpSource, LogReporter, PipelineOptions};
use crate::utils::config::DEFAULT_FILTER_IDLE;
use crate::utils::error::InputError;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the dedupe command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct DedupeArgs {
    /// Input dumps, processed in order
    pub inputs: Vec<PathBuf>,

    /// Report destination (None = stdout)
    pub output: Option<PathBuf>,

    pub format: OutputFormat,

    /// Drop idle and runtime-internal groups
    pub filter_idle: bool,
}

impl Default for DedupeArgs {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: None,
            format: OutputFormat::Text,
            filter_idle: DEFAULT_FILTER_IDLE,
        }
    }
}

/// Execute the dedupe command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable input file (nothing is written)
/// * Malformed stack dump (nothing is written)
/// * Report write errors
pub fn execute_dedupe(args: DedupeArgs) -> Result<()> {
    let start_time = Instant::now();

    let sources = read_sources(&args.inputs)?;

    let options = PipelineOptions {
        filter_idle: args.filter_idle,
    };
    let output = run_pipeline(&sources, &options, &mut LogReporter)
        .context("Failed to process stack dumps")?;

    match &args.output {
        Some(path) => {
            write_report(&output, args.format, path).context("Failed to write report")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_report_to(&output, args.format, &mut handle)
                .context("Failed to write report")?;
        }
    }

    debug!("Dedupe completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Read all inputs into memory, in order
///
/// **Public** - stops at the first unreadable file
///
/// Invalid UTF-8 does not fail the read; offending bytes become U+FFFD.
pub fn read_sources(paths: &[PathBuf]) -> Result<Vec<DumpSource>, InputError> {
    paths
        .iter()
        .map(|path| -> Result<DumpSource, InputError> {
            debug!("Reading {}", path.display());
            let bytes = std::fs::read(path).map_err(|source| InputError::ReadFailed {
                path: path.clone(),
                source,
            })?;
            let text = match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(e) => {
                    warn!("{} is not valid UTF-8, replacing invalid bytes", path.display());
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            };
            Ok(DumpSource::new(path.display().to_string(), text))
        })
        .collect()
}

/// Validate dedupe arguments
///
/// **Public** - can be called before execute_dedupe for early validation
pub fn validate_args(args: &DedupeArgs) -> Result<()> {
    if args.inputs.is_empty() {
        anyhow::bail!("At least one stack dump file is required");
    }

    if args.inputs.iter().any(|path| path.as_os_str().is_empty()) {
        anyhow::bail!("Input path cannot be empty");
    }

    if let Some(output) = &args.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        let args = DedupeArgs {
            inputs: vec![PathBuf::from("dump.txt")],
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_no_inputs() {
        let args = DedupeArgs::default();

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_input_path() {
        let args = DedupeArgs {
            inputs: vec![PathBuf::from("dump.txt"), PathBuf::new()],
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output_path() {
        let args = DedupeArgs {
            inputs: vec![PathBuf::from("dump.txt")],
            output: Some(PathBuf::new()),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_read_sources_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = read_sources(&[missing.clone()]).unwrap_err();
        let InputError::ReadFailed { path, .. } = err;
        assert_eq!(path, missing);
    }

    #[test]
    fn test_read_sources_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.txt");
        let mut bytes = b"goroutine 1 [select]:\nmain.f(\"".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"\")\n\t/a.go:1 +0x1\n");
        std::fs::write(&path, bytes).unwrap();

        let sources = read_sources(&[path]).unwrap();
        assert_eq!(sources.len(), 1);
        assert!(sources[0].text.contains('\u{fffd}'));

        let stacks = crate::parser::parse_stacks(&sources[0].text).unwrap();
        assert_eq!(stacks[0].calls[0].name, "main.f");
    }
}
