//! stackdedupe CLI
//!
//! Deduplicates goroutine stack dumps and prints one representative per
//! unique stack, skipping idle and runtime-internal goroutines.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use stackdedupe::commands::{execute_dedupe, validate_args, DedupeArgs};
use stackdedupe::output::OutputFormat;

/// Deduplicate goroutine stack dumps
#[derive(Parser, Debug)]
#[command(name = "stackdedupe")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Stack dump files, processed in order
    #[arg(required = true, value_name = "STACK DUMP")]
    files: Vec<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Keep idle and runtime-internal goroutines
    #[arg(long)]
    all: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = DedupeArgs {
        inputs: cli.files,
        output: cli.output,
        format: cli.format,
        filter_idle: !cli.all,
    };

    // Validate args first
    validate_args(&args)?;

    execute_dedupe(args)?;

    Ok(())
}
