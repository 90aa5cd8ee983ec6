//! End-to-end reduction: dump texts in, retained groups out.
//!
//! Pure with respect to I/O. Reading files and writing the report happen in
//! `commands`; progress counters go through an injected `Reporter`.

use crate::aggregator::{filter_groups, Deduplicator, Group};
use crate::parser::parse_stacks;
use crate::utils::config::DEFAULT_FILTER_IDLE;
use crate::utils::error::PipelineError;
use log::{debug, info};
use serde::Serialize;

/// One named input dump
#[derive(Debug, Clone)]
pub struct DumpSource {
    /// Display name (usually the file path)
    pub name: String,
    pub text: String,
}

impl DumpSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Knobs for `run_pipeline`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Drop idle and runtime-internal groups
    pub filter_idle: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            filter_idle: DEFAULT_FILTER_IDLE,
        }
    }
}

/// Diagnostic counters for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// Stacks parsed across all sources
    pub imported: usize,

    /// Groups after dedup
    pub unique: usize,

    /// Groups after filtering
    pub important: usize,
}

impl PipelineStats {
    pub fn removed_duplicates(&self) -> usize {
        self.imported - self.unique
    }

    pub fn removed_filtered(&self) -> usize {
        self.unique - self.important
    }
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Retained groups in final order
    pub groups: Vec<Group>,
    pub stats: PipelineStats,
}

/// Receiver of progress counters
pub trait Reporter {
    /// Called after each source with the running total of parsed stacks
    fn imported(&mut self, source: &str, cumulative: usize);

    fn deduplicated(&mut self, unique: usize, removed: usize);

    fn filtered(&mut self, important: usize, removed: usize);
}

/// Reporter that writes counters to the log
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn imported(&mut self, source: &str, cumulative: usize) {
        info!("Imported {} stack traces from {}", cumulative, source);
    }

    fn deduplicated(&mut self, unique: usize, removed: usize) {
        info!("Found {} unique stack traces (removed {})", unique, removed);
    }

    fn filtered(&mut self, important: usize, removed: usize) {
        info!("Found {} important stack traces (removed {})", important, removed);
    }
}

/// Parse, deduplicate and filter a batch of dumps
///
/// **Public** - primary library entry point
///
/// # Arguments
/// * `sources` - Dumps in processing order
/// * `options` - Filtering behavior
/// * `reporter` - Receives progress counters
///
/// # Returns
/// Retained groups, sorted by representative goroutine id (ties in
/// first-seen order), plus run statistics
///
/// # Errors
/// * `PipelineError::Parse` - The first malformed line in any source; no
///   partial result is returned
pub fn run_pipeline(
    sources: &[DumpSource],
    options: &PipelineOptions,
    reporter: &mut dyn Reporter,
) -> Result<PipelineOutput, PipelineError> {
    let mut dedup = Deduplicator::new();
    let mut imported = 0;

    for source in sources {
        let stacks = parse_stacks(&source.text).map_err(|error| PipelineError::Parse {
            source_name: source.name.clone(),
            error,
        })?;

        debug!("Parsed {} stacks from {}", stacks.len(), source.name);
        imported += stacks.len();
        for stack in stacks {
            dedup.push(stack);
        }

        reporter.imported(&source.name, imported);
    }

    let groups = dedup.finish();
    let unique = groups.len();
    reporter.deduplicated(unique, imported - unique);

    let groups = if options.filter_idle {
        filter_groups(groups)
    } else {
        debug!("Idle filter disabled, keeping all groups");
        groups
    };
    let important = groups.len();
    reporter.filtered(important, unique - important);

    Ok(PipelineOutput {
        groups,
        stats: PipelineStats {
            imported,
            unique,
            important,
        },
    })
}
