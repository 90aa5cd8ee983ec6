//! JSON triage report.
//!
//! Machine-readable counterpart of the text report, for feeding dedup
//! results into other tooling.

use crate::aggregator::{frame_labels, Group};
use crate::pipeline::{PipelineOutput, PipelineStats};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Top-level JSON report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version
    pub version: String,

    /// ISO 8601 generation timestamp
    pub generated_at: String,

    pub stats: ReportStats,

    /// Retained groups in final order
    pub groups: Vec<ReportGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub imported: usize,
    pub unique: usize,
    pub important: usize,
}

impl From<PipelineStats> for ReportStats {
    fn from(stats: PipelineStats) -> Self {
        Self {
            imported: stats.imported,
            unique: stats.unique,
            important: stats.important,
        }
    }
}

/// One deduplicated stack in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportGroup {
    /// Total occurrences, representative included
    pub copies: usize,

    /// Representative goroutine id
    pub goroutine: u64,

    pub reason: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,

    /// `name file:line` per frame, innermost first
    pub signature_frames: Vec<String>,

    /// Ids of the folded-in duplicates, in encounter order
    pub variant_goroutines: Vec<u64>,

    /// Representative's original text
    pub stack: String,
}

impl From<&Group> for ReportGroup {
    fn from(group: &Group) -> Self {
        let rep = &group.representative;
        Self {
            copies: group.count(),
            goroutine: rep.goroutine_id,
            reason: rep.reason.clone(),
            delay: rep.delay.clone(),
            signature_frames: frame_labels(rep),
            variant_goroutines: group.variants.iter().map(|s| s.goroutine_id).collect(),
            stack: rep.source(),
        }
    }
}

/// Build a report from pipeline output
///
/// **Public** - stamps the current time
pub fn build_report(output: &PipelineOutput) -> Report {
    Report {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        stats: output.stats.into(),
        groups: output.groups.iter().map(ReportGroup::from).collect(),
    }
}

/// Write a report as pretty-printed JSON
///
/// **Public** - JSON report writer
pub fn write_json<W: Write>(report: &Report, writer: &mut W) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(OutputError::SerializationFailed)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a report back from a JSON file
///
/// **Public** - useful for tooling and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: Report =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(report)
}
