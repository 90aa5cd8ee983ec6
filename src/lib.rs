//! stackdedupe
//!
//! Reduce goroutine stack dumps to a deduplicated, filtered report for
//! manual triage.
//!
//! Stacks are grouped by the sequence of `(function, file, line)` frames,
//! ignoring goroutine ids, wait reasons, arguments and creators. Groups
//! parked in idle or runtime-internal states are dropped.
//!
//! ## Getting Started
//!
//! ```bash
//! stackdedupe dump1.txt dump2.txt
//! ```
//!
//! Library users should start at [`pipeline::run_pipeline`].

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod utils;
