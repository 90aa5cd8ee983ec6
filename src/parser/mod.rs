//! Goroutine dump parsing and data model.
//!
//! This module handles:
//! - Splitting raw dumps into blank-line-delimited blocks
//! - Parsing each block into a structured `Stack`
//! - Defining the parsed data model

pub mod goroutine;
pub mod schema;
pub mod segment;

// Re-export main types
pub use goroutine::{parse_location, parse_stack};
pub use schema::{Call, Creator, Location, Stack};
pub use segment::segment_blocks;

use crate::utils::error::ParseError;
use log::debug;

/// Parse every stack in a dump
///
/// **Public** - main entry point for parsing
///
/// Stacks are returned in block order. The first malformed block fails the
/// whole dump.
pub fn parse_stacks(text: &str) -> Result<Vec<Stack>, ParseError> {
    let blocks = segment_blocks(text);
    debug!("Segmented dump into {} blocks", blocks.len());

    blocks.iter().map(|block| parse_stack(block)).collect()
}
