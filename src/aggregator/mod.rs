//! Reduction of parsed stacks into triage groups.
//!
//! This module transforms parsed stacks into:
//! - Canonical signatures (what counts as "the same stack")
//! - Deduplicated groups (representative + variants)
//! - A filtered view without idle/runtime-internal groups

pub mod dedupe;
pub mod filter;
pub mod signature;

// Re-export main types and functions
pub use dedupe::{dedupe_stacks, Deduplicator, Group};
pub use filter::{filter_groups, is_ignored_reason};
pub use signature::{frame_labels, signature, Signature};
