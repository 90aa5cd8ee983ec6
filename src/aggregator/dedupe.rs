//! Group stacks that share a canonical signature.
//!
//! The first stack seen with a signature becomes the group's representative;
//! later ones are kept as variants. Groups remember their creation order so
//! the final sort is reproducible.

use super::signature::{signature, Signature};
use crate::parser::Stack;
use log::debug;
use std::collections::HashMap;

/// A deduplicated unit: one representative plus its look-alikes
///
/// **Public** - consumed by the filter and output writers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub representative: Stack,
    pub variants: Vec<Stack>,
}

impl Group {
    /// Create a group from its first stack
    pub fn new(representative: Stack) -> Self {
        Self {
            representative,
            variants: Vec::new(),
        }
    }

    /// Total occurrences, representative included
    pub fn count(&self) -> usize {
        self.variants.len() + 1
    }
}

/// Streaming dedup over stacks in parse order
///
/// **Public** - use `push` for each stack, then `finish`
#[derive(Debug, Default)]
pub struct Deduplicator {
    index: HashMap<Signature, usize>,

    // Creation order; `index` points into this
    groups: Vec<Group>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one stack into its group, creating the group if needed
    pub fn push(&mut self, stack: Stack) {
        let key = signature(&stack);

        match self.index.get(&key) {
            Some(&slot) => self.groups[slot].variants.push(stack),
            None => {
                self.index.insert(key, self.groups.len());
                self.groups.push(Group::new(stack));
            }
        }
    }

    /// Number of distinct signatures seen so far
    pub fn unique_count(&self) -> usize {
        self.groups.len()
    }

    /// Finalize into groups sorted by representative goroutine id
    ///
    /// Groups with equal ids keep their creation order (stable sort).
    pub fn finish(self) -> Vec<Group> {
        let mut groups = self.groups;
        groups.sort_by_key(|group| group.representative.goroutine_id);

        debug!("Deduplicated into {} groups", groups.len());

        groups
    }
}

/// Deduplicate an ordered sequence of stacks
///
/// **Public** - convenience wrapper over `Deduplicator`
pub fn dedupe_stacks(stacks: impl IntoIterator<Item = Stack>) -> Vec<Group> {
    let mut dedup = Deduplicator::new();
    for stack in stacks {
        dedup.push(stack);
    }
    dedup.finish()
}
