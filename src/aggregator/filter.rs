//! Drop groups parked in runtime-internal or idle states.

use super::dedupe::Group;
use crate::utils::config::{IGNORED_REASONS, IGNORED_REASON_PREFIXES, IGNORED_REASON_SUBSTRINGS};
use log::debug;

/// Whether a wait reason marks a stack as uninteresting
///
/// **Public** - matches `idle`, `finalizer wait`, anything containing
/// `(idle)` and anything starting with `GC `
pub fn is_ignored_reason(reason: &str) -> bool {
    IGNORED_REASONS.contains(&reason)
        || IGNORED_REASON_SUBSTRINGS
            .iter()
            .any(|needle| reason.contains(needle))
        || IGNORED_REASON_PREFIXES
            .iter()
            .any(|prefix| reason.starts_with(prefix))
}

/// Keep only groups whose representative is worth triaging
///
/// **Public** - order is preserved; dropped groups take their variants with them
pub fn filter_groups(groups: Vec<Group>) -> Vec<Group> {
    groups
        .into_iter()
        .filter(|group| {
            let ignored = is_ignored_reason(&group.representative.reason);
            if ignored {
                debug!(
                    "Dropping goroutine {} ({}, {} copies)",
                    group.representative.goroutine_id,
                    group.representative.reason,
                    group.count()
                );
            }
            !ignored
        })
        .collect()
}
