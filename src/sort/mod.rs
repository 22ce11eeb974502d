//! Sort configuration for card lists.
//!
//! - [`key`] - the closed set of sort keys, the base catalog and labels
//! - [`item`] - rows of the sort dialog list
//! - [`builder`] - derives the chosen/available list and the commit rule
//! - [`reorder`] - the idle/dragging state machine

pub mod builder;
pub mod item;
pub mod key;
pub mod reorder;

pub use builder::{
    build_display_list, candidate_pool, commit_order, header_index, is_last_in_section,
    AVAILABLE_HEADER,
};
pub use item::DisplayItem;
pub use key::{base_catalog, label, SortKey};
pub use reorder::{DragController, DragGesture, DragOutcome, DragState};

use thiserror::Error;

/// Errors raised while interpreting sort configuration from outside input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The identifier does not name any sort key
    #[error("Unknown sort key: {0}")]
    UnknownKey(String),
}

/// Parse a comma-separated list of sort key ids, e.g. `cost,type`.
///
/// Empty segments are skipped. Duplicates are kept; callers that need unique
/// keys should dedupe.
pub fn parse_sort_list(input: &str) -> Result<Vec<SortKey>, SortError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

/// Drop repeated keys, keeping the first occurrence.
pub fn dedupe(keys: &[SortKey]) -> Vec<SortKey> {
    let mut seen = Vec::with_capacity(keys.len());
    for key in keys {
        if !seen.contains(key) {
            seen.push(*key);
        }
    }
    seen
}
