use std::collections::HashSet;

use crate::segment::{Segment, is_handle_char, segments};

/// Distinct handles mentioned in `text`, in first-occurrence order.
/// De-duplication is ASCII case-insensitive; the first-seen spelling wins.
pub fn mentioned_handles(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    segments(text)
        .filter_map(|segment| match segment {
            Segment::Mention(handle) => Some(handle),
            Segment::Text(_) => None,
        })
        .filter(|handle| seen.insert(handle.to_ascii_lowercase()))
        .collect()
}

/// Whether `handle` is a well-formed mention handle: one or more ASCII
/// letters, digits, or underscores.
pub fn is_valid_handle(handle: &str) -> bool {
    !handle.is_empty() && handle.chars().all(is_handle_char)
}
