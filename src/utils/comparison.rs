//! Utilities to compare events
//!
//! These can be used to sort results, e.g. the lists returned by [`crate::CalendarManager`]

use std::cmp::Ordering;

use crate::traits::CalendarEntry;

/// Compare events chronologically. Events that start together are ordered by ID, so that sorting is deterministic
pub fn compare_events_by_start<E: CalendarEntry>(left: &E, right: &E) -> Ordering {
    left.start_date().cmp(&right.start_date())
        .then_with(|| left.id().cmp(right.id()))
}

/// Compare events alphabetically, by title
pub fn compare_events_alpha<E: CalendarEntry>(left: &E, right: &E) -> Ordering {
    Ord::cmp(&left.title().value().to_lowercase(), &right.title().value().to_lowercase())
}
