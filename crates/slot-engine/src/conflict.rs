//! Conflict extraction — the first pipeline stage.
//!
//! An event conflicts with a request when its attendee set intersects the
//! mandatory-attendee set. Only the time ranges of conflicting events matter
//! downstream; order is fixed later by normalization.

use std::collections::HashSet;

use crate::event::Event;
use crate::timerange::TimeRange;

/// Project every event a mandatory attendee must attend to its time range.
///
/// Each event is consulted exactly once; the intersection test is pure set
/// membership. An empty event list or empty attendee set yields an empty
/// result, which downstream stages treat as a fully free day.
pub fn conflicting_ranges(events: &[Event], attendees: &HashSet<String>) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|event| !event.attendees.is_disjoint(attendees))
        .map(|event| event.time_range)
        .collect()
}
