//! The full scheduling query: extract conflicts, normalize, find gaps,
//! filter by duration.

use crate::conflict::conflicting_ranges;
use crate::event::{Event, MeetingRequest};
use crate::gaps::free_gaps;
use crate::normalize::normalize;
use crate::timerange::TimeRange;

/// Find every range in the day during which the requested meeting can be
/// held without conflicting with an event a mandatory attendee must attend.
///
/// The result is ascending by start, pairwise non-overlapping, and every
/// range is at least `request.duration` minutes long. A request duration of
/// zero admits every gap, degenerate ones included; a duration longer than
/// the day always yields an empty result.
///
/// Data flows strictly forward through the four stages; `events` is only
/// read, so concurrent queries over the same slice are safe.
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let conflicts = conflicting_ranges(events, &request.mandatory_attendees);
    let busy = normalize(&conflicts);

    free_gaps(&busy)
        .into_iter()
        .filter(|gap| gap.duration() >= request.duration)
        .collect()
}
