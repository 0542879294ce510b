//! Gap extraction — the free ranges between a normalized busy schedule and
//! the day bounds.
//!
//! Walks the ascending non-overlapping conflict sequence and emits the
//! lead-in gap before the first conflict, the gap between each consecutive
//! pair, and the trail-out gap after the last conflict. The trail-out gap is
//! built with the inclusive-end constructor so a meeting may run through the
//! literal end of the day.

use crate::timerange::{self, TimeRange};

/// Compute the free ranges of the day complementary to `conflicts`.
///
/// `conflicts` must be normalized (ascending, non-overlapping). An empty
/// schedule yields the whole day as the single gap. Zero-length gaps (a
/// conflict starting at minute 0, or two conflicts touching end-to-start)
/// are emitted as zero-duration ranges rather than errors; the duration
/// filter excludes them from any result with a positive requested duration.
pub fn free_gaps(conflicts: &[TimeRange]) -> Vec<TimeRange> {
    let (Some(first), Some(last)) = (conflicts.first(), conflicts.last()) else {
        return vec![timerange::WHOLE_DAY];
    };

    let mut gaps = Vec::with_capacity(conflicts.len() + 1);

    gaps.push(TimeRange::from_start_end(
        timerange::START_OF_DAY,
        first.start(),
    ));

    for pair in conflicts.windows(2) {
        gaps.push(TimeRange::from_start_end(pair[0].end(), pair[1].start()));
    }

    gaps.push(TimeRange::from_start_end_inclusive(
        last.end(),
        timerange::END_OF_DAY,
    ));

    gaps
}
