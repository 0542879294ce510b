//! The `TimeRange` value type — a half-open span of minutes within one day.
//!
//! Ranges are stored as `(start, duration)` with a derived exclusive `end`.
//! The day runs from minute 0 through minute 1439; [`WHOLE_DAY`] covers all
//! 1440 minutes. The inclusive-end constructor exists so the final gap of the
//! day can run through the last minute without an off-by-one truncating it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// First minute of the day.
pub const START_OF_DAY: i32 = 0;

/// Last minute of the day that a range may include (23:59).
pub const END_OF_DAY: i32 = 24 * 60 - 1;

/// The full scheduling horizon: `[0, 1440)`.
pub const WHOLE_DAY: TimeRange = TimeRange {
    start: START_OF_DAY,
    duration: END_OF_DAY - START_OF_DAY + 1,
};

/// An immutable span of minutes, half-open on its `end`.
///
/// Deserialization goes through the same validation as [`TimeRange::new`],
/// so a negative `start` or `duration` arriving over the wire is rejected
/// before it can reach the merge logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TimeRange {
    start: i32,
    duration: i32,
}

/// Unvalidated mirror of `TimeRange` used as the serde intermediate.
#[derive(Deserialize)]
struct RawRange {
    start: i32,
    duration: i32,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = SlotError;

    fn try_from(raw: RawRange) -> Result<TimeRange> {
        TimeRange::new(raw.start, raw.duration)
    }
}

impl TimeRange {
    /// Create a range from a start minute and a duration in minutes.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidRange`] when `start` or `duration` is
    /// negative. Zero-duration ranges are degenerate but legal.
    pub fn new(start: i32, duration: i32) -> Result<TimeRange> {
        if start < 0 || duration < 0 {
            return Err(SlotError::InvalidRange { start, duration });
        }
        Ok(TimeRange { start, duration })
    }

    /// Create a range covering `[start, end)`.
    ///
    /// An `end` at or before `start` yields a zero-duration range rather
    /// than an error; gap extraction relies on this for degenerate gaps.
    pub fn from_start_end(start: i32, end: i32) -> TimeRange {
        TimeRange {
            start,
            duration: (end - start).max(0),
        }
    }

    /// Create a range covering `[start, end]` — the end minute itself is
    /// included. Used only for the final gap of the day so a meeting can run
    /// through minute 1439 into the day boundary.
    pub fn from_start_end_inclusive(start: i32, end: i32) -> TimeRange {
        TimeRange {
            start,
            duration: (end - start + 1).max(0),
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Exclusive end minute: `start + duration`.
    pub fn end(&self) -> i32 {
        self.start + self.duration
    }

    /// True when the two ranges share at least one point.
    ///
    /// Strict comparison on both sides: ranges that merely touch
    /// end-to-start do NOT overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// True when this range fully encloses `other`, equal bounds included.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end() <= self.end()
    }
}

/// Composite ordering by `(start ascending, end descending)`.
///
/// When two ranges share a start, the longer one sorts first, so a single
/// left-to-right pass can drop every nested range. Nesting removal is only
/// correct under this exact ordering.
pub fn cmp_start_asc_end_desc(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.start.cmp(&b.start).then(b.end().cmp(&a.end()))
}
