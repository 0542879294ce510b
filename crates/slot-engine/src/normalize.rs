//! Conflict normalization — sort, drop nested ranges, merge overlapping runs.
//!
//! Turns an unordered pile of (possibly overlapping, nested, or duplicate)
//! conflicting ranges into the minimal ascending non-overlapping sequence
//! with the same union. This is the algorithmic core of the engine; its
//! correctness rests on the `(start ascending, end descending)` sort order,
//! which makes a single left-to-right pass sufficient for both nesting
//! removal and transitive overlap merging.

use crate::timerange::{cmp_start_asc_end_desc, TimeRange};

/// Normalize conflicting ranges into a minimal busy schedule.
///
/// The result is sorted ascending by start, pairwise non-overlapping, and
/// has the same union as the input. Ranges that merely touch end-to-start
/// are kept separate. The input is never mutated; each pass builds a fresh
/// sequence. Idempotent: normalizing an already-normalized sequence returns
/// it unchanged.
pub fn normalize(conflicts: &[TimeRange]) -> Vec<TimeRange> {
    let mut sorted = conflicts.to_vec();
    sorted.sort_by(cmp_start_asc_end_desc);

    merge_runs(&drop_nested(&sorted))
}

/// Drop every range fully contained in an earlier kept range.
///
/// Requires the input sorted by `(start asc, end desc)`: a container always
/// precedes its contents, so comparing each candidate against only the last
/// kept range finds every nesting. Ends are strictly increasing across the
/// kept ranges afterwards.
fn drop_nested(sorted: &[TimeRange]) -> Vec<TimeRange> {
    let mut kept: Vec<TimeRange> = Vec::with_capacity(sorted.len());

    for &candidate in sorted {
        match kept.last() {
            Some(last) if last.contains(&candidate) => {}
            _ => kept.push(candidate),
        }
    }

    kept
}

/// Collapse each run of consecutively overlapping ranges into one range
/// spanning `[firstOfRun.start, lastOfRun.end)`.
///
/// With nesting already removed, any range overlapping a later one in a run
/// also overlaps everything between them, so checking only adjacent pairs
/// detects all overlaps. A run of length 1 emits itself unchanged.
fn merge_runs(unnested: &[TimeRange]) -> Vec<TimeRange> {
    let mut merged = Vec::with_capacity(unnested.len());

    let mut ranges = unnested.iter();
    let Some(&first) = ranges.next() else {
        return merged;
    };

    let mut run_start = first.start();
    let mut run_end = first.end();
    let mut prev = first;

    for &next in ranges {
        if prev.overlaps(&next) {
            run_end = run_end.max(next.end());
        } else {
            merged.push(TimeRange::from_start_end(run_start, run_end));
            run_start = next.start();
            run_end = next.end();
        }
        prev = next;
    }

    merged.push(TimeRange::from_start_end(run_start, run_end));
    merged
}
