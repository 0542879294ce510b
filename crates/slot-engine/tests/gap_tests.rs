//! Tests for gap extraction over a normalized busy schedule.

use slot_engine::free_gaps;
use slot_engine::timerange::WHOLE_DAY;
use slot_engine::TimeRange;

/// Helper: a range that is known valid.
fn range(start: i32, duration: i32) -> TimeRange {
    TimeRange::new(start, duration).expect("test range must be valid")
}

#[test]
fn no_conflicts_yields_the_whole_day() {
    assert_eq!(free_gaps(&[]), vec![WHOLE_DAY]);
}

#[test]
fn single_conflict_yields_lead_in_and_trail_out() {
    // Busy 10:00-11:00 → free [0,600) and [660,1440].
    let busy = vec![range(600, 60)];
    let gaps = free_gaps(&busy);

    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0], range(0, 600));
    assert_eq!(gaps[1].start(), 660);
    assert_eq!(gaps[1].duration(), 780);
    assert_eq!(gaps[1].end(), 1440, "trail gap runs through the day boundary");
}

#[test]
fn gaps_appear_between_consecutive_conflicts() {
    // Busy 09:00-10:00 and 12:00-13:00 → three gaps.
    let busy = vec![range(540, 60), range(720, 60)];
    let gaps = free_gaps(&busy);

    assert_eq!(gaps.len(), 3);
    assert_eq!(gaps[0], range(0, 540));
    assert_eq!(gaps[1], range(600, 120));
    assert_eq!(gaps[2].start(), 780);
    assert_eq!(gaps[2].end(), 1440);
}

#[test]
fn conflict_at_day_start_emits_zero_length_lead_gap() {
    // The degenerate gap is emitted, not an error; the duration filter
    // drops it for any positive request.
    let busy = vec![range(0, 120)];
    let gaps = free_gaps(&busy);

    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0], range(0, 0));
    assert_eq!(gaps[1], range(120, 1320));
}

#[test]
fn conflict_reaching_day_end_emits_zero_length_trail_gap() {
    let busy = vec![range(1380, 60)]; // 23:00-24:00
    let gaps = free_gaps(&busy);

    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0], range(0, 1380));
    assert_eq!(gaps[1].duration(), 0);
}

#[test]
fn touching_conflicts_emit_zero_length_gap_between_them() {
    // Normalization keeps touching ranges separate; the gap between
    // them is zero minutes long.
    let busy = vec![range(600, 60), range(660, 60)];
    let gaps = free_gaps(&busy);

    assert_eq!(gaps.len(), 3);
    assert_eq!(gaps[1], range(660, 0));
}

#[test]
fn fully_busy_day_yields_only_degenerate_gaps() {
    let busy = vec![range(0, 1440)];
    let gaps = free_gaps(&busy);

    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0].duration(), 0);
    assert_eq!(gaps[1].duration(), 0);
}

#[test]
fn gap_durations_plus_busy_durations_cover_the_day_exactly() {
    let busy = vec![range(540, 60), range(720, 90), range(1200, 30)];
    let gaps = free_gaps(&busy);

    let busy_total: i32 = busy.iter().map(|r| r.duration()).sum();
    let free_total: i32 = gaps.iter().map(|r| r.duration()).sum();
    assert_eq!(busy_total + free_total, 1440);
}
