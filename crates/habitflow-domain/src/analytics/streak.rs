use chrono::{DateTime, NaiveDate, Utc};

use crate::habit::Cadence;

/// Longest run of consecutive periods ever recorded.
///
/// `dates` must be canonical, deduplicated and ascending (the
/// [`normalize`](super::normalize) output). Single forward pass: a gap
/// other than exactly one step ends the current run.
pub fn longest_streak(cadence: Cadence, dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let step = cadence.step();
    let mut best_run = 0u32;
    let mut current_run = 1u32;

    for pair in dates.windows(2) {
        if pair[1] - pair[0] == step {
            current_run += 1;
        } else {
            best_run = best_run.max(current_run);
            current_run = 1;
        }
    }

    best_run.max(current_run)
}

/// Length of the streak still alive at `now`.
///
/// `now` is explicit rather than read from the wall clock so that
/// callers (and tests) control the reference point. A habit last
/// completed exactly one period before the current one still counts as
/// alive (done yesterday but not yet today); anything older breaks the
/// streak.
pub fn current_streak(cadence: Cadence, dates: &[NaiveDate], now: DateTime<Utc>) -> u32 {
    let last = match dates.last() {
        Some(last) => *last,
        None => return 0,
    };

    let step = cadence.step();
    let today = cadence.canonical_date(now);
    if today - last > step {
        return 0;
    }

    // Walk backward from the tail until the first gap
    let mut run = 1u32;
    for pair in dates.windows(2).rev() {
        if pair[1] - pair[0] == step {
            run += 1;
        } else {
            break;
        }
    }

    run
}
