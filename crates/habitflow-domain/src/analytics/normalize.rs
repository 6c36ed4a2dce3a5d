use chrono::{DateTime, NaiveDate, Utc};

use crate::habit::Cadence;

/// Collapse raw completion timestamps to canonical period-start dates.
///
/// Timestamps may arrive unordered and duplicated; any number of events
/// inside the same period (same calendar day, or same ISO week for
/// weekly habits) collapse to a single canonical date. The result is
/// deduplicated and sorted ascending, which is the representation both
/// streak walks require.
pub fn normalize(cadence: Cadence, timestamps: &[DateTime<Utc>]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = timestamps
        .iter()
        .map(|ts| cadence.canonical_date(*ts))
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}
