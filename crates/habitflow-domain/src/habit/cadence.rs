use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// How often a habit is expected to be performed.
///
/// The variant order matters: listings group daily habits before weekly
/// ones, so `Ord` follows declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
}

impl Cadence {
    /// The distance between two consecutive canonical dates.
    pub fn step(&self) -> Duration {
        match self {
            Cadence::Daily => Duration::days(1),
            Cadence::Weekly => Duration::days(7),
        }
    }

    /// The canonical period-start date for a timestamp.
    ///
    /// Daily periods collapse to the calendar date. Weekly periods
    /// collapse to the Monday of the ISO-8601 week, so events from
    /// Monday through Sunday of the same ISO week share one canonical
    /// date. ISO week 1 can contain late-December days of the previous
    /// year and vice versa, which is why this goes through chrono's
    /// ISO-calendar support instead of offset arithmetic.
    pub fn canonical_date(&self, at: DateTime<Utc>) -> NaiveDate {
        let date = at.date_naive();
        match self {
            Cadence::Daily => date,
            Cadence::Weekly => {
                let week = date.iso_week();
                NaiveDate::from_isoywd_opt(week.year(), week.week(), Weekday::Mon)
                    .expect("ISO week of a valid date is reconstructible")
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
        }
    }
}

impl FromStr for Cadence {
    type Err = DomainError;

    /// Accepts exactly `"daily"` or `"weekly"`. Anything else is
    /// rejected rather than defaulted, since a silently substituted
    /// cadence would corrupt streak semantics.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Cadence::Daily),
            "weekly" => Ok(Cadence::Weekly),
            other => Err(DomainError::InvalidCadence(other.to_string())),
        }
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
