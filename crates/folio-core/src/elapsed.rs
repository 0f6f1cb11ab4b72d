//! Elapsed-time decomposition for the about page counters.
//!
//! Years are fixed 365-day blocks, so the count drifts by a day every leap
//! year relative to the calendar.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const SECS_PER_YEAR: i64 = 365 * SECS_PER_DAY;

/// Time since a reference instant, split into non-overlapping units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elapsed {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Elapsed {
    /// Decomposes `now - reference`. A `now` before `reference` yields zero.
    pub fn between(reference: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let mut rest = (now - reference).num_seconds().max(0);
        let mut take = |unit: i64| {
            let n = rest / unit;
            rest -= n * unit;
            n as u64
        };

        let years = take(SECS_PER_YEAR);
        let days = take(SECS_PER_DAY);
        let hours = take(SECS_PER_HOUR);
        let minutes = take(SECS_PER_MINUTE);
        let seconds = take(1);

        Self {
            years,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Decomposes the time from `reference` to the current instant.
    pub fn since(reference: DateTime<Utc>) -> Self {
        Self::between(reference, Utc::now())
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} days, {} hours, {} minutes, and {} seconds",
            self.years, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Whole 365-day years from `reference` to `now`.
pub fn whole_years_since(reference: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    Elapsed::between(reference, now).years
}
