//! Fully resolved point in time: a date plus hour, minute, and second.

use std::fmt;

use crate::date::Date;

/// Seconds per civil day.
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// A fully specified point in time with second precision.
///
/// Produced by the partial-date parser: a start boundary resolves to
/// 00:00:00 and an end boundary to 23:59:59 of its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    date: Date,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Instant {
    /// Creates the instant at 00:00:00 of the given date.
    pub fn start_of_day(date: Date) -> Self {
        Self {
            date,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Creates the instant at 23:59:59 of the given date.
    pub fn end_of_day(date: Date) -> Self {
        Self {
            date,
            hour: 23,
            minute: 59,
            second: 59,
        }
    }

    /// Returns the date part.
    pub fn date(self) -> Date {
        self.date
    }

    /// Returns this instant moved to another date, keeping the time of day.
    pub fn with_date(self, date: Date) -> Self {
        Self { date, ..self }
    }

    /// Returns the number of seconds between this instant and
    /// 1970-01-01 00:00:00.
    pub fn epoch_seconds(self) -> i64 {
        self.date.day_number() * SECONDS_PER_DAY
            + i64::from(self.hour) * 3_600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// Returns the number of seconds from this instant to `later`.
    ///
    /// Negative if `later` is earlier than `self`.
    pub fn seconds_until(self, later: Self) -> i64 {
        later.epoch_seconds() - self.epoch_seconds()
    }

    /// Returns the number of whole days from this instant to `later`.
    ///
    /// Floors toward negative infinity, so a span of 1 day minus 1 second
    /// counts as 0 days and a span of -1 second counts as -1 days.
    pub fn whole_days_until(self, later: Self) -> i64 {
        self.seconds_until(later).div_euclid(SECONDS_PER_DAY)
    }
}

impl fmt::Display for Instant {
    /// Renders the date part only (`YYYY-MM-DD`), the form the CLI echoes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.date.fmt(f)
    }
}
