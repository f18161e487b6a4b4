//! Human-readable duration breakdown.
//!
//! Decomposes the span between two instants into years, months, and days
//! using a two-phase approximation: a fixed-365-day year estimate followed
//! by an exact calendar month walk. Downstream model configurations depend
//! on the specific numbers this produces, so the approximation is a
//! compatibility contract; do not replace it with an exact calendar
//! decomposition.

use std::fmt;

use crate::date::days_in_month;
use crate::instant::{Instant, SECONDS_PER_DAY};

/// Elapsed duration decomposed into whole years, whole months, and
/// remaining days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBreakdown {
    /// Whole years, from the fixed-365-day estimate.
    pub years: i64,
    /// Whole calendar months walked past the year anchor.
    pub months: i64,
    /// Remaining days, inclusive of the end instant's day.
    pub days: i64,
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, and {} days",
            self.years, self.months, self.days
        )
    }
}

/// Computes the year/month/day breakdown of the span from `start` to `end`.
///
/// Phase 1: the year count is `whole_days / 365`, deliberately ignoring
/// leap days. The anchor is `start` advanced by that many calendar years
/// (a February 29 anchor clamps to February 28 in a non-leap year).
///
/// Phase 2: while advancing the anchor by the length of its current month
/// still lands at or before `end`, count a month and move the anchor to
/// day 1 of its next month. The first step is measured from the anchor's
/// original day-of-month, every later step from day 1.
///
/// The day remainder is inclusive of the end instant's day. If the year
/// estimate overshoots `end` (possible across many leap years), the
/// remainder comes out as 0 rather than negative.
pub fn breakdown(start: Instant, end: Instant) -> DurationBreakdown {
    let years = start.whole_days_until(end) / 365;
    let mut anchor = start.with_date(start.date().with_added_years(years as i32));

    let mut months = 0_i64;
    loop {
        let month_len = i64::from(days_in_month(anchor.date().year(), anchor.date().month()));
        if anchor.epoch_seconds() + month_len * SECONDS_PER_DAY > end.epoch_seconds() {
            break;
        }
        months += 1;
        anchor = anchor.with_date(anchor.date().first_of_next_month());
    }

    let days = anchor.whole_days_until(end) + 1;
    DurationBreakdown { years, months, days }
}
