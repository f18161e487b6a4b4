//! Partial date string parsing.
//!
//! A partial date gives only as much precision as the user cares about:
//! `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`. The omitted fields resolve
//! differently depending on whether the string marks the start or the end
//! of the simulation window.

use crate::date::{days_in_month, month_name, Date};
use crate::error::CalendarError;
use crate::instant::Instant;

/// Which boundary of the simulation window a date string describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Omitted fields resolve to the earliest instant they allow
    /// (January, day 1, 00:00:00).
    Start,
    /// Omitted fields resolve to the latest instant they allow
    /// (December, last day of month, 23:59:59).
    End,
}

/// Parses a partial date string into a fully resolved [`Instant`].
///
/// # Errors
///
/// - [`CalendarError::InvalidFormat`] for a token that is not 1..=3
///   dash-separated integers, or a year outside 1..=9999.
/// - [`CalendarError::InvalidMonth`] for a month outside 1..=12.
/// - [`CalendarError::InvalidDay`] for a day outside the month's valid
///   range for that year (leap-year-aware).
///
/// # Examples
///
/// ```
/// use stride_calendar::{parse_partial, Boundary};
///
/// let start = parse_partial("2023-06", Boundary::Start).unwrap();
/// let end = parse_partial("2023-06", Boundary::End).unwrap();
/// assert_eq!(start.to_string(), "2023-06-01");
/// assert_eq!(end.to_string(), "2023-06-30");
/// ```
pub fn parse_partial(text: &str, boundary: Boundary) -> Result<Instant, CalendarError> {
    let parts = split_numeric(text)?;
    let date = match parts.as_slice() {
        [year] => {
            let year = narrow_year(*year)?;
            match boundary {
                Boundary::Start => Date::new(year, 1, 1)?,
                Boundary::End => Date::new(year, 12, 31)?,
            }
        }
        [year, month] => {
            let year = narrow_year(*year)?;
            let month = validate_month(*month)?;
            match boundary {
                Boundary::Start => Date::new(year, month, 1)?,
                Boundary::End => Date::new(year, month, days_in_month(year, month))?,
            }
        }
        [year, month, day] => {
            let year = narrow_year(*year)?;
            let month = validate_month(*month)?;
            let max_day = days_in_month(year, month);
            if !(1..=i64::from(max_day)).contains(day) {
                return Err(CalendarError::InvalidDay {
                    day: *day,
                    month_name: month_name(month),
                    year,
                    max_day,
                });
            }
            Date::new(year, month, *day as u8)?
        }
        _ => return Err(CalendarError::InvalidFormat),
    };
    Ok(match boundary {
        Boundary::Start => Instant::start_of_day(date),
        Boundary::End => Instant::end_of_day(date),
    })
}

/// Splits on `-` and parses each component as an integer.
///
/// A non-numeric (or empty) component is a format error, same as a wrong
/// component count.
fn split_numeric(text: &str) -> Result<Vec<i64>, CalendarError> {
    text.split('-')
        .map(|part| part.parse::<i64>().map_err(|_| CalendarError::InvalidFormat))
        .collect()
}

/// Years are bounded to 1..=9999; anything outside is a format error,
/// not a range error with its own message.
fn narrow_year(year: i64) -> Result<i32, CalendarError> {
    if (1..=9999).contains(&year) {
        Ok(year as i32)
    } else {
        Err(CalendarError::InvalidFormat)
    }
}

fn validate_month(month: i64) -> Result<u8, CalendarError> {
    if (1..=12).contains(&month) {
        Ok(month as u8)
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}
