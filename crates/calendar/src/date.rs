//! Gregorian civil date with leap-year-aware validation.

use std::fmt;

use crate::error::CalendarError;

/// Number of days in each month of a non-leap year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// English month names (index 0 unused).
pub(crate) const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian
/// calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month of the given year.
///
/// `month` must be in 1..=12; all callers in this crate validate it first.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Returns the English name of the given month (1..=12).
pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[month as usize]
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::InvalidDay`] if `day` is not valid for the given
    /// month and year (February 29 is only valid in leap years).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth {
                month: i64::from(month),
            });
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day: i64::from(day),
                month_name: month_name(month),
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the number of days between this date and 1970-01-01.
    ///
    /// Negative for dates before the epoch. Uses the standard
    /// days-from-civil algorithm over 400-year Gregorian eras, so it is
    /// exact across all leap-year rules.
    pub fn day_number(self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let mp = (i64::from(self.month) + 9) % 12;
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Returns day 1 of the following month.
    ///
    /// December wraps to January 1 of the next year.
    pub fn first_of_next_month(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        }
    }

    /// Returns this date advanced by `years` calendar years, preserving
    /// month and day.
    ///
    /// A February 29 date landing in a non-leap target year clamps to
    /// February 28.
    pub fn with_added_years(self, years: i32) -> Self {
        let year = self.year + years;
        let day = self.day.min(days_in_month(year, self.month));
        Self {
            year,
            month: self.month,
            day,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = Date::new(2000, 1, 1).unwrap();
        assert_eq!(date.year(), 2000);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            Date::new(2000, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            Date::new(2000, 13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            Date::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month_name: "February",
                year: 2023,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_feb_29_leap_year() {
        assert!(Date::new(2024, 2, 29).is_ok());
        assert!(Date::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn new_feb_29_century_non_leap() {
        assert_eq!(
            Date::new(1900, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month_name: "February",
                year: 1900,
                max_day: 28,
            }
        );
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn days_in_month_table() {
        assert_eq!(days_in_month(2023, 1), 31);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(2), "February");
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn day_number_epoch() {
        assert_eq!(Date::new(1970, 1, 1).unwrap().day_number(), 0);
        assert_eq!(Date::new(1970, 1, 2).unwrap().day_number(), 1);
        assert_eq!(Date::new(1969, 12, 31).unwrap().day_number(), -1);
    }

    #[test]
    fn day_number_known_values() {
        assert_eq!(Date::new(2000, 1, 1).unwrap().day_number(), 10_957);
        assert_eq!(Date::new(2000, 3, 1).unwrap().day_number(), 11_017);
    }

    #[test]
    fn day_number_counts_leap_day() {
        let feb28 = Date::new(2024, 2, 28).unwrap();
        let mar1 = Date::new(2024, 3, 1).unwrap();
        assert_eq!(mar1.day_number() - feb28.day_number(), 2);
    }

    #[test]
    fn day_number_consecutive_across_years() {
        let dec31 = Date::new(1999, 12, 31).unwrap();
        let jan1 = Date::new(2000, 1, 1).unwrap();
        assert_eq!(jan1.day_number() - dec31.day_number(), 1);
    }

    #[test]
    fn first_of_next_month_within_year() {
        let date = Date::new(2023, 6, 15).unwrap();
        let next = date.first_of_next_month();
        assert_eq!(next, Date::new(2023, 7, 1).unwrap());
    }

    #[test]
    fn first_of_next_month_december_wraps() {
        let date = Date::new(2023, 12, 25).unwrap();
        let next = date.first_of_next_month();
        assert_eq!(next, Date::new(2024, 1, 1).unwrap());
    }

    #[test]
    fn with_added_years_plain() {
        let date = Date::new(2020, 6, 15).unwrap();
        assert_eq!(date.with_added_years(3), Date::new(2023, 6, 15).unwrap());
        assert_eq!(date.with_added_years(0), date);
    }

    #[test]
    fn with_added_years_feb_29_clamps() {
        let date = Date::new(2020, 2, 29).unwrap();
        assert_eq!(date.with_added_years(1), Date::new(2021, 2, 28).unwrap());
        assert_eq!(date.with_added_years(4), Date::new(2024, 2, 29).unwrap());
    }

    #[test]
    fn display_zero_padded() {
        assert_eq!(Date::new(2023, 6, 1).unwrap().to_string(), "2023-06-01");
        assert_eq!(Date::new(843, 1, 9).unwrap().to_string(), "0843-01-09");
    }

    #[test]
    fn ord_same_year() {
        let jan1 = Date::new(2000, 1, 1).unwrap();
        let dec31 = Date::new(2000, 12, 31).unwrap();
        assert!(jan1 < dec31);
    }

    #[test]
    fn ord_different_years() {
        let dec31 = Date::new(1999, 12, 31).unwrap();
        let jan1 = Date::new(2000, 1, 1).unwrap();
        assert!(dec31 < jan1);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Date>();
    }
}
