//! Error types for the stride-calendar crate.

/// Error type for all fallible operations in the stride-calendar crate.
///
/// The messages are user-facing: the CLI surfaces them verbatim when a
/// date argument fails to parse, so they name the invalid field and, for
/// day errors, the valid day count for that month and year.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date string does not split into 1..=3 numeric
    /// dash-separated components.
    #[error("Invalid date format. Use YYYY, YYYY-MM, or YYYY-MM-DD")]
    InvalidFormat,

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("Invalid month: {month}. Month must be between 1 and 12.")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i64,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("Invalid day: {day}. {month_name} {year} has {max_day} days.")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: i64,
        /// English name of the month for which the day is invalid.
        month_name: &'static str,
        /// The year, which decides February's length.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },
}
