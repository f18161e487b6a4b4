//! Timestep counting over an inclusive interval.

use crate::instant::Instant;

/// Counts the timesteps of `timestep_seconds` spanning `start..=end`.
///
/// The interval is inclusive of the end instant's own second, so the total
/// span is `(end - start) + 1` seconds. The count truncates toward zero,
/// so a trailing partial timestep is not counted.
///
/// `timestep_seconds` must be nonzero; the CLI layer guarantees it is
/// positive.
pub fn count_timesteps(start: Instant, end: Instant, timestep_seconds: i64) -> i64 {
    let total_seconds = start.seconds_until(end) + 1;
    total_seconds / timestep_seconds
}
