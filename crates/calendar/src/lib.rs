//! # stride-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar, sized for
//! configuring time-stepped numerical models: partial date strings resolve
//! to second-precision instants, instants count inclusive timesteps, and
//! spans decompose into a human-readable year/month/day breakdown.
//!
//! ## Quick Start
//!
//! ```
//! use stride_calendar::{breakdown, count_timesteps, parse_partial, Boundary};
//!
//! let start = parse_partial("2000-01-01", Boundary::Start).unwrap();
//! let end = parse_partial("2000-01-01", Boundary::End).unwrap();
//!
//! // One civil day of 86,400 inclusive seconds at 400 s per step.
//! assert_eq!(count_timesteps(start, end, 400), 216);
//! assert_eq!(breakdown(start, end).to_string(), "0 years, 0 months, and 1 days");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian civil date, leap-year rules, day numbering |
//! | `instant` | Date plus time of day, epoch-second arithmetic |
//! | `parse` | Partial date string resolution per window boundary |
//! | `steps` | Inclusive timestep counting |
//! | `breakdown` | Approximate year/month/day duration decomposition |
//! | `error` | Error types |

mod breakdown;
mod date;
mod error;
mod instant;
mod parse;
mod steps;

pub use breakdown::{breakdown, DurationBreakdown};
pub use date::{days_in_month, is_leap_year, month_name, Date};
pub use error::CalendarError;
pub use instant::Instant;
pub use parse::{parse_partial, Boundary};
pub use steps::count_timesteps;
