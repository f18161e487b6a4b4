use clap::Parser;

use stride_calendar::{parse_partial, Boundary, CalendarError, Instant};

/// Stride model timestep calculator.
#[derive(Debug, Parser)]
#[command(
    name = "stride",
    version,
    about = "Calculate number of model timesteps"
)]
pub struct Cli {
    /// Start date for the model (YYYY, YYYY-MM, or YYYY-MM-DD).
    #[arg(value_parser = parse_start_date)]
    pub start_date: Instant,

    /// End date for the model (YYYY, YYYY-MM, or YYYY-MM-DD).
    #[arg(value_parser = parse_end_date)]
    pub end_date: Instant,

    /// Timestep in seconds.
    #[arg(
        long,
        default_value_t = 400,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub timestep: i64,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// A partial start date resolves omitted fields to their earliest value.
fn parse_start_date(text: &str) -> Result<Instant, CalendarError> {
    parse_partial(text, Boundary::Start)
}

/// A partial end date resolves omitted fields to their latest value.
fn parse_end_date(text: &str) -> Result<Instant, CalendarError> {
    parse_partial(text, Boundary::End)
}
