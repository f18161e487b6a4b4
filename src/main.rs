mod cli;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use stride_calendar::{breakdown, count_timesteps};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.start_date > cli.end_date {
        println!("Error: Start date must be before end date.");
        return Ok(());
    }

    debug!(
        start = %cli.start_date,
        end = %cli.end_date,
        timestep = cli.timestep,
        "computing window"
    );
    let num_timesteps = count_timesteps(cli.start_date, cli.end_date, cli.timestep);
    let duration = breakdown(cli.start_date, cli.end_date);

    println!("Number of timesteps: {num_timesteps}");
    println!("Start date: {}", cli.start_date);
    println!("End date: {}", cli.end_date);
    println!("Total duration: {duration}");
    Ok(())
}
