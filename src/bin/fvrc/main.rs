mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use fvrc::{memorial_day, ReservationCalendar};
use tracing::info;

use crate::cli::{Cli, Command, TableArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::MemorialDay { year } => {
            println!("{}", memorial_day(year)?);
        }
        Command::Week { date } => {
            let mut cal = ReservationCalendar::new().context("building reservation calendar")?;
            let position = cal
                .fvrc_position(date)
                .with_context(|| format!("looking up week of {date}"))?;
            println!("{date}: {position} ({})", cal.fvrc_day_name(date));
        }
        Command::Project { date, year } => {
            let mut cal = ReservationCalendar::new().context("building reservation calendar")?;
            let projected = cal
                .reservation_start_date(date, year)
                .with_context(|| format!("projecting {date} into {year}"))?;
            info!(%date, %projected, "projected");
            println!("{projected}");
        }
        Command::Table(args) => table(args)?,
    }
    Ok(())
}

fn table(args: TableArgs) -> Result<()> {
    let end = args.end.unwrap_or(args.start);
    let cal = ReservationCalendar::with_range(args.start, end)
        .with_context(|| format!("generating calendar for {}..={end}", args.start))?;
    if args.json {
        println!("{}", cal.to_json()?);
        return Ok(());
    }
    for year in cal.years() {
        for entry in cal.entries(year).unwrap_or_default() {
            println!("{}\t{:>2}\t{}", entry.year, entry.week_number, entry.start_date);
        }
    }
    Ok(())
}
