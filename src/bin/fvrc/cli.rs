use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Memorial Day anchored reservation calendar.
#[derive(Parser)]
#[command(
    name = "fvrc",
    version,
    about = "Reservation week calendar anchored to Memorial Day"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print Memorial Day of a year.
    MemorialDay { year: i32 },
    /// Print the reservation week and weekday of a date (YYYY-MM-DD).
    Week { date: NaiveDate },
    /// Project a date onto the same week and weekday of another year.
    Project {
        /// Date to project (YYYY-MM-DD).
        date: NaiveDate,
        /// Year to project into.
        year: i32,
    },
    /// Print the reservation weeks of `start` to `end` (inclusively).
    Table(TableArgs),
}

/// Arguments for the `table` subcommand.
#[derive(clap::Args)]
pub struct TableArgs {
    /// First year.
    pub start: i32,

    /// Last year, defaults to `start`.
    pub end: Option<i32>,

    /// Print the table as JSON.
    #[arg(long)]
    pub json: bool,
}
