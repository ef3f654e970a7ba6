//! Command-line definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use expensa_core::MonthPeriod;
use expensa_core::export::ExportKind;

/// Expense and mileage tracker front-end
#[derive(Debug, Parser)]
#[command(name = "expensa", version, about, long_about = None)]
pub struct Cli {
    /// Override the API base URL (e.g. `http://localhost:5000/api`)
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands, one per page plus the one-shot actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Monthly totals, category chart and recent expenses
    Dashboard {
        /// Compute from raw records instead of the server's figures
        #[arg(long)]
        local: bool,

        /// Month to show when computing locally (YYYY-MM)
        #[arg(long, value_parser = parse_month, requires = "local")]
        month: Option<MonthPeriod>,
    },

    /// List expenses
    Expenses {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Only this client
        #[arg(long)]
        client: Option<i64>,

        /// Only billable expenses
        #[arg(long)]
        billable: bool,
    },

    /// List mileage trips with totals
    Trips {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Only this vehicle
        #[arg(long)]
        vehicle: Option<i64>,
    },

    /// List active clients
    Clients,

    /// List vehicles with their applicable rate
    Vehicles,

    /// Month-by-month totals for a year
    Monthly {
        /// Calendar year
        #[arg(long)]
        year: i32,

        /// Compute from the year's raw records instead of the server's figures
        #[arg(long)]
        local: bool,
    },

    /// Upload a receipt image and show what was recognized
    Scan {
        /// Image file (jpg, png, gif, webp, heic)
        file: PathBuf,
    },

    /// Download an Excel export
    Export {
        /// `spese` or `chilometriche`
        kind: ExportKind,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Only this client
        #[arg(long)]
        client: Option<i64>,

        /// Output path; defaults to the suggested file name
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Check that the API is reachable
    Health,
}

/// Parses `YYYY-MM`.
pub fn parse_month(value: &str) -> Result<MonthPeriod, String> {
    let (year, month) = value
        .split_once('-')
        .ok_or_else(|| format!("expected YYYY-MM, got '{value}'"))?;
    let year: i32 = year.parse().map_err(|_| format!("invalid year '{year}'"))?;
    let month: u32 = month
        .parse()
        .map_err(|_| format!("invalid month '{month}'"))?;
    MonthPeriod::new(year, month).map_err(|e| e.to_string())
}
