//! Command-line parsing for the weekly sales pipeline.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the data/math code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{NumericColumn, WeekFilter};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "pulse",
    version,
    about = "Weekly retail sales pipeline: CSV ingest, aggregation, trends"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the summary cards plus all three aggregate tables.
    Report(DataArgs),
    /// Print the holiday sales summary only.
    Holidays(DataArgs),
    /// Print the per-store summary, optionally looking up one store.
    Stores(StoresArgs),
    /// Print the fuel price vs. total sales series.
    Fuel(DataArgs),
    /// Fit and print a linear trend between two numeric columns.
    Trend(TrendArgs),
    /// Write aggregate tables (CSV) and the dashboard bundle (JSON).
    Export(ExportArgs),
    /// Generate a synthetic sales CSV in the ingest schema.
    Sample(SampleArgs),
}

/// Options shared by every command that reads the dataset.
#[derive(Debug, Args, Clone)]
pub struct DataArgs {
    /// Path to the weekly sales CSV (falls back to SALES_CSV from the
    /// environment / .env).
    #[arg(long, value_name = "CSV")]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct StoresArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Store id to look up; unknown ids exit with a lookup-miss error.
    #[arg(long)]
    pub store: Option<u32>,
}

#[derive(Debug, Args)]
pub struct TrendArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Week-type filter applied before fitting.
    #[arg(long, value_enum, default_value_t = WeekFilter::All)]
    pub weeks: WeekFilter,

    /// Independent (x) column.
    #[arg(long, value_enum, default_value_t = NumericColumn::Cpi)]
    pub x: NumericColumn,

    /// Dependent (y) column.
    #[arg(long, value_enum, default_value_t = NumericColumn::WeeklySales)]
    pub y: NumericColumn,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output directory for the exported tables.
    #[arg(long, value_name = "DIR", default_value = "exports")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Output CSV path.
    #[arg(long, value_name = "CSV")]
    pub out: PathBuf,

    /// Number of stores to simulate.
    #[arg(long, default_value_t = 45)]
    pub stores: u32,

    /// Number of weeks per store.
    #[arg(long, default_value_t = 143)]
    pub weeks: u32,

    /// Random seed; identical seeds produce identical files.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
