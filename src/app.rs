//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the immutable dashboard snapshot
//! - prints reports
//! - writes optional exports

use std::path::PathBuf;

use clap::Parser;

use crate::cli::{Cli, Command, DataArgs, ExportArgs, SampleArgs, StoresArgs, TrendArgs};
use crate::data::{SampleOptions, generate_sample_csv};
use crate::domain::LoadConfig;
use crate::error::AppError;
use crate::io::{write_dashboard_json, write_fuel_csv, write_holiday_csv, write_store_csv};
use crate::report;

pub mod pipeline;

use pipeline::Dashboard;

/// Entry point for the `pulse` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `pulse` and `pulse --csv data.csv` to behave like
    // `pulse report ...`. Clap requires a subcommand name, so we do a small,
    // explicit rewrite of the argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(args),
        Command::Holidays(args) => handle_holidays(args),
        Command::Stores(args) => handle_stores(args),
        Command::Fuel(args) => handle_fuel(args),
        Command::Trend(args) => handle_trend(args),
        Command::Export(args) => handle_export(args),
        Command::Sample(args) => handle_sample(args),
    }
}

fn handle_report(args: DataArgs) -> Result<(), AppError> {
    let dash = load_dashboard(&args)?;

    println!("{}", report::format_summary(&dash.metrics));
    println!("{}", report::format_holiday_table(&dash.holiday_summary));
    println!("{}", report::format_store_table(&dash.store_summary, None));
    println!("{}", report::format_fuel_table(&dash.fuel_series));
    Ok(())
}

fn handle_holidays(args: DataArgs) -> Result<(), AppError> {
    let dash = load_dashboard(&args)?;
    println!("{}", report::format_holiday_table(&dash.holiday_summary));
    Ok(())
}

fn handle_stores(args: StoresArgs) -> Result<(), AppError> {
    let dash = load_dashboard(&args.data)?;

    if let Some(store) = args.store {
        // The lookup miss must surface before any table is printed.
        if dash.store_lookup(store).is_none() {
            return Err(AppError::new(3, format!("No summary row for store {store}.")));
        }
    }

    println!("{}", report::format_store_table(&dash.store_summary, args.store));
    Ok(())
}

fn handle_fuel(args: DataArgs) -> Result<(), AppError> {
    let dash = load_dashboard(&args)?;
    println!("{}", report::format_fuel_table(&dash.fuel_series));
    Ok(())
}

fn handle_trend(args: TrendArgs) -> Result<(), AppError> {
    let dash = load_dashboard(&args.data)?;

    let line = dash
        .trend(args.weeks, args.x, args.y)
        .map_err(|failure| AppError::new(4, format!("Trend fit failed: {failure}.")))?;

    println!("{}", report::format_trend(&line, args.weeks));
    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    let dash = load_dashboard(&args.data)?;

    std::fs::create_dir_all(&args.out_dir).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create export dir '{}': {e}", args.out_dir.display()),
        )
    })?;

    write_holiday_csv(&args.out_dir.join("holiday_summary.csv"), &dash.holiday_summary)?;
    write_store_csv(&args.out_dir.join("store_summary.csv"), &dash.store_summary)?;
    write_fuel_csv(&args.out_dir.join("fuel_sales.csv"), &dash.fuel_series)?;
    write_dashboard_json(&args.out_dir.join("dashboard.json"), &dash.to_file())?;

    println!("Exported 4 files to {}", args.out_dir.display());
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let options = SampleOptions {
        stores: args.stores,
        weeks: args.weeks,
        seed: args.seed,
    };
    generate_sample_csv(&args.out, &options)?;

    println!(
        "Wrote {} synthetic store-weeks to {}",
        args.stores as u64 * args.weeks as u64,
        args.out.display()
    );
    Ok(())
}

fn load_dashboard(args: &DataArgs) -> Result<Dashboard, AppError> {
    let config = LoadConfig {
        csv_path: resolve_csv_path(args)?,
    };
    Dashboard::load(&config)
}

fn resolve_csv_path(args: &DataArgs) -> Result<PathBuf, AppError> {
    if let Some(path) = &args.csv {
        return Ok(path.clone());
    }
    dotenvy::dotenv().ok();
    std::env::var("SALES_CSV").map(PathBuf::from).map_err(|_| {
        AppError::new(
            2,
            "No CSV given: pass --csv or set SALES_CSV in the environment (.env).",
        )
    })
}

/// Rewrite argv so bare invocations default to `report`.
///
/// Rules:
/// - `pulse`                     -> `pulse report`
/// - `pulse --csv data.csv`      -> `pulse report --csv data.csv`
/// - `pulse --help/--version/-h` -> unchanged (top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(
        arg1.as_str(),
        "report" | "holidays" | "stores" | "fuel" | "trend" | "export" | "sample"
    );
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "report flags".
    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    // Otherwise, leave as-is and let clap report the unknown subcommand.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_report() {
        assert_eq!(rewrite_args(argv(&["pulse"])), argv(&["pulse", "report"]));
    }

    #[test]
    fn leading_flags_are_forwarded_to_report() {
        assert_eq!(
            rewrite_args(argv(&["pulse", "--csv", "sales.csv"])),
            argv(&["pulse", "report", "--csv", "sales.csv"])
        );
    }

    #[test]
    fn explicit_subcommands_are_untouched() {
        assert_eq!(
            rewrite_args(argv(&["pulse", "trend", "--weeks", "holiday"])),
            argv(&["pulse", "trend", "--weeks", "holiday"])
        );
    }

    #[test]
    fn help_and_version_stay_top_level() {
        assert_eq!(rewrite_args(argv(&["pulse", "--help"])), argv(&["pulse", "--help"]));
        assert_eq!(rewrite_args(argv(&["pulse", "-V"])), argv(&["pulse", "-V"]));
    }
}
