//! Export aggregate tables for the presentation layer.
//!
//! CSV files are spreadsheet-friendly flat tables written row by row; the
//! JSON bundle is the machine-facing contract a dashboard front-end loads
//! in one request. Dates are written ISO (`YYYY-MM-DD`) on the way out;
//! the `DD-MM-YYYY` convention applies to the input file only.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{DashboardFile, FuelSalesPoint, HolidaySummaryRow, StoreSummaryRow};
use crate::error::AppError;

/// Write the holiday impact table.
pub fn write_holiday_csv(path: &Path, rows: &[HolidaySummaryRow]) -> Result<(), AppError> {
    let mut file = create(path)?;

    writeln!(file, "holiday,mean_sales,median_sales,observations")
        .map_err(|e| write_error(path, e))?;
    for row in rows {
        writeln!(
            file,
            "{},{:.2},{:.2},{}",
            row.holiday.display_name(),
            row.mean_sales,
            row.median_sales,
            row.observations
        )
        .map_err(|e| write_error(path, e))?;
    }

    Ok(())
}

/// Write the per-store summary table.
pub fn write_store_csv(path: &Path, rows: &[StoreSummaryRow]) -> Result<(), AppError> {
    let mut file = create(path)?;

    writeln!(file, "store,avg_unemployment,avg_weekly_sales,avg_cpi")
        .map_err(|e| write_error(path, e))?;
    for row in rows {
        writeln!(
            file,
            "{},{:.3},{:.2},{:.3}",
            row.store, row.avg_unemployment, row.avg_weekly_sales, row.avg_cpi
        )
        .map_err(|e| write_error(path, e))?;
    }

    Ok(())
}

/// Write the fuel price vs. total sales series.
pub fn write_fuel_csv(path: &Path, points: &[FuelSalesPoint]) -> Result<(), AppError> {
    let mut file = create(path)?;

    writeln!(file, "date,total_weekly_sales,avg_fuel_price").map_err(|e| write_error(path, e))?;
    for point in points {
        writeln!(
            file,
            "{},{:.2},{:.3}",
            point.date, point.total_weekly_sales, point.avg_fuel_price
        )
        .map_err(|e| write_error(path, e))?;
    }

    Ok(())
}

/// Write the full dashboard bundle as pretty-printed JSON.
pub fn write_dashboard_json(path: &Path, bundle: &DashboardFile) -> Result<(), AppError> {
    let file = create(path)?;
    serde_json::to_writer_pretty(file, bundle)
        .map_err(|e| AppError::new(2, format!("Failed to write dashboard JSON: {e}")))?;
    Ok(())
}

fn create(path: &Path) -> Result<File, AppError> {
    File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export '{}': {e}", path.display())))
}

fn write_error(path: &Path, e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write export '{}': {e}", path.display()))
}
