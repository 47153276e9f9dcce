//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they
//! can be:
//!
//! - held in memory as the immutable dashboard snapshot
//! - exported to CSV/JSON for the presentation layer
//! - constructed directly in tests without fixture machinery

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::holidays::Holiday;

/// Week-type label, a pure function of the holiday flag (no date inspection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekType {
    Holiday,
    NonHoliday,
}

impl WeekType {
    pub fn from_flag(holiday_flag: bool) -> Self {
        if holiday_flag {
            WeekType::Holiday
        } else {
            WeekType::NonHoliday
        }
    }

    /// Label used in reports and exports.
    pub fn label(self) -> &'static str {
        match self {
            WeekType::Holiday => "Holiday Weeks",
            WeekType::NonHoliday => "Non-Holiday Weeks",
        }
    }
}

/// One store-week observation after cleaning and tagging.
///
/// Numeric fields carry the normalized precision set by the ingestor:
/// sales and fuel price at 2 decimals, CPI and unemployment at 3,
/// temperature at whole degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    pub store: u32,
    pub date: NaiveDate,
    pub weekly_sales: f64,
    pub holiday_flag: bool,
    pub temperature: i32,
    pub fuel_price: f64,
    pub cpi: f64,
    pub unemployment: f64,
    /// Derived from `holiday_flag` alone.
    pub week_type: WeekType,
    /// Derived from the calendar; populated exactly for flagged weeks.
    pub holiday: Option<Holiday>,
}

/// Numeric columns that can serve as trend axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NumericColumn {
    WeeklySales,
    Temperature,
    FuelPrice,
    Cpi,
    Unemployment,
}

impl NumericColumn {
    /// Read this column's value from a record.
    pub fn value(self, record: &SalesRecord) -> f64 {
        match self {
            NumericColumn::WeeklySales => record.weekly_sales,
            NumericColumn::Temperature => f64::from(record.temperature),
            NumericColumn::FuelPrice => record.fuel_price,
            NumericColumn::Cpi => record.cpi,
            NumericColumn::Unemployment => record.unemployment,
        }
    }

    /// Human-readable axis label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            NumericColumn::WeeklySales => "Weekly Sales ($)",
            NumericColumn::Temperature => "Temperature (F)",
            NumericColumn::FuelPrice => "Fuel Price ($)",
            NumericColumn::Cpi => "Consumer Price Index",
            NumericColumn::Unemployment => "Unemployment (%)",
        }
    }
}

/// Three-way week-type selector applied before trend fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekFilter {
    All,
    Holiday,
    NonHoliday,
}

impl WeekFilter {
    pub fn matches(self, record: &SalesRecord) -> bool {
        match self {
            WeekFilter::All => true,
            WeekFilter::Holiday => record.holiday_flag,
            WeekFilter::NonHoliday => !record.holiday_flag,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            WeekFilter::All => "All Weeks",
            WeekFilter::Holiday => "Holiday Weeks",
            WeekFilter::NonHoliday => "Non-Holiday Weeks",
        }
    }
}

/// One row of the holiday impact view: weekly sales statistics per holiday
/// name across flagged weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidaySummaryRow {
    pub holiday: Holiday,
    pub mean_sales: f64,
    pub median_sales: f64,
    pub observations: usize,
}

/// One row of the store sensitivity view: per-store means over all weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSummaryRow {
    pub store: u32,
    pub avg_unemployment: f64,
    pub avg_weekly_sales: f64,
    pub avg_cpi: f64,
}

/// One point of the time-aligned fuel/sales view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelSalesPoint {
    pub date: NaiveDate,
    /// Weekly sales summed across every store reporting that week.
    pub total_weekly_sales: f64,
    pub avg_fuel_price: f64,
}

/// Headline dataset facts, computed once per load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Rows after cleaning.
    pub store_weeks: usize,
    /// Distinct store identifiers.
    pub stores: usize,
    pub avg_weekly_sales: f64,
    pub first_week: NaiveDate,
    pub last_week: NaiveDate,
}

/// A fitted first-order trend with evenly spaced overlay samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub x: NumericColumn,
    pub y: NumericColumn,
    pub slope: f64,
    pub intercept: f64,
    /// Samples spanning `[min(x), max(x)]` of the fitted subset.
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub x: f64,
    pub y: f64,
}

/// The machine-facing export bundle consumed by dashboard tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardFile {
    pub tool: String,
    pub metrics: SummaryMetrics,
    pub holiday_summary: Vec<HolidaySummaryRow>,
    pub store_summary: Vec<StoreSummaryRow>,
    pub fuel_series: Vec<FuelSalesPoint>,
}

/// Input configuration resolved from CLI flags plus environment defaults.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub csv_path: PathBuf,
}
