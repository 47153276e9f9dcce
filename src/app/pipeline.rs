//! Shared load-and-aggregate pipeline behind the CLI front-end.
//!
//! ingest -> tag -> aggregate runs exactly once per process; the result is
//! an immutable snapshot that every query borrows. Nothing mutates the
//! snapshot after construction; a changed source file means a fresh load.

use crate::agg::{fuel_sales_series, holiday_summary, store_lookup, store_summary, summary_metrics};
use crate::domain::{
    DashboardFile, FuelSalesPoint, HolidaySummaryRow, LoadConfig, NumericColumn, SalesRecord,
    StoreSummaryRow, SummaryMetrics, TrendLine, WeekFilter,
};
use crate::error::AppError;
use crate::io::load_sales_records;
use crate::trend::{TrendFailure, fit_trend};

/// The immutable dataset snapshot: normalized records plus every aggregate
/// view, computed once at load time.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub records: Vec<SalesRecord>,
    pub holiday_summary: Vec<HolidaySummaryRow>,
    pub store_summary: Vec<StoreSummaryRow>,
    pub fuel_series: Vec<FuelSalesPoint>,
    pub metrics: SummaryMetrics,
    pub rows_read: usize,
}

impl Dashboard {
    /// Build the full snapshot from the configured CSV.
    pub fn load(config: &LoadConfig) -> Result<Dashboard, AppError> {
        let ingest = load_sales_records(config)?;
        Self::from_records(ingest.records, ingest.rows_read)
    }

    /// Build a snapshot from already-normalized records.
    pub fn from_records(records: Vec<SalesRecord>, rows_read: usize) -> Result<Dashboard, AppError> {
        let metrics = summary_metrics(&records)
            .ok_or_else(|| AppError::new(3, "Cannot summarize an empty dataset."))?;

        Ok(Dashboard {
            holiday_summary: holiday_summary(&records),
            store_summary: store_summary(&records),
            fuel_series: fuel_sales_series(&records),
            metrics,
            rows_read,
            records,
        })
    }

    /// Look up one store's summary row. Unknown ids are a miss, not a
    /// fabricated zero row.
    pub fn store_lookup(&self, store: u32) -> Option<&StoreSummaryRow> {
        store_lookup(&self.store_summary, store)
    }

    /// Fit a trend over the filtered record subset.
    ///
    /// Pure and synchronous; recomputed per call. The computation is cheap
    /// enough that memoizing by filter key is intentionally omitted.
    pub fn trend(
        &self,
        filter: WeekFilter,
        x: NumericColumn,
        y: NumericColumn,
    ) -> Result<TrendLine, TrendFailure> {
        fit_trend(&self.records, filter, x, y)
    }

    /// Assemble the machine-facing export bundle.
    pub fn to_file(&self) -> DashboardFile {
        DashboardFile {
            tool: "pulse".to_string(),
            metrics: self.metrics.clone(),
            holiday_summary: self.holiday_summary.clone(),
            store_summary: self.store_summary.clone(),
            fuel_series: self.fuel_series.clone(),
        }
    }
}
