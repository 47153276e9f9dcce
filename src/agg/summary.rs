//! Headline summary metrics.

use std::collections::HashSet;

use crate::domain::{SalesRecord, SummaryMetrics};

/// Scalar dataset-wide facts: row count, distinct store count, mean weekly
/// sales, and the observed date span. `None` only for an empty slice, which
/// ingest already rules out.
pub fn summary_metrics(records: &[SalesRecord]) -> Option<SummaryMetrics> {
    let first = records.first()?;

    let mut stores: HashSet<u32> = HashSet::new();
    let mut sales_sum = 0.0;
    let mut first_week = first.date;
    let mut last_week = first.date;

    for record in records {
        stores.insert(record.store);
        sales_sum += record.weekly_sales;
        first_week = first_week.min(record.date);
        last_week = last_week.max(record.date);
    }

    Some(SummaryMetrics {
        store_weeks: records.len(),
        stores: stores.len(),
        avg_weekly_sales: sales_sum / records.len() as f64,
        first_week,
        last_week,
    })
}
