//! Time-aligned fuel price vs. total sales aggregation.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{FuelSalesPoint, SalesRecord};

/// Per-date reduction across all stores: summed weekly sales and mean fuel
/// price. One point per distinct date, ascending.
pub fn fuel_sales_series(records: &[SalesRecord]) -> Vec<FuelSalesPoint> {
    let mut groups: HashMap<NaiveDate, (f64, f64, usize)> = HashMap::new();
    for record in records {
        let entry = groups.entry(record.date).or_insert((0.0, 0.0, 0));
        entry.0 += record.weekly_sales;
        entry.1 += record.fuel_price;
        entry.2 += 1;
    }

    let mut dates: Vec<NaiveDate> = groups.keys().copied().collect();
    dates.sort_unstable();

    dates
        .into_iter()
        .map(|date| {
            let (total, fuel_sum, n) = groups[&date];
            FuelSalesPoint {
                date,
                total_weekly_sales: total,
                avg_fuel_price: fuel_sum / n as f64,
            }
        })
        .collect()
}
