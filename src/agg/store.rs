//! Per-store sensitivity aggregation.

use std::collections::HashMap;

use crate::domain::{SalesRecord, StoreSummaryRow};

/// Running sums for one store's means.
#[derive(Debug, Default, Clone, Copy)]
struct StoreAccumulator {
    n: usize,
    unemployment: f64,
    weekly_sales: f64,
    cpi: f64,
}

impl StoreAccumulator {
    fn add(&mut self, record: &SalesRecord) {
        self.n += 1;
        self.unemployment += record.unemployment;
        self.weekly_sales += record.weekly_sales;
        self.cpi += record.cpi;
    }

    fn into_row(self, store: u32) -> StoreSummaryRow {
        let n = self.n as f64;
        StoreSummaryRow {
            store,
            avg_unemployment: self.unemployment / n,
            avg_weekly_sales: self.weekly_sales / n,
            avg_cpi: self.cpi / n,
        }
    }
}

/// Per-store means over all weeks; holiday and non-holiday weeks both
/// contribute. One row per distinct store, ascending by store id.
pub fn store_summary(records: &[SalesRecord]) -> Vec<StoreSummaryRow> {
    let mut groups: HashMap<u32, StoreAccumulator> = HashMap::new();
    for record in records {
        groups.entry(record.store).or_default().add(record);
    }

    let mut stores: Vec<u32> = groups.keys().copied().collect();
    stores.sort_unstable();

    stores
        .into_iter()
        .map(|store| groups[&store].into_row(store))
        .collect()
}

/// Find one store's summary row in the ascending-by-store table.
///
/// An unknown id is a lookup miss, never a fabricated zero row.
pub fn store_lookup(rows: &[StoreSummaryRow], store: u32) -> Option<&StoreSummaryRow> {
    rows.binary_search_by_key(&store, |row| row.store)
        .ok()
        .map(|idx| &rows[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Holiday, WeekType};
    use chrono::NaiveDate;

    fn record(store: u32, week: u32, sales: f64, unemployment: f64, cpi: f64) -> SalesRecord {
        let date = NaiveDate::from_ymd_opt(2010, 2, 5).unwrap() + chrono::Duration::weeks(week as i64);
        SalesRecord {
            store,
            date,
            weekly_sales: sales,
            holiday_flag: false,
            temperature: 55,
            fuel_price: 2.75,
            cpi,
            unemployment,
            week_type: WeekType::from_flag(false),
            holiday: Holiday::for_week(date, false),
        }
    }

    #[test]
    fn one_row_per_distinct_store_in_ascending_order() {
        let records = vec![
            record(7, 0, 100.0, 8.0, 210.0),
            record(1, 0, 200.0, 6.0, 211.0),
            record(7, 1, 300.0, 8.2, 212.0),
            record(3, 0, 400.0, 9.0, 213.0),
        ];

        let rows = store_summary(&records);
        let ids: Vec<u32> = rows.iter().map(|r| r.store).collect();
        assert_eq!(ids, vec![1, 3, 7]);
    }

    #[test]
    fn means_cover_all_weeks_of_a_store() {
        let records = vec![
            record(1, 0, 100.0, 6.0, 210.0),
            record(1, 1, 300.0, 8.0, 214.0),
        ];

        let rows = store_summary(&records);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert!((row.avg_weekly_sales - 200.0).abs() < 1e-9);
        assert!((row.avg_unemployment - 7.0).abs() < 1e-9);
        assert!((row.avg_cpi - 212.0).abs() < 1e-9);
    }

    #[test]
    fn lookup_finds_existing_stores() {
        let records = vec![record(1, 0, 100.0, 6.0, 210.0), record(5, 0, 200.0, 7.0, 211.0)];
        let rows = store_summary(&records);
        assert_eq!(store_lookup(&rows, 5).map(|r| r.store), Some(5));
    }

    #[test]
    fn lookup_miss_is_none_not_a_zero_row() {
        let records = vec![record(1, 0, 100.0, 6.0, 210.0)];
        let rows = store_summary(&records);
        assert!(store_lookup(&rows, 9999).is_none());
    }
}
