//! Holiday-week sales aggregation.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::{Holiday, HolidaySummaryRow, SalesRecord};
use crate::math::{mean, median};

/// Summarize weekly sales per holiday name across flagged weeks.
///
/// `holiday` is populated exactly for flagged weeks (fallback included), so
/// grouping on it is the holiday-flag filter. Output is ordered by
/// descending mean sales; ties keep the order in which each holiday was
/// first encountered, since the sort is stable.
pub fn holiday_summary(records: &[SalesRecord]) -> Vec<HolidaySummaryRow> {
    let mut order: Vec<Holiday> = Vec::new();
    let mut groups: HashMap<Holiday, Vec<f64>> = HashMap::new();

    for record in records {
        let Some(holiday) = record.holiday else {
            continue;
        };
        if !groups.contains_key(&holiday) {
            order.push(holiday);
        }
        groups.entry(holiday).or_default().push(record.weekly_sales);
    }

    let mut rows: Vec<HolidaySummaryRow> = order
        .into_iter()
        .map(|holiday| {
            let sales = &groups[&holiday];
            // Groups are created with at least one observation.
            HolidaySummaryRow {
                holiday,
                mean_sales: mean(sales).unwrap_or(0.0),
                median_sales: median(sales).unwrap_or(0.0),
                observations: sales.len(),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.mean_sales
            .partial_cmp(&a.mean_sales)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WeekType;
    use chrono::NaiveDate;

    fn record(store: u32, ymd: (i32, u32, u32), sales: f64, flag: bool) -> SalesRecord {
        let date = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap();
        SalesRecord {
            store,
            date,
            weekly_sales: sales,
            holiday_flag: flag,
            temperature: 55,
            fuel_price: 2.75,
            cpi: 211.5,
            unemployment: 7.9,
            week_type: WeekType::from_flag(flag),
            holiday: Holiday::for_week(date, flag),
        }
    }

    #[test]
    fn only_flagged_weeks_contribute() {
        let records = vec![
            record(1, (2010, 2, 12), 100.0, true),
            record(1, (2010, 2, 5), 900.0, false),
            record(2, (2010, 2, 12), 300.0, true),
        ];

        let rows = holiday_summary(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].holiday, Holiday::SuperBowl);
        assert_eq!(rows[0].observations, 2);
        assert!((rows[0].mean_sales - 200.0).abs() < 1e-9);
        assert!((rows[0].median_sales - 200.0).abs() < 1e-9);
    }

    #[test]
    fn group_counts_sum_to_the_flagged_record_count() {
        let records = vec![
            record(1, (2010, 2, 12), 100.0, true),
            record(1, (2010, 9, 10), 200.0, true),
            record(1, (2010, 11, 26), 300.0, true),
            record(1, (2099, 1, 1), 400.0, true),
            record(1, (2010, 3, 5), 500.0, false),
        ];

        let rows = holiday_summary(&records);
        let flagged = records.iter().filter(|r| r.holiday_flag).count();
        let total: usize = rows.iter().map(|r| r.observations).sum();
        assert_eq!(total, flagged);
    }

    #[test]
    fn rows_are_sorted_by_descending_mean() {
        let records = vec![
            record(1, (2010, 2, 12), 100.0, true),
            record(1, (2010, 11, 26), 900.0, true),
            record(1, (2010, 9, 10), 500.0, true),
        ];

        let rows = holiday_summary(&records);
        let means: Vec<f64> = rows.iter().map(|r| r.mean_sales).collect();
        assert_eq!(means, vec![900.0, 500.0, 100.0]);
    }

    #[test]
    fn equal_means_keep_first_encounter_order() {
        let records = vec![
            record(1, (2010, 9, 10), 500.0, true),
            record(1, (2010, 2, 12), 500.0, true),
        ];

        let rows = holiday_summary(&records);
        assert_eq!(rows[0].holiday, Holiday::LaborDay);
        assert_eq!(rows[1].holiday, Holiday::SuperBowl);
    }

    #[test]
    fn fallback_weeks_form_their_own_group() {
        let records = vec![
            record(1, (2099, 1, 1), 250.0, true),
            record(2, (2099, 1, 8), 350.0, true),
        ];

        let rows = holiday_summary(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].holiday, Holiday::Other);
        assert_eq!(rows[0].observations, 2);
    }

    #[test]
    fn grouping_is_order_insensitive() {
        let mut records = vec![
            record(1, (2010, 2, 12), 100.0, true),
            record(2, (2010, 2, 12), 300.0, true),
            record(1, (2010, 9, 10), 700.0, true),
        ];
        let forward = holiday_summary(&records);
        records.reverse();
        let backward = holiday_summary(&records);
        assert_eq!(forward, backward);
    }
}
