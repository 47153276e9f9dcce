//! Synthetic weekly sales data in the ingest schema.
//!
//! Useful for demos and tests when the real export is not on hand. Output
//! is fully determined by the options: same seed, same bytes. Holiday flags
//! come from the real calendar so the generated file exercises the same
//! tagging paths as production data.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::Holiday;
use crate::error::AppError;

/// First generated week (a Friday, matching the real dataset's cadence).
const FIRST_WEEK: (i32, u32, u32) = (2010, 2, 5);

/// Relative sales lift applied to holiday weeks.
const HOLIDAY_LIFT: f64 = 1.15;

/// Options for sample generation.
#[derive(Debug, Clone)]
pub struct SampleOptions {
    pub stores: u32,
    pub weeks: u32,
    pub seed: u64,
}

/// One generated row, pre-normalization (raw precision on purpose so the
/// ingestor's rounding has work to do).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    pub store: u32,
    pub date: NaiveDate,
    pub weekly_sales: f64,
    pub holiday_flag: bool,
    pub temperature: f64,
    pub fuel_price: f64,
    pub cpi: f64,
    pub unemployment: f64,
}

/// Generate a synthetic sales CSV at `path`.
pub fn generate_sample_csv(path: &Path, options: &SampleOptions) -> Result<(), AppError> {
    let rows = generate_rows(options)?;
    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create sample CSV '{}': {e}", path.display()))
    })?;
    file.write_all(render_csv(&rows).as_bytes()).map_err(|e| {
        AppError::new(2, format!("Failed to write sample CSV '{}': {e}", path.display()))
    })?;
    Ok(())
}

/// Generate `stores * weeks` observation rows, deterministic in the seed.
pub fn generate_rows(options: &SampleOptions) -> Result<Vec<SampleRow>, AppError> {
    if options.stores == 0 || options.weeks == 0 {
        return Err(AppError::new(
            2,
            "Sample size must be at least one store and one week.",
        ));
    }

    let first_week = NaiveDate::from_ymd_opt(FIRST_WEEK.0, FIRST_WEEK.1, FIRST_WEEK.2)
        .ok_or_else(|| AppError::new(4, "Invalid first-week constant."))?;

    let mut rng = StdRng::seed_from_u64(options.seed);
    let noise = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let mut rows = Vec::with_capacity(options.stores as usize * options.weeks as usize);

    for store in 1..=options.stores {
        // Store-specific baselines so stores separate cleanly in summaries.
        let base_sales = rng.gen_range(400_000.0..2_200_000.0);
        let base_unemployment = rng.gen_range(4.0..12.0);
        let base_cpi = rng.gen_range(126.0..220.0);

        for week in 0..options.weeks {
            let date = first_week + Duration::weeks(i64::from(week));
            let holiday_flag = Holiday::from_date(date).is_some();

            // Yearly seasonal swing plus white noise.
            let season = (f64::from(week) / 52.0 * std::f64::consts::TAU).sin();
            let temperature = 55.0 + 25.0 * season + 5.0 * noise.sample(&mut rng);
            let fuel_price = 2.5 + f64::from(week) * 0.006 + 0.1 * noise.sample(&mut rng);
            let cpi = base_cpi + f64::from(week) * 0.08 + 0.3 * noise.sample(&mut rng);
            let unemployment = (base_unemployment + 0.2 * noise.sample(&mut rng)).max(0.1);

            let lift = if holiday_flag { HOLIDAY_LIFT } else { 1.0 };
            let weekly_sales =
                (base_sales * lift * (1.0 + 0.08 * noise.sample(&mut rng))).max(0.0);

            rows.push(SampleRow {
                store,
                date,
                weekly_sales,
                holiday_flag,
                temperature,
                fuel_price,
                cpi,
                unemployment,
            });
        }
    }

    Ok(rows)
}

/// Render rows as CSV text in the exact ingest schema (`DD-MM-YYYY` dates,
/// `0`/`1` flags).
pub fn render_csv(rows: &[SampleRow]) -> String {
    let mut out = String::new();
    out.push_str("Store,Date,Weekly_Sales,Holiday_Flag,Temperature,Fuel_Price,CPI,Unemployment\n");
    for row in rows {
        out.push_str(&format!(
            "{},{},{:.2},{},{:.2},{:.3},{:.4},{:.3}\n",
            row.store,
            row.date.format("%d-%m-%Y"),
            row.weekly_sales,
            u8::from(row.holiday_flag),
            row.temperature,
            row.fuel_price,
            row.cpi,
            row.unemployment
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_sales_records;

    fn options() -> SampleOptions {
        SampleOptions {
            stores: 3,
            weeks: 60,
            seed: 42,
        }
    }

    #[test]
    fn generation_is_deterministic_in_the_seed() {
        let first = generate_rows(&options()).unwrap();
        let second = generate_rows(&options()).unwrap();
        assert_eq!(first, second);

        let other_seed = generate_rows(&SampleOptions {
            seed: 43,
            ..options()
        })
        .unwrap();
        assert_ne!(first, other_seed);
    }

    #[test]
    fn generated_csv_round_trips_through_ingest() {
        let rows = generate_rows(&options()).unwrap();
        let csv = render_csv(&rows);

        let data = read_sales_records(csv.as_bytes()).unwrap();
        assert_eq!(data.records.len(), 3 * 60);
        assert_eq!(data.rows_read, 3 * 60);
    }

    #[test]
    fn flags_follow_the_holiday_calendar() {
        let rows = generate_rows(&options()).unwrap();
        for row in rows {
            assert_eq!(row.holiday_flag, Holiday::from_date(row.date).is_some());
        }
    }

    #[test]
    fn sixty_weeks_span_multiple_flagged_holidays() {
        // 2010-02-12 (Super Bowl), 2010-09-10 (Labor Day), 2010-11-26
        // (Thanksgiving), 2010-12-31 (Christmas), 2011-02-11 (Super Bowl)
        // all fall inside the first 60 generated weeks.
        let rows = generate_rows(&options()).unwrap();
        let flagged_per_store = rows.iter().filter(|r| r.store == 1 && r.holiday_flag).count();
        assert_eq!(flagged_per_store, 5);
    }

    #[test]
    fn zero_sized_requests_are_rejected() {
        let err = generate_rows(&SampleOptions {
            stores: 0,
            ..options()
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
