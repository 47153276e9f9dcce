//! Trend estimation over filtered record subsets.
//!
//! The estimator is a pure synchronous query: it reads the immutable record
//! slice, fits `y = slope * x + intercept` by closed-form OLS, and samples
//! the fitted line at evenly spaced x positions for overlay rendering.
//!
//! "No trend line" is a first-class outcome, distinct from a zero-slope
//! line: callers receive a [`TrendFailure`] instead of a fabricated flat
//! fit when the subset is empty or x-degenerate.

use crate::domain::{NumericColumn, SalesRecord, TrendLine, TrendPoint, WeekFilter};
use crate::math::{LineFit, fit_line};

/// Number of evenly spaced samples in the overlay grid.
pub const TREND_SAMPLES: usize = 50;

/// Why a trend fit could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendFailure {
    /// The filtered subset contains no records.
    EmptySubset,
    /// Every record in the subset shares one x value, so the OLS slope is
    /// undefined.
    DegenerateX,
}

impl std::fmt::Display for TrendFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            TrendFailure::EmptySubset => "no records match the requested filter",
            TrendFailure::DegenerateX => "the independent column has no variance in the subset",
        };
        write!(f, "{message}")
    }
}

/// Fit a first-order trend over the records selected by `filter`.
pub fn fit_trend(
    records: &[SalesRecord],
    filter: WeekFilter,
    x: NumericColumn,
    y: NumericColumn,
) -> Result<TrendLine, TrendFailure> {
    let subset: Vec<&SalesRecord> = records.iter().filter(|r| filter.matches(r)).collect();
    if subset.is_empty() {
        return Err(TrendFailure::EmptySubset);
    }

    let xs: Vec<f64> = subset.iter().map(|r| x.value(r)).collect();
    let ys: Vec<f64> = subset.iter().map(|r| y.value(r)).collect();

    let fit = fit_line(&xs, &ys).ok_or(TrendFailure::DegenerateX)?;

    let x_min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(TrendLine {
        x,
        y,
        slope: fit.slope,
        intercept: fit.intercept,
        points: sample_points(&fit, x_min, x_max, TREND_SAMPLES),
    })
}

/// Evenly spaced samples spanning `[x_min, x_max]`.
fn sample_points(fit: &LineFit, x_min: f64, x_max: f64, n: usize) -> Vec<TrendPoint> {
    let n = n.max(2);
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let u = i as f64 / (n as f64 - 1.0);
        let x = x_min + u * (x_max - x_min);
        points.push(TrendPoint {
            x,
            y: fit.predict(x),
        });
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Holiday, WeekType};
    use chrono::NaiveDate;

    fn record(week: u32, cpi: f64, sales: f64, flag: bool) -> SalesRecord {
        let date =
            NaiveDate::from_ymd_opt(2010, 2, 5).unwrap() + chrono::Duration::weeks(week as i64);
        SalesRecord {
            store: 1,
            date,
            weekly_sales: sales,
            holiday_flag: flag,
            temperature: 55,
            fuel_price: 2.75,
            cpi,
            unemployment: 7.9,
            week_type: WeekType::from_flag(flag),
            holiday: Holiday::for_week(date, flag),
        }
    }

    #[test]
    fn two_distinct_points_reproduce_the_line_through_them() {
        let records = vec![record(0, 200.0, 1000.0, false), record(1, 210.0, 1500.0, false)];

        let line = fit_trend(
            &records,
            WeekFilter::All,
            NumericColumn::Cpi,
            NumericColumn::WeeklySales,
        )
        .unwrap();

        assert!((line.slope - 50.0).abs() < 1e-9);
        assert!((line.intercept + 9000.0).abs() < 1e-6);

        // Endpoints of the sample grid land on the observed x range.
        assert_eq!(line.points.len(), TREND_SAMPLES);
        assert!((line.points[0].x - 200.0).abs() < 1e-12);
        assert!((line.points[TREND_SAMPLES - 1].x - 210.0).abs() < 1e-12);
        assert!((line.points[0].y - 1000.0).abs() < 1e-6);
        assert!((line.points[TREND_SAMPLES - 1].y - 1500.0).abs() < 1e-6);
    }

    #[test]
    fn empty_subset_is_a_distinct_failure() {
        let records = vec![record(0, 200.0, 1000.0, false)];
        let result = fit_trend(
            &records,
            WeekFilter::Holiday,
            NumericColumn::Cpi,
            NumericColumn::WeeklySales,
        );
        assert_eq!(result, Err(TrendFailure::EmptySubset));
    }

    #[test]
    fn shared_x_value_is_a_degenerate_fit() {
        let records = vec![
            record(0, 205.0, 1000.0, false),
            record(1, 205.0, 2000.0, false),
            record(2, 205.0, 3000.0, false),
        ];
        let result = fit_trend(
            &records,
            WeekFilter::All,
            NumericColumn::Cpi,
            NumericColumn::WeeklySales,
        );
        assert_eq!(result, Err(TrendFailure::DegenerateX));
    }

    #[test]
    fn week_filter_restricts_the_subset_before_fitting() {
        // Holiday weeks lie on y = 2x; non-holiday weeks would drag the
        // slope far off it.
        let records = vec![
            record(0, 100.0, 200.0, true),
            record(1, 110.0, 220.0, true),
            record(2, 120.0, 90000.0, false),
        ];

        let line = fit_trend(
            &records,
            WeekFilter::Holiday,
            NumericColumn::Cpi,
            NumericColumn::WeeklySales,
        )
        .unwrap();
        assert!((line.slope - 2.0).abs() < 1e-9);
        assert!(line.intercept.abs() < 1e-6);
    }

    #[test]
    fn samples_are_evenly_spaced() {
        let records = vec![record(0, 0.0, 0.0, false), record(1, 49.0, 98.0, false)];
        let line = fit_trend(
            &records,
            WeekFilter::All,
            NumericColumn::Cpi,
            NumericColumn::WeeklySales,
        )
        .unwrap();

        for (i, point) in line.points.iter().enumerate() {
            assert!((point.x - i as f64).abs() < 1e-9);
            assert!((point.y - 2.0 * i as f64).abs() < 1e-9);
        }
    }
}
