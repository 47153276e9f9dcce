//! Terminal report formatting.
//!
//! Formatting stays in one place so:
//! - the aggregation/trend code remains clean and testable
//! - output changes are localized (important for future snapshot tests)

use chrono::NaiveDate;

use crate::domain::{
    FuelSalesPoint, HolidaySummaryRow, StoreSummaryRow, SummaryMetrics, TrendLine, WeekFilter,
};

/// Format the headline summary cards.
pub fn format_summary(metrics: &SummaryMetrics) -> String {
    let mut out = String::new();

    out.push_str("=== Weekly Retail Sales ===\n");
    out.push_str(&format!(
        "Store-weeks: {} (rows after cleaning)\n",
        fmt_grouped(metrics.store_weeks as f64, 0)
    ));
    out.push_str(&format!("Stores: {} (unique locations)\n", metrics.stores));
    out.push_str(&format!(
        "Average weekly sales: {} (per store-week)\n",
        fmt_currency(metrics.avg_weekly_sales)
    ));
    out.push_str(&format!(
        "Date range: {} - {}\n",
        fmt_month_year(metrics.first_week),
        fmt_month_year(metrics.last_week)
    ));

    out
}

/// Format the holiday impact table (descending mean sales).
pub fn format_holiday_table(rows: &[HolidaySummaryRow]) -> String {
    let mut out = String::new();

    out.push_str("Holiday performance (flagged weeks):\n");
    out.push_str(&format!(
        "{:<16} {:>16} {:>16} {:>8}\n",
        "holiday", "mean_sales", "median_sales", "weeks"
    ));
    out.push_str(&format!("{:-<16} {:-<16} {:-<16} {:-<8}\n", "", "", "", ""));

    for row in rows {
        out.push_str(&format!(
            "{:<16} {:>16} {:>16} {:>8}\n",
            row.holiday.display_name(),
            fmt_grouped(row.mean_sales, 2),
            fmt_grouped(row.median_sales, 2),
            row.observations
        ));
    }

    out
}

/// Format the per-store table; `highlight` marks one store with `*`.
pub fn format_store_table(rows: &[StoreSummaryRow], highlight: Option<u32>) -> String {
    let mut out = String::new();

    out.push_str("Store sensitivity (all weeks):\n");
    out.push_str(&format!(
        "{:<2} {:>6} {:>14} {:>18} {:>10}\n",
        "", "store", "avg_unemp (%)", "avg_weekly_sales", "avg_cpi"
    ));
    out.push_str(&format!("{:-<2} {:-<6} {:-<14} {:-<18} {:-<10}\n", "", "", "", "", ""));

    for row in rows {
        let marker = if highlight == Some(row.store) { "*" } else { "" };
        out.push_str(&format!(
            "{:<2} {:>6} {:>14.3} {:>18} {:>10.3}\n",
            marker,
            row.store,
            row.avg_unemployment,
            fmt_grouped(row.avg_weekly_sales, 2),
            row.avg_cpi
        ));
    }

    out
}

/// Format the fuel price vs. total sales series.
pub fn format_fuel_table(points: &[FuelSalesPoint]) -> String {
    let mut out = String::new();

    out.push_str("Fuel price vs. total weekly sales:\n");
    out.push_str(&format!(
        "{:<12} {:>20} {:>12}\n",
        "week", "total_sales", "avg_fuel"
    ));
    out.push_str(&format!("{:-<12} {:-<20} {:-<12}\n", "", "", ""));

    for point in points {
        out.push_str(&format!(
            "{:<12} {:>20} {:>12.3}\n",
            point.date,
            fmt_grouped(point.total_weekly_sales, 2),
            point.avg_fuel_price
        ));
    }

    out
}

/// Format a fitted trend line plus its overlay sample grid.
pub fn format_trend(line: &TrendLine, filter: WeekFilter) -> String {
    let mut out = String::new();

    out.push_str("=== Linear Trend (OLS) ===\n");
    out.push_str(&format!("Weeks: {}\n", filter.display_name()));
    out.push_str(&format!("X: {}\n", line.x.display_name()));
    out.push_str(&format!("Y: {}\n", line.y.display_name()));
    out.push_str(&format!(
        "Fit: y = {:.6} * x + {:.6}\n",
        line.slope, line.intercept
    ));
    out.push('\n');

    out.push_str(&format!("{:>14} {:>18}\n", "x", "y_fit"));
    out.push_str(&format!("{:-<14} {:-<18}\n", "", ""));
    for point in &line.points {
        out.push_str(&format!("{:>14.3} {:>18.2}\n", point.x, point.y));
    }

    out
}

/// Currency with zero decimals and thousands separators. Display only;
/// stored values keep full precision.
fn fmt_currency(value: f64) -> String {
    format!("${}", fmt_grouped(value, 0))
}

/// Fixed-precision number with thousands separators in the integer part.
fn fmt_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rest, None),
    };

    let mut grouped = String::new();
    let digits = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Month + year granularity for date spans.
fn fmt_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
