//! CSV ingest and normalization.
//!
//! This module turns the raw weekly sales CSV into a clean, ordered
//! `Vec<SalesRecord>`.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Fatal row errors**: the dataset loads completely or not at all, so
//!   downstream aggregates are never built from a partial file
//! - **Deterministic normalization**: documented rounding, stable ordering
//! - **Separation of concerns**: no aggregation logic here

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::{Holiday, LoadConfig, SalesRecord, WeekType};
use crate::error::AppError;

/// The only accepted format for the `date` column.
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Logical columns the ingestor requires.
const REQUIRED_COLUMNS: [&str; 8] = [
    "store",
    "date",
    "weekly_sales",
    "holiday_flag",
    "temperature",
    "fuel_price",
    "cpi",
    "unemployment",
];

/// Ingest output: normalized, ordered records plus read accounting.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub records: Vec<SalesRecord>,
    pub rows_read: usize,
}

/// Load and normalize the configured sales CSV.
pub fn load_sales_records(config: &LoadConfig) -> Result<IngestedData, AppError> {
    let file = File::open(&config.csv_path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open CSV '{}': {e}", config.csv_path.display()),
        )
    })?;
    read_sales_records(file)
}

/// Ingest from any reader (the file-free seam used by tests).
pub fn read_sales_records<R: Read>(input: R) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut records = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because records() starts after the header row and CSV line
        // numbers are 1-based.
        let line = idx + 2;
        rows_read += 1;

        let record =
            result.map_err(|e| AppError::new(2, format!("CSV parse error at line {line}: {e}")))?;
        let parsed = parse_row(&record, &header_map)
            .map_err(|e| AppError::new(2, format!("Invalid row at line {line}: {e}")))?;
        records.push(parsed);
    }

    if records.is_empty() {
        return Err(AppError::new(3, "CSV contains no data rows."));
    }

    // Global ordering invariant: (store asc, date asc). The sort is stable,
    // so rows sharing a (store, date) key keep their input order.
    records.sort_by(|a, b| (a.store, a.date).cmp(&(b.store, b.date)));

    Ok(IngestedData { records, rows_read })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM
    // ("\u{feff}Store"); strip it so schema validation sees the real name.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    for column in REQUIRED_COLUMNS {
        if !header_map.contains_key(column) {
            return Err(AppError::new(
                2,
                format!("Missing required column: `{column}`"),
            ));
        }
    }
    Ok(())
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<SalesRecord, String> {
    let store = parse_store(get_required(record, header_map, "store")?)?;
    let date = parse_date(get_required(record, header_map, "date")?)?;
    let weekly_sales = round_decimals(parse_f64(record, header_map, "weekly_sales")?, 2);
    let holiday_flag = parse_flag(get_required(record, header_map, "holiday_flag")?)?;
    let temperature = round_to_int(parse_f64(record, header_map, "temperature")?);
    let fuel_price = round_decimals(parse_f64(record, header_map, "fuel_price")?, 2);
    let cpi = round_decimals(parse_f64(record, header_map, "cpi")?, 3);
    let unemployment = round_decimals(parse_f64(record, header_map, "unemployment")?, 3);

    Ok(SalesRecord {
        store,
        date,
        weekly_sales,
        holiday_flag,
        temperature,
        fuel_price,
        cpi,
        unemployment,
        week_type: WeekType::from_flag(holiday_flag),
        holiday: Holiday::for_week(date, holiday_flag),
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn parse_store(s: &str) -> Result<u32, String> {
    let store = s
        .parse::<u32>()
        .map_err(|_| format!("Invalid `store` id '{s}' (expected a positive integer)."))?;
    if store == 0 {
        return Err("Invalid `store` id '0' (ids start at 1).".to_string());
    }
    Ok(store)
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| format!("Invalid date '{s}'. Expected DD-MM-YYYY."))
}

fn parse_flag(s: &str) -> Result<bool, String> {
    match s {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(format!("Invalid `holiday_flag` '{other}' (expected 0 or 1).")),
    }
}

fn parse_f64(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<f64, String> {
    let raw = get_required(record, header_map, name)?;
    let value = raw
        .parse::<f64>()
        .map_err(|_| format!("Invalid `{name}` value '{raw}'."))?;
    if !value.is_finite() {
        return Err(format!("Non-finite `{name}` value '{raw}'."));
    }
    Ok(value)
}

/// Round half away from zero to `decimals` places.
///
/// This is the normalization convention for every numeric column;
/// `f64::round` has exactly these semantics for halfway cases.
fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to the nearest whole degree, half away from zero.
fn round_to_int(value: f64) -> i32 {
    value.round() as i32
}
