//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the normalized store-week observation (`SalesRecord`)
//! - the holiday calendar and tagging rules (`Holiday`, `WeekType`)
//! - aggregate view rows (`HolidaySummaryRow`, `StoreSummaryRow`, ...)
//! - query selectors (`NumericColumn`, `WeekFilter`)

pub mod holidays;
pub mod types;

pub use holidays::*;
pub use types::*;
