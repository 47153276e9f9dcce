//! Aggregate views over the normalized record set.
//!
//! Responsibilities:
//!
//! - holiday impact summary (mean/median/count per holiday name)
//! - per-store sensitivity summary (three means per store)
//! - time-aligned fuel price vs. total sales series
//! - headline summary metrics
//!
//! Every reduction here is pure and order-insensitive: identical group
//! membership produces identical output regardless of record order.

pub mod fuel;
pub mod holiday;
pub mod store;
pub mod summary;

pub use fuel::*;
pub use holiday::*;
pub use store::*;
pub use summary::*;
