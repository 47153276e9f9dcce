//! `retail-pulse` library crate.
//!
//! The binary (`pulse`) is a thin wrapper around this library so that:
//!
//! - the ingest/aggregation/trend core is testable without spawning processes
//! - a presentation layer (dashboards, charts) can consume the same snapshot
//!   types directly instead of re-parsing terminal output
//! - code stays easy to navigate as the project grows

pub mod agg;
pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
pub mod trend;
