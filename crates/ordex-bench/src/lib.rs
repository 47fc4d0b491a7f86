//! Search-time comparison harness for ordex.
//!
//! This crate provides:
//! - synthetic record generation with frequent duplicate keys
//! - wall-clock timing helpers
//! - a runner that builds every `SearchIndex` and averages search times
//! - CSV report output

pub mod datagen;
pub mod report;
pub mod runner;
pub mod timing;

pub use datagen::generate_records;
pub use report::{write_reports, ReportWriter};
pub use runner::{BenchRunner, SizeResult, StructureTiming};
pub use timing::{average_ns, measure_ns};
