//! ordex common types, errors, and utilities.
//!
//! This crate provides shared definitions used across all ordex components.

pub mod config;
pub mod error;
pub mod logger;
pub mod record;

pub use config::BenchConfig;
pub use error::{OrdexError, Result};
pub use record::Record;
