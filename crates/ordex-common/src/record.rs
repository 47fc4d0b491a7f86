//! Record type stored by every search structure.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A key/value tuple. Immutable once constructed.
///
/// Indexes order records by `key` alone. The two payload fields are
/// carried along and never inspected. Derived equality compares all three
/// fields, which is what tests use to tell duplicates apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    key: String,
    value1: i32,
    value2: f64,
}

impl Record {
    /// Creates a new record.
    pub fn new(key: impl Into<String>, value1: i32, value2: f64) -> Self {
        Self {
            key: key.into(),
            value1,
            value2,
        }
    }

    /// Returns the search key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the integer payload.
    #[inline]
    pub fn value1(&self) -> i32 {
        self.value1
    }

    /// Returns the floating-point payload.
    #[inline]
    pub fn value2(&self) -> f64 {
        self.value2
    }

    /// Compares two records by key using lexicographic byte order.
    #[inline]
    pub fn key_cmp(&self, other: &Record) -> Ordering {
        self.key.as_str().cmp(other.key.as_str())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: {}, Val1: {}, Val2: {}",
            self.key, self.value1, self.value2
        )
    }
}
