//! Configuration structures for the ordex benchmark harness.

use crate::error::{OrdexError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Input sizes measured when no explicit list is given.
pub const DEFAULT_SIZES: [usize; 13] = [
    100, 300, 500, 1_000, 3_000, 5_000, 10_000, 30_000, 50_000, 100_000, 300_000, 500_000,
    1_000_000,
];

/// Number of timed searches averaged per structure and size.
pub const DEFAULT_SEARCH_ITERATIONS: usize = 10_000;

/// Configuration for a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Record counts to generate, one measurement row per entry.
    pub sizes: Vec<usize>,
    /// Timed searches per structure; the reported figure is their mean.
    pub search_iterations: usize,
    /// Directory receiving the CSV reports.
    pub output_dir: PathBuf,
    /// Seed for data generation and key selection. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            search_iterations: DEFAULT_SEARCH_ITERATIONS,
            output_dir: PathBuf::from("./results"),
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Loads a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: BenchConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Checks that the configuration describes a runnable benchmark.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(OrdexError::ConfigError("no sizes configured".to_string()));
        }
        if self.search_iterations == 0 {
            return Err(OrdexError::InvalidParameter {
                name: "search_iterations".to_string(),
                value: self.search_iterations.to_string(),
            });
        }
        Ok(())
    }

    /// Path of the search timing report.
    pub fn search_times_path(&self) -> PathBuf {
        self.output_dir.join("search_times_ns.csv")
    }

    /// Path of the hash collision report.
    pub fn collisions_path(&self) -> PathBuf {
        self.output_dir.join("hash_collisions.csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bench_config_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.sizes.len(), 13);
        assert_eq!(config.sizes[0], 100);
        assert_eq!(*config.sizes.last().unwrap(), 1_000_000);
        assert_eq!(config.search_iterations, 10_000);
        assert_eq!(config.output_dir, PathBuf::from("./results"));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_report_paths() {
        let config = BenchConfig {
            output_dir: PathBuf::from("/tmp/out"),
            ..Default::default()
        };
        assert_eq!(
            config.search_times_path(),
            PathBuf::from("/tmp/out/search_times_ns.csv")
        );
        assert_eq!(
            config.collisions_path(),
            PathBuf::from("/tmp/out/hash_collisions.csv")
        );
    }

    #[test]
    fn test_validate_rejects_empty_sizes() {
        let config = BenchConfig {
            sizes: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(OrdexError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let config = BenchConfig {
            search_iterations: 0,
            ..Default::default()
        };
        match config.validate() {
            Err(OrdexError::InvalidParameter { name, value }) => {
                assert_eq!(name, "search_iterations");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let original = BenchConfig {
            sizes: vec![10, 20],
            search_iterations: 5,
            output_dir: PathBuf::from("out"),
            seed: Some(42),
        };
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: BenchConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_from_json_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sizes": [5, 50], "seed": 7}}"#).unwrap();

        let config = BenchConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.sizes, vec![5, 50]);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.search_iterations, DEFAULT_SEARCH_ITERATIONS);
    }

    #[test]
    fn test_from_json_file_errors() {
        let missing = BenchConfig::from_json_file("/nonexistent/ordex/config.json");
        assert!(matches!(missing, Err(OrdexError::Io(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let malformed = BenchConfig::from_json_file(file.path());
        assert!(matches!(malformed, Err(OrdexError::Serialization(_))));
    }
}
