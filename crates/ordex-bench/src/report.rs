//! CSV report output.

use crate::runner::SizeResult;
use ordex_common::{BenchConfig, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Header of the search timing report.
pub const SEARCH_TIMES_HEADER: &str =
    "Size,Linear_Search_ns,BST_Search_ns,RBT_Search_ns,HashTable_Search_ns,Multimap_Search_ns";

/// Header of the hash collision report.
pub const COLLISIONS_HEADER: &str = "Size,Collisions";

/// Writes one row per measured size to the two CSV reports.
pub struct ReportWriter {
    search_times: BufWriter<File>,
    collisions: BufWriter<File>,
    search_times_path: PathBuf,
    collisions_path: PathBuf,
}

impl ReportWriter {
    /// Creates the output directory and both report files, writing headers.
    pub fn create(config: &BenchConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.output_dir)?;

        let search_times_path = config.search_times_path();
        let collisions_path = config.collisions_path();

        let mut search_times = BufWriter::new(File::create(&search_times_path)?);
        let mut collisions = BufWriter::new(File::create(&collisions_path)?);
        writeln!(search_times, "{}", SEARCH_TIMES_HEADER)?;
        writeln!(collisions, "{}", COLLISIONS_HEADER)?;

        Ok(Self {
            search_times,
            collisions,
            search_times_path,
            collisions_path,
        })
    }

    /// Appends one size's measurements.
    pub fn write_row(&mut self, result: &SizeResult) -> Result<()> {
        writeln!(
            self.search_times,
            "{},{},{},{},{},{}",
            result.size,
            result.linear.search_ns,
            result.bst.search_ns,
            result.rbt.search_ns,
            result.hash_table.search_ns,
            result.multimap.search_ns
        )?;
        writeln!(self.collisions, "{},{}", result.size, result.hash_collisions)?;
        Ok(())
    }

    /// Flushes both files.
    pub fn finish(mut self) -> Result<()> {
        self.search_times.flush()?;
        self.collisions.flush()?;
        Ok(())
    }

    /// Path of the search timing report.
    pub fn search_times_path(&self) -> &Path {
        &self.search_times_path
    }

    /// Path of the hash collision report.
    pub fn collisions_path(&self) -> &Path {
        &self.collisions_path
    }
}

/// Writes every result to the reports configured in `config`.
pub fn write_reports(config: &BenchConfig, results: &[SizeResult]) -> Result<()> {
    let mut writer = ReportWriter::create(config)?;
    for result in results {
        writer.write_row(result)?;
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::StructureTiming;
    use tempfile::tempdir;

    fn timing(search_ns: u64) -> StructureTiming {
        StructureTiming {
            build_ns: 0,
            search_ns,
        }
    }

    #[test]
    fn test_write_reports() {
        let dir = tempdir().unwrap();
        let config = BenchConfig {
            output_dir: dir.path().join("nested").join("results"),
            ..Default::default()
        };

        let results = vec![
            SizeResult {
                size: 100,
                search_key: Some("abc".to_string()),
                matches: 4,
                linear: timing(500),
                bst: timing(40),
                rbt: timing(30),
                hash_table: timing(10),
                multimap: timing(35),
                hash_collisions: 6,
            },
            SizeResult {
                size: 0,
                ..Default::default()
            },
        ];
        write_reports(&config, &results).unwrap();

        let times = std::fs::read_to_string(config.search_times_path()).unwrap();
        assert_eq!(
            times,
            format!("{}\n100,500,40,30,10,35\n0,0,0,0,0,0\n", SEARCH_TIMES_HEADER)
        );

        let collisions = std::fs::read_to_string(config.collisions_path()).unwrap();
        assert_eq!(collisions, "Size,Collisions\n100,6\n0,0\n");
    }

    #[test]
    fn test_writer_paths() {
        let dir = tempdir().unwrap();
        let config = BenchConfig {
            output_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let writer = ReportWriter::create(&config).unwrap();
        assert_eq!(writer.search_times_path(), config.search_times_path());
        assert_eq!(writer.collisions_path(), config.collisions_path());
        writer.finish().unwrap();
    }
}
