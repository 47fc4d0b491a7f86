//! End-to-end harness test: seeded run, CSV output, result sanity.

use ordex_bench::{write_reports, BenchRunner};
use ordex_common::BenchConfig;
use tempfile::tempdir;

#[test]
fn test_seeded_run_writes_reports() {
    let dir = tempdir().unwrap();
    let config = BenchConfig {
        sizes: vec![0, 100, 1_000],
        search_iterations: 5,
        output_dir: dir.path().join("results"),
        seed: Some(2024),
    };

    let mut runner = BenchRunner::new(config.clone()).unwrap();
    let results = runner.run();
    assert_eq!(results.len(), 3);

    assert_eq!(results[0].size, 0);
    assert!(results[0].search_key.is_none());
    for result in &results[1..] {
        assert!(result.search_key.is_some());
        assert!(result.matches >= 1);
    }

    write_reports(&config, &results).unwrap();

    let times = std::fs::read_to_string(config.search_times_path()).unwrap();
    let lines: Vec<&str> = times.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Size,Linear_Search_ns"));
    assert_eq!(lines[1], "0,0,0,0,0,0");
    assert!(lines[2].starts_with("100,"));
    assert_eq!(lines[3].split(',').count(), 6);

    let collisions = std::fs::read_to_string(config.collisions_path()).unwrap();
    let lines: Vec<&str> = collisions.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Size,Collisions");
    assert_eq!(lines[1], "0,0");
    assert!(lines[2].starts_with("100,"));
    assert!(lines[3].starts_with("1000,"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = BenchConfig {
        search_iterations: 0,
        ..Default::default()
    };
    assert!(BenchRunner::new(config).is_err());
}
