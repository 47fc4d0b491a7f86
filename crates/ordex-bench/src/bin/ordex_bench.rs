use clap::Parser;
use log::info;
use ordex_bench::{write_reports, BenchRunner, SizeResult};
use ordex_common::logger::initialize_logger;
use ordex_common::{BenchConfig, OrdexError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare search times of ordex index structures", long_about = None)]
struct Args {
    /// JSON configuration file; flags below override its fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated record counts, e.g. 100,1000,10000.
    #[arg(short, long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Timed searches averaged per structure.
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Directory for the CSV reports.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Seed for reproducible data.
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> Result<BenchConfig, OrdexError> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::from_json_file(path)?,
            None => BenchConfig::default(),
        };
        if let Some(sizes) = self.sizes {
            config.sizes = sizes;
        }
        if let Some(iterations) = self.iterations {
            config.search_iterations = iterations;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

fn print_summary(results: &[SizeResult]) {
    println!(
        "{:>10} {:>12} {:>10} {:>10} {:>12} {:>12} {:>11}",
        "Size", "Linear_ns", "BST_ns", "RBT_ns", "Hash_ns", "Multimap_ns", "Collisions"
    );
    for r in results {
        println!(
            "{:>10} {:>12} {:>10} {:>10} {:>12} {:>12} {:>11}",
            r.size,
            r.linear.search_ns,
            r.bst.search_ns,
            r.rbt.search_ns,
            r.hash_table.search_ns,
            r.multimap.search_ns,
            r.hash_collisions
        );
    }
}

fn main() -> Result<(), OrdexError> {
    initialize_logger();

    let config = Args::parse().into_config()?;
    let mut runner = BenchRunner::new(config)?;
    let results = runner.run();

    let config = runner.config();
    write_reports(config, &results)?;
    print_summary(&results);
    info!(
        "Results saved to {} and {}",
        config.search_times_path().display(),
        config.collisions_path().display()
    );
    Ok(())
}
