//! Benchmark driver: generates data, builds every structure, times searches.

use crate::datagen::generate_records;
use crate::timing::{average_ns, measure_ns};
use log::{debug, info};
use ordex_common::{BenchConfig, Record, Result};
use ordex_index::{
    ChainedHashTable, LinearIndex, OrderedMultiMap, PlainBst, RedBlackTree, SearchIndex,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build and mean search time for one structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructureTiming {
    pub build_ns: u64,
    pub search_ns: u64,
}

/// Measurements for one input size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeResult {
    pub size: usize,
    /// Key searched for; `None` when no data was generated.
    pub search_key: Option<String>,
    /// Number of records matching `search_key`.
    pub matches: usize,
    pub linear: StructureTiming,
    pub bst: StructureTiming,
    pub rbt: StructureTiming,
    pub hash_table: StructureTiming,
    pub multimap: StructureTiming,
    pub hash_collisions: usize,
}

impl SizeResult {
    /// All-zero row for a size that produced no data.
    fn empty(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }
}

/// Runs the configured benchmark sizes in order.
pub struct BenchRunner {
    config: BenchConfig,
    rng: StdRng,
}

impl BenchRunner {
    /// Creates a runner. Fails if the configuration is invalid.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { config, rng })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Measures every configured size.
    pub fn run(&mut self) -> Vec<SizeResult> {
        let sizes = self.config.sizes.clone();
        sizes.into_iter().map(|size| self.measure_size(size)).collect()
    }

    /// Generates `size` records and times every structure on them.
    pub fn measure_size(&mut self, size: usize) -> SizeResult {
        let data = generate_records(size, &mut self.rng);
        if data.is_empty() {
            info!("Size {}: no data generated, writing zero row", size);
            return SizeResult::empty(size);
        }

        let search_key = data[self.rng.random_range(0..data.len())].key().to_string();
        info!("Size {}: searching for {:?}", size, search_key);

        let iterations = self.config.search_iterations;

        let mut linear = LinearIndex::new();
        let linear_timing = time_structure(&mut linear, &data, &search_key, iterations);

        let mut bst = PlainBst::new();
        let bst_timing = time_structure(&mut bst, &data, &search_key, iterations);

        let mut rbt = RedBlackTree::with_capacity(size);
        let rbt_timing = time_structure(&mut rbt, &data, &search_key, iterations);
        debug!(
            "Size {}: red-black height {}, plain BST height {}",
            size,
            rbt.height(),
            bst.height()
        );

        let mut hash_table = ChainedHashTable::new(size);
        let hash_timing = time_structure(&mut hash_table, &data, &search_key, iterations);
        let hash_collisions = hash_table.collision_count();

        let mut multimap = OrderedMultiMap::new();
        let multimap_timing = time_structure(&mut multimap, &data, &search_key, iterations);

        let matches = rbt.count(&search_key);
        info!(
            "Size {}: linear {} ns, BST {} ns, RBT {} ns, hash {} ns ({} collisions), multimap {} ns",
            size,
            linear_timing.search_ns,
            bst_timing.search_ns,
            rbt_timing.search_ns,
            hash_timing.search_ns,
            hash_collisions,
            multimap_timing.search_ns
        );

        SizeResult {
            size,
            search_key: Some(search_key),
            matches,
            linear: linear_timing,
            bst: bst_timing,
            rbt: rbt_timing,
            hash_table: hash_timing,
            multimap: multimap_timing,
            hash_collisions,
        }
    }
}

/// Builds `index` from `data`, then averages `iterations` searches for `key`.
pub fn time_structure<I: SearchIndex>(
    index: &mut I,
    data: &[Record],
    key: &str,
    iterations: usize,
) -> StructureTiming {
    let build_ns = measure_ns(|| index.build(data));
    let index = &*index;
    let search_ns = average_ns(iterations, || index.search(key));
    debug!(
        "{}: build {} ns, search {} ns over {} iterations",
        index.name(),
        build_ns,
        search_ns,
        iterations
    );
    StructureTiming {
        build_ns,
        search_ns,
    }
}
