//! Synthetic record generation.

use ordex_common::Record;
use rand::Rng;

/// Lower bound on the number of distinct keys per data set.
pub const MIN_DISTINCT_KEYS: usize = 10;

/// Generates `size` records drawing keys from a pool of `max(10, size / 5)`
/// random lowercase strings, so duplicate keys are common.
///
/// Keys are 3 to 10 characters from `a..=z`. `value1` is in `1..=1000` and
/// `value2` in `[0, 100)`.
pub fn generate_records<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Record> {
    if size == 0 {
        return Vec::new();
    }

    let pool = generate_key_pool(distinct_key_count(size), rng);

    (0..size)
        .map(|_| {
            let key = &pool[rng.random_range(0..pool.len())];
            Record::new(
                key.clone(),
                rng.random_range(1..=1000),
                rng.random_range(0.0..100.0),
            )
        })
        .collect()
}

/// Size of the key pool used for `size` records.
pub fn distinct_key_count(size: usize) -> usize {
    MIN_DISTINCT_KEYS.max(size / 5)
}

fn generate_key_pool<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(3..=10);
            (0..len)
                .map(|_| rng.random_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect()
}
