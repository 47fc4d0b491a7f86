//! Hash table with separate chaining.

use crate::index::SearchIndex;
use ordex_common::Record;
use xxhash_rust::xxh3::xxh3_64;

/// Hash table whose buckets are vectors of records.
///
/// The bucket count is a prime chosen from the expected number of records
/// and stays fixed until the next `build`. A collision is counted when a
/// record lands in a non-empty bucket that holds no record with its key.
pub struct ChainedHashTable {
    buckets: Vec<Vec<Record>>,
    len: usize,
    collisions: usize,
}

impl ChainedHashTable {
    /// Creates a table sized for `expected_records`.
    pub fn new(expected_records: usize) -> Self {
        let bucket_count = next_prime_capacity(expected_records.max(1));
        Self {
            buckets: vec![Vec::new(); bucket_count],
            len: 0,
            collisions: 0,
        }
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Collisions observed since the table was created or rebuilt.
    pub fn collision_count(&self) -> usize {
        self.collisions
    }

    #[inline]
    fn bucket_index(&self, key: &str) -> usize {
        (xxh3_64(key.as_bytes()) % self.buckets.len() as u64) as usize
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SearchIndex for ChainedHashTable {
    fn name(&self) -> &'static str {
        "HashTable"
    }

    fn insert(&mut self, record: Record) {
        let idx = self.bucket_index(record.key());
        let bucket = &mut self.buckets[idx];
        if !bucket.is_empty() && !bucket.iter().any(|r| r.key() == record.key()) {
            self.collisions += 1;
        }
        bucket.push(record);
        self.len += 1;
    }

    fn search(&self, key: &str) -> Vec<Record> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .filter(|r| r.key() == key)
            .cloned()
            .collect()
    }

    fn build(&mut self, records: &[Record]) {
        *self = ChainedHashTable::new(records.len());
        for record in records {
            self.insert(record.clone());
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Smallest odd prime at or above 1.5 * `n`; 2 for `n <= 2`.
pub fn next_prime_capacity(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }
    let mut candidate = n + n / 2;
    if candidate % 2 == 0 {
        candidate += 1;
    }
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        let primes: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(!is_prime(25));
        assert!(is_prime(7919));
    }

    #[test]
    fn test_next_prime_capacity() {
        assert_eq!(next_prime_capacity(0), 2);
        assert_eq!(next_prime_capacity(2), 2);
        assert_eq!(next_prime_capacity(3), 5);
        assert_eq!(next_prime_capacity(10), 17);
        assert_eq!(next_prime_capacity(100), 151);
    }

    #[test]
    fn test_hash_table_search_with_duplicates() {
        let mut table = ChainedHashTable::new(8);
        table.build(&[
            Record::new("x", 1, 0.0),
            Record::new("y", 2, 0.0),
            Record::new("x", 3, 0.0),
        ]);
        let x: Vec<i32> = table.search("x").iter().map(|r| r.value1()).collect();
        assert_eq!(x, vec![1, 3]);
        assert_eq!(table.search("y").len(), 1);
        assert!(table.search("z").is_empty());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_single_bucket_counts_collisions() {
        let mut table = ChainedHashTable::new(1);
        assert_eq!(table.bucket_count(), 2);
        for (i, key) in ["a", "b", "c", "d", "a"].iter().enumerate() {
            table.insert(Record::new(*key, i as i32, 0.0));
        }
        // Four distinct keys in two buckets: at least two collide, and the
        // repeated "a" never counts.
        assert!(table.collision_count() >= 2);
        assert!(table.collision_count() <= 3);
        assert_eq!(table.search("a").len(), 2);
    }

    #[test]
    fn test_duplicates_are_not_collisions() {
        let mut table = ChainedHashTable::new(100);
        for i in 0..10 {
            table.insert(Record::new("same", i, 0.0));
        }
        assert_eq!(table.collision_count(), 0);
    }

    #[test]
    fn test_build_resets_collisions() {
        let mut table = ChainedHashTable::new(1);
        for i in 0..20 {
            table.insert(Record::new(format!("k{}", i), i, 0.0));
        }
        assert!(table.collision_count() > 0);
        table.build(&[]);
        assert_eq!(table.collision_count(), 0);
        assert_eq!(table.len(), 0);
    }
}
