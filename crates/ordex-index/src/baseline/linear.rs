//! Unordered vector with full-scan lookup.

use crate::index::SearchIndex;
use ordex_common::Record;

/// Records in arrival order. Every search is O(N).
#[derive(Debug, Default, Clone)]
pub struct LinearIndex {
    records: Vec<Record>,
}

impl LinearIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchIndex for LinearIndex {
    fn name(&self) -> &'static str {
        "Linear"
    }

    fn insert(&mut self, record: Record) {
        self.records.push(record);
    }

    fn search(&self, key: &str) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.key() == key)
            .cloned()
            .collect()
    }

    fn build(&mut self, records: &[Record]) {
        self.records = records.to_vec();
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_search_keeps_order() {
        let mut index = LinearIndex::new();
        index.build(&[
            Record::new("a", 1, 0.0),
            Record::new("b", 2, 0.0),
            Record::new("a", 3, 0.0),
        ]);
        let found: Vec<i32> = index.search("a").iter().map(|r| r.value1()).collect();
        assert_eq!(found, vec![1, 3]);
        assert!(index.search("c").is_empty());
        assert_eq!(index.len(), 3);
    }
}
