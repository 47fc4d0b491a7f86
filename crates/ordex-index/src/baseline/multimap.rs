//! Standard-library ordered multimap used as a reference point.

use crate::index::SearchIndex;
use ordex_common::Record;
use std::collections::BTreeMap;

/// `BTreeMap` from key to the records sharing it, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct OrderedMultiMap {
    map: BTreeMap<String, Vec<Record>>,
    len: usize,
}

impl OrderedMultiMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrowing lookup; avoids the clones `search` makes.
    pub fn get(&self, key: &str) -> &[Record] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl SearchIndex for OrderedMultiMap {
    fn name(&self) -> &'static str {
        "Multimap"
    }

    fn insert(&mut self, record: Record) {
        self.map
            .entry(record.key().to_string())
            .or_default()
            .push(record);
        self.len += 1;
    }

    fn search(&self, key: &str) -> Vec<Record> {
        self.get(key).to_vec()
    }

    fn build(&mut self, records: &[Record]) {
        self.map.clear();
        self.len = 0;
        for record in records {
            self.insert(record.clone());
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}
