//! Common interface shared by the red-black tree and the baseline structures.

use crate::rbtree::RedBlackTree;
use ordex_common::Record;

/// A multi-valued index from string key to records.
///
/// Mutation takes `&mut self`; implementations carry no internal locking.
pub trait SearchIndex {
    /// Short label used in logs and reports.
    fn name(&self) -> &'static str;

    /// Adds one record. Duplicate keys are kept.
    fn insert(&mut self, record: Record);

    /// Returns clones of every record whose key equals `key`.
    fn search(&self, key: &str) -> Vec<Record>;

    /// Discards current contents and loads `records` in order.
    fn build(&mut self, records: &[Record]);

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SearchIndex for RedBlackTree {
    fn name(&self) -> &'static str {
        "RBT"
    }

    fn insert(&mut self, record: Record) {
        RedBlackTree::insert(self, record)
    }

    fn search(&self, key: &str) -> Vec<Record> {
        RedBlackTree::search(self, key)
    }

    fn build(&mut self, records: &[Record]) {
        RedBlackTree::build(self, records)
    }

    fn len(&self) -> usize {
        RedBlackTree::len(self)
    }
}
