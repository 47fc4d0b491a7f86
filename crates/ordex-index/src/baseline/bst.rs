//! Unbalanced binary search tree.

use crate::index::SearchIndex;
use ordex_common::Record;

struct BstNode {
    record: Record,
    left: Option<u32>,
    right: Option<u32>,
}

/// Plain binary search tree with the same duplicate rule as the red-black
/// tree: strictly smaller keys go left, everything else goes right.
///
/// Nothing ever rotates, so every duplicate of a key sits in the right
/// subtree of the first one and a search can continue rightward after a
/// match. Sorted input degenerates into a chain.
#[derive(Default)]
pub struct PlainBst {
    nodes: Vec<BstNode>,
    root: Option<u32>,
}

impl PlainBst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(u32, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[id as usize];
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        height
    }
}

impl SearchIndex for PlainBst {
    fn name(&self) -> &'static str {
        "BST"
    }

    fn insert(&mut self, record: Record) {
        let id = self.nodes.len() as u32;
        let mut cursor = self.root;
        let mut slot: Option<(u32, bool)> = None;

        while let Some(current) = cursor {
            let node = &self.nodes[current as usize];
            let go_left = record.key() < node.record.key();
            slot = Some((current, go_left));
            cursor = if go_left { node.left } else { node.right };
        }

        self.nodes.push(BstNode {
            record,
            left: None,
            right: None,
        });
        match slot {
            None => self.root = Some(id),
            Some((parent, true)) => self.nodes[parent as usize].left = Some(id),
            Some((parent, false)) => self.nodes[parent as usize].right = Some(id),
        }
    }

    fn search(&self, key: &str) -> Vec<Record> {
        let mut results = Vec::new();
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id as usize];
            let node_key = node.record.key();
            if key == node_key {
                results.push(node.record.clone());
                cursor = node.right;
            } else if key < node_key {
                cursor = node.left;
            } else {
                cursor = node.right;
            }
        }
        results
    }

    fn build(&mut self, records: &[Record]) {
        self.nodes.clear();
        self.root = None;
        self.nodes.reserve(records.len());
        for record in records {
            self.insert(record.clone());
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
