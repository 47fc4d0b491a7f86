//! In-order iteration over a red-black tree.

use super::node::NodeId;
use super::tree::RedBlackTree;
use ordex_common::Record;
use std::iter::FusedIterator;

/// Borrowing in-order iterator. Walks parent links, so it needs no stack.
pub struct Iter<'a> {
    tree: &'a RedBlackTree,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(tree: &'a RedBlackTree) -> Self {
        Self {
            tree,
            next: tree.root.map(|root| tree.leftmost(root)),
            remaining: tree.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.successor(id);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&self.tree.arena.get(id).record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a RedBlackTree {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
