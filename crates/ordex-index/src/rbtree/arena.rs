//! Arena storage for red-black tree nodes.

use super::node::{Node, NodeId};
use ordex_common::Record;

/// Contiguous storage for tree nodes.
/// Nodes are appended sequentially and never move or get freed individually,
/// so a `NodeId` stays valid until the arena is cleared.
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Creates an empty arena.
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an empty arena with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocates a new red, unlinked node and returns its id.
    #[inline]
    pub(crate) fn allocate(&mut self, record: Record) -> NodeId {
        if self.nodes.len() >= u32::MAX as usize {
            panic!("NodeArena out of node ids");
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(record));
        id
    }

    #[inline(always)]
    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Number of allocated nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Releases every node. Each node is dropped exactly once.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Ensures room for `additional` more nodes.
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }
}
