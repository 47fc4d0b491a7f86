//! Red-black tree engine: insertion, fix-up, rotations and lookup.

use super::arena::NodeArena;
use super::iter::Iter;
use super::node::{Color, NodeId, Side};
use log::trace;
use ordex_common::Record;

/// Ordered index over records keyed by string, balanced as a red-black tree.
///
/// Duplicate keys are allowed. A new record descends left only when its key
/// is strictly smaller than the node's key, so equal keys are kept in
/// insertion order within the in-order sequence.
///
/// All nodes live in one arena owned by the tree. Links are arena indices,
/// so rotations rewrite indices instead of pointers.
pub struct RedBlackTree {
    /// Node storage. Every allocated node is reachable from `root`.
    pub(super) arena: NodeArena,
    /// Root node, `None` when the tree is empty.
    pub(super) root: Option<NodeId>,
}

impl RedBlackTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
        }
    }

    /// Creates an empty tree with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            root: None,
        }
    }

    /// Number of records stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the tree holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Color of the root node, `None` when empty.
    pub fn root_color(&self) -> Option<Color> {
        self.root.map(|root| self.arena.get(root).color)
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts a record. Never fails and never rejects a duplicate key.
    pub fn insert(&mut self, record: Record) {
        // Attachment point: parent and the side the new node goes on.
        let mut slot: Option<(NodeId, Side)> = None;
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = self.arena.get(id);
            let side = if record.key() < node.record.key() {
                Side::Left
            } else {
                Side::Right
            };
            slot = Some((id, side));
            cursor = node.child(side);
        }

        let id = self.arena.allocate(record);
        match slot {
            None => self.root = Some(id),
            Some((parent, side)) => {
                self.arena.get_mut(id).parent = Some(parent);
                self.arena.get_mut(parent).set_child(side, Some(id));
            }
        }

        self.insert_fixup(id);
    }

    /// Restores the red-black invariants after `node` was inserted red.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while let Some(mut parent) = self.parent(node) {
            if !self.is_red(Some(parent)) {
                break;
            }
            // Red parent at the root: the final recolor below handles it.
            let Some(grandparent) = self.parent(parent) else {
                break;
            };

            let side = self.side_of(parent, grandparent);
            let uncle = self.arena.get(grandparent).child(side.opposite());

            if self.is_red(uncle) {
                // Red uncle: push the red up to the grandparent.
                self.set_color(parent, Color::Black);
                if let Some(uncle) = uncle {
                    self.set_color(uncle, Color::Black);
                }
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.arena.get(parent).child(side.opposite()) == Some(node) {
                // Inner child: straighten the zig-zag first.
                node = parent;
                self.rotate(node, side);
                parent = match self.parent(node) {
                    Some(parent) => parent,
                    None => break,
                };
            }

            // Outer child: recolor and rotate the grandparent away.
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Rotates the subtree rooted at `x` towards `dir`.
    ///
    /// The child of `x` on the opposite side becomes the subtree head and `x`
    /// becomes its `dir` child. Colors are untouched and in-order sequence is
    /// preserved. The opposite child must exist.
    pub(super) fn rotate(&mut self, x: NodeId, dir: Side) {
        let Some(y) = self.arena.get(x).child(dir.opposite()) else {
            debug_assert!(
                false,
                "rotation at {:?} without a {:?} child",
                x,
                dir.opposite()
            );
            return;
        };

        let inner = self.arena.get(y).child(dir);
        self.arena.get_mut(x).set_child(dir.opposite(), inner);
        if let Some(inner) = inner {
            self.arena.get_mut(inner).parent = Some(x);
        }

        let x_parent = self.parent(x);
        self.arena.get_mut(y).parent = x_parent;
        match x_parent {
            None => self.root = Some(y),
            Some(p) => {
                let side = self.side_of(x, p);
                self.arena.get_mut(p).set_child(side, Some(y));
            }
        }

        self.arena.get_mut(y).set_child(dir, Some(x));
        self.arena.get_mut(x).parent = Some(y);
    }

    #[inline(always)]
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).parent
    }

    /// Absent nodes count as black.
    #[inline(always)]
    fn is_red(&self, id: Option<NodeId>) -> bool {
        matches!(id, Some(id) if self.arena.get(id).color == Color::Red)
    }

    #[inline(always)]
    fn set_color(&mut self, id: NodeId, color: Color) {
        self.arena.get_mut(id).color = color;
    }

    /// Which side of `parent` holds `child`.
    #[inline(always)]
    fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        if self.arena.get(parent).left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns clones of every record whose key equals `key`, in in-order
    /// (insertion) order. Empty when nothing matches.
    ///
    /// Rotations can move an earlier duplicate into the left subtree of a
    /// later one, so the walk starts at the first node not less than `key`
    /// and follows in-order successors while the key still matches.
    pub fn search(&self, key: &str) -> Vec<Record> {
        let mut results = Vec::new();
        let mut cursor = self.lower_bound(key);
        while let Some(id) = cursor {
            let record = &self.arena.get(id).record;
            if record.key() != key {
                break;
            }
            results.push(record.clone());
            cursor = self.successor(id);
        }
        results
    }

    /// Number of records whose key equals `key`.
    pub fn count(&self, key: &str) -> usize {
        let mut count = 0;
        let mut cursor = self.lower_bound(key);
        while let Some(id) = cursor {
            if self.arena.get(id).record.key() != key {
                break;
            }
            count += 1;
            cursor = self.successor(id);
        }
        count
    }

    /// Returns true if at least one record has this key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lower_bound(key)
            .is_some_and(|id| self.arena.get(id).record.key() == key)
    }

    /// First node in in-order sequence whose key is not less than `key`.
    fn lower_bound(&self, key: &str) -> Option<NodeId> {
        let mut candidate = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = self.arena.get(id);
            if node.record.key() < key {
                cursor = node.right;
            } else {
                candidate = Some(id);
                cursor = node.left;
            }
        }
        candidate
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(super) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena.get(id).left {
            id = left;
        }
        id
    }

    /// In-order successor of `id`, climbing parent links when needed.
    pub(super) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.arena.get(id).right {
            return Some(self.leftmost(right));
        }
        let mut child = id;
        let mut parent = self.parent(child);
        while let Some(p) = parent {
            if self.arena.get(p).left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.parent(p);
        }
        None
    }

    /// In-order iterator over all records.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Number of nodes on the longest root-to-leaf path. Zero when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.arena.get(id);
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    // =========================================================================
    // Bulk load / teardown
    // =========================================================================

    /// Discards the current tree and inserts a clone of every record in order.
    pub fn build(&mut self, records: &[Record]) {
        self.clear();
        self.arena.reserve(records.len());
        for record in records {
            self.insert(record.clone());
        }
        trace!("Rebuilt red-black tree with {} records", records.len());
    }

    /// Releases every node, leaving an empty tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
    }
}

impl Default for RedBlackTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Record> for RedBlackTree {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<Record> for RedBlackTree {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut tree = RedBlackTree::new();
        tree.extend(iter);
        tree
    }
}
