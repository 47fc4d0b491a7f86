//! Structural invariant checking for the red-black tree.

use super::node::{Color, NodeId, Side};
use super::tree::RedBlackTree;
use ordex_common::{OrdexError, Result};

/// Shape summary returned by a successful invariant check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of reachable nodes.
    pub len: usize,
    /// Nodes on the longest root-to-leaf path.
    pub height: usize,
    /// Black nodes on every root-to-absent-child path (absent child not counted).
    pub black_height: usize,
}

fn violation(msg: String) -> OrdexError {
    OrdexError::InvariantViolation(msg)
}

impl RedBlackTree {
    /// Verifies the red-black invariants, link consistency and key order.
    ///
    /// Checks that the root is black and has no parent, that no red node has
    /// a red child, that every path to an absent child carries the same
    /// number of black nodes, that child/parent links agree, that every
    /// arena node is reachable, and that in-order keys never decrease.
    pub fn check_invariants(&self) -> Result<TreeStats> {
        let Some(root) = self.root else {
            if self.arena.len() != 0 {
                return Err(violation(format!(
                    "empty tree holds {} unreachable nodes",
                    self.arena.len()
                )));
            }
            return Ok(TreeStats::default());
        };

        let root_node = self.arena.get(root);
        if root_node.color != Color::Black {
            return Err(violation("root is red".to_string()));
        }
        if root_node.parent.is_some() {
            return Err(violation("root has a parent link".to_string()));
        }

        let mut black_height: Option<usize> = None;
        let mut height = 0;
        let mut visited = 0;
        // (node, depth, black nodes above it)
        let mut stack: Vec<(NodeId, usize, usize)> = vec![(root, 1, 0)];

        while let Some((id, depth, blacks_above)) = stack.pop() {
            visited += 1;
            if visited > self.arena.len() {
                return Err(violation("node reachable through more than one path".to_string()));
            }

            let node = self.arena.get(id);
            height = height.max(depth);
            let blacks = blacks_above + usize::from(node.color == Color::Black);

            for side in [Side::Left, Side::Right] {
                match node.child(side) {
                    Some(child) => {
                        let child_node = self.arena.get(child);
                        if child_node.parent != Some(id) {
                            return Err(violation(format!(
                                "{:?} child of {:?} does not link back to it",
                                side, id
                            )));
                        }
                        if node.color == Color::Red && child_node.color == Color::Red {
                            return Err(violation(format!(
                                "red node {:?} has red {:?} child",
                                id, side
                            )));
                        }
                        stack.push((child, depth + 1, blacks));
                    }
                    None => match black_height {
                        None => black_height = Some(blacks),
                        Some(expected) if expected != blacks => {
                            return Err(violation(format!(
                                "black height {} below {:?}, expected {}",
                                blacks, id, expected
                            )));
                        }
                        Some(_) => {}
                    },
                }
            }
        }

        if visited != self.arena.len() {
            return Err(violation(format!(
                "{} of {} nodes unreachable from root",
                self.arena.len() - visited,
                self.arena.len()
            )));
        }

        let mut previous: Option<&str> = None;
        for record in self.iter() {
            if let Some(prev) = previous {
                if prev > record.key() {
                    return Err(violation(format!(
                        "in-order keys out of order: {:?} before {:?}",
                        prev,
                        record.key()
                    )));
                }
            }
            previous = Some(record.key());
        }

        Ok(TreeStats {
            len: visited,
            height,
            black_height: black_height.unwrap_or(0),
        })
    }

    /// Black nodes on every root-to-absent-child path, or an error if the
    /// tree is not a valid red-black tree.
    pub fn black_height(&self) -> Result<usize> {
        self.check_invariants().map(|stats| stats.black_height)
    }
}
