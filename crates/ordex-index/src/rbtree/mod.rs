//! Red-black tree ordered index.
//!
//! ## Layout
//!
//! ```text
//! RedBlackTree
//!   root: Option<NodeId> ──┐
//!   arena: NodeArena       │
//!     [0] Node { record, color, parent, left, right }
//!     [1] Node ...      <──┘ links are arena indices
//! ```
//!
//! Nodes are appended to the arena on insert and only released all at once
//! (`clear`, `build`, drop). Traversals are iterative and use parent links.
//!
//! ## Duplicate keys
//!
//! Insertion descends left only on a strictly smaller key, so a duplicate is
//! placed after every existing equal key in in-order sequence. `search`
//! returns matches in that order, which is insertion order.

mod arena;
mod iter;
mod node;
mod tree;
mod validate;

pub use iter::Iter;
pub use node::Color;
pub use tree::RedBlackTree;
pub use validate::TreeStats;
