//! In-memory ordered index for ordex.
//!
//! This crate provides:
//! - `RedBlackTree`, an arena-backed red-black tree keyed by string that
//!   keeps duplicate keys in insertion order
//! - baseline structures (linear scan, plain BST, chained hash table,
//!   `BTreeMap` multimap) for search-time comparison
//! - the `SearchIndex` trait they all implement

mod baseline;
mod index;
mod rbtree;

pub use baseline::{next_prime_capacity, ChainedHashTable, LinearIndex, OrderedMultiMap, PlainBst};
pub use index::SearchIndex;
pub use rbtree::{Color, Iter, RedBlackTree, TreeStats};
