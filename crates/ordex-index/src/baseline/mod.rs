//! Baseline search structures the red-black tree is measured against.

mod bst;
mod hash;
mod linear;
mod multimap;

pub use bst::PlainBst;
pub use hash::{next_prime_capacity, ChainedHashTable};
pub use linear::LinearIndex;
pub use multimap::OrderedMultiMap;
