//! A self-balancing binary search tree of unique ordered keys.
//!
//! The heights of the two child subtrees of any node differ by at most one. Insertions rebalance
//! the lowest unbalanced ancestor and deletions rebalance every ancestor on the path back to the
//! root.

#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod avl_tree;

pub use crate::avl_tree::AvlTree;
