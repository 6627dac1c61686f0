//! A self-balancing [AVL tree] mapping unique `u64` keys to arbitrary values.
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use keyed_avl::{AvlTree, Order, TreeError};
//!
//! let mut t = AvlTree::new();
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     t.insert(key, key.to_string()).unwrap();
//! }
//!
//! // Keys are unique.
//! let err = t.insert(50, "again".to_string()).unwrap_err();
//! assert_eq!(err.kind(), TreeError::KeyExists);
//!
//! // Removing a key hands the value back to the caller.
//! assert_eq!(t.remove(50).unwrap(), "50");
//! assert_eq!(t.remove(50), Err(TreeError::KeyNotFound));
//!
//! // Walk the tree, stopping early.
//! let mut keys = vec![];
//! let _ = t.traverse(Order::InOrder, |v| {
//!     keys.push(v.key());
//!     if keys.len() == 3 {
//!         return ControlFlow::Break(());
//!     }
//!     ControlFlow::Continue(())
//! });
//! assert_eq!(keys, [20, 30, 40]);
//! ```
//!
//! Traversals are available in pre-order, in-order, post-order, breadth-first
//! and Euler (three visits per node) orders, either by driving a visitor with
//! [`AvlTree::traverse()`] or lazily with [`AvlTree::visits()`].
//!
//! Enabling the `tracing` feature emits [`tracing`] events for insertions,
//! removals and rotations.
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree
//! [`tracing`]: https://docs.rs/tracing

mod dot;
mod error;
mod iter;
mod node;
mod traverse;
mod tree;
mod validate;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use iter::*;
pub use traverse::{Order, Step, Traverse, Visit};
pub use tree::*;
