//! # rbkeys
//!
//! An ordered key container backed by a red-black tree.
//!
//! ## Overview
//!
//! [`RedBlackTree`] stores unique, totally-ordered keys in an arena of node
//! records. Children and parents are linked through [`NodeId`] indices, so
//! the fix-up engine can walk upward in O(1) per step without aliasing
//! hazards.
//!
//! - **Insertion** with red-black rebalancing (recolor and rotate)
//! - **Lookup** by key, returning a borrowed [`NodeRef`] handle
//! - **Navigation** to the successor and predecessor of any node
//! - **Traversal** in prefix, infix, postfix and breadth-first order
//! - **Export** of the tree shape as a Graphviz `dot` document
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as an ascending key sequence
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rbkeys::prelude::*;
//!
//! let mut tree = RedBlackTree::new();
//! tree.insert(10);
//! tree.insert(20);
//! tree.insert(30);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.key(), &20);
//! assert_eq!(root.color(), Color::Black);
//! assert!(tree.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use rbkeys::prelude::*;
/// ```
pub mod prelude {
    pub use crate::tree::*;
}

pub mod tree;

pub use tree::{
    Ascending, Color, Descending, Direction, InvariantViolation, Iter, NodeId, NodeRef,
    RedBlackTree, Side, TreeError,
};
