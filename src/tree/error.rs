//! Error types for the red-black tree.
//!
//! Duplicate insertions and lookup misses are not errors: the first is a
//! silent no-op reported through the `bool` returned by
//! [`RedBlackTree::insert`](super::RedBlackTree::insert), the second is a
//! `None`. The types here cover handles that do not belong to a tree and
//! the report produced by [`RedBlackTree::validate`](super::RedBlackTree::validate).

use thiserror::Error;

use super::NodeId;

/// Errors returned when resolving a raw [`NodeId`] against a tree.
///
/// # Examples
///
/// ```rust
/// use rbkeys::{RedBlackTree, TreeError};
///
/// let mut other = RedBlackTree::new();
/// other.insert(1);
/// other.insert(2);
/// let foreign = other.search(&2).unwrap().id();
///
/// let tree: RedBlackTree<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(
///     tree.node(foreign).unwrap_err(),
///     TreeError::UnknownNode { index: 1, len: 3 }
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The id was not minted by this tree, or the tree was cleared since.
    #[error("node index {index} is not part of this tree ({len} nodes)")]
    UnknownNode {
        /// The rejected arena index.
        index: usize,
        /// The number of nodes currently stored.
        len: usize,
    },
}

/// A broken structural or coloring invariant found by
/// [`RedBlackTree::validate`](super::RedBlackTree::validate).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root is red after a completed operation.
    #[error("root {node} is red")]
    RedRoot {
        /// The root node.
        node: NodeId,
    },
    /// The root has a parent link.
    #[error("root {node} has parent {parent}")]
    RootHasParent {
        /// The root node.
        node: NodeId,
        /// The unexpected parent.
        parent: NodeId,
    },
    /// In-order traversal did not yield strictly increasing keys.
    #[error("key of {node} is not greater than the key of its in-order predecessor {previous}")]
    OutOfOrder {
        /// The node whose key is out of place.
        node: NodeId,
        /// The node visited just before it.
        previous: NodeId,
    },
    /// A red node has a red child.
    #[error("red node {parent} has red child {child}")]
    RedRedEdge {
        /// The red parent.
        parent: NodeId,
        /// The red child.
        child: NodeId,
    },
    /// The two subtrees of a node have different black-heights.
    #[error("black-height differs below {node}: left {left}, right {right}")]
    BlackHeightMismatch {
        /// The node whose subtrees disagree.
        node: NodeId,
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// A child does not point back at the node that links to it.
    #[error("child {child} of {node} records parent {recorded:?}")]
    ParentMismatch {
        /// The node holding the downward link.
        node: NodeId,
        /// The child reached through that link.
        child: NodeId,
        /// The parent the child records instead.
        recorded: Option<NodeId>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_unknown_node_display() {
        let error = TreeError::UnknownNode { index: 4, len: 2 };
        assert_eq!(
            error.to_string(),
            "node index 4 is not part of this tree (2 nodes)"
        );
    }

    #[rstest]
    fn test_red_red_edge_display() {
        let error = InvariantViolation::RedRedEdge {
            parent: NodeId::new(0, 1),
            child: NodeId::new(1, 1),
        };
        assert_eq!(error.to_string(), "red node #0 has red child #1");
    }

    #[rstest]
    fn test_violation_is_std_error() {
        let error = InvariantViolation::RedRoot {
            node: NodeId::new(0, 1),
        };
        let _: &dyn std::error::Error = &error;
    }
}
