//! Node records stored in the tree arena.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a red-black tree node.
///
/// Absent children are leaf-sentinels and always count as [`Color::Black`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    /// A red node. Its parent must be black.
    Red,
    /// A black node. Counted by the black-height.
    Black,
}

impl Color {
    /// Returns `true` for [`Color::Red`].
    #[inline]
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` for [`Color::Black`].
    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

// =============================================================================
// Side Definition
// =============================================================================

/// Which child slot of a node is meant.
///
/// The rotation primitives and the fix-up engine are written once in terms
/// of `Side` and mirrored through [`Side::opposite`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    /// The left child, holding smaller keys.
    Left,
    /// The right child, holding greater keys.
    Right,
}

impl Side {
    /// Returns the mirrored side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::Side;
    ///
    /// assert_eq!(Side::Left.opposite(), Side::Right);
    /// assert_eq!(Side::Right.opposite(), Side::Left);
    /// ```
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// =============================================================================
// NodeId Definition
// =============================================================================

/// Source of arena epochs. Zero is never handed out.
static NEXT_EPOCH: AtomicU64 = AtomicU64::new(1);

/// Draws an epoch no other arena in this process has used.
pub(crate) fn fresh_epoch() -> u64 {
    NEXT_EPOCH.fetch_add(1, Ordering::Relaxed)
}

/// Stable index of a node inside the arena of the tree that created it.
///
/// Ids are only handed out by insertion and stay valid until
/// [`RedBlackTree::clear`](super::RedBlackTree::clear). Each id also
/// carries the epoch of the arena it was minted in, so another tree (or
/// the same tree after `clear`) rejects it even when the index is in
/// range. A cloned tree keeps the same ids for the same keys.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    index: usize,
    epoch: u64,
}

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: usize, epoch: u64) -> Self {
        Self { index, epoch }
    }

    /// Returns the arena index of this node.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    #[inline]
    pub(crate) const fn epoch(self) -> u64 {
        self.epoch
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("NodeId").field(&self.index).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.index)
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node record.
///
/// `left` and `right` are owning links in the sense that the node is the
/// only one pointing down to them; `parent` is the back-reference used by
/// the fix-up engine and by successor/predecessor navigation.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K> Node<K> {
    /// Creates a new red leaf below `parent`.
    pub(crate) const fn new_red(key: K, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color: Color::Red,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) const fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_node_is_red_leaf() {
        let node = Node::new_red(7, Some(NodeId::new(3, 1)));
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.left, None);
        assert_eq!(node.right, None);
        assert_eq!(node.parent, Some(NodeId::new(3, 1)));
    }

    #[rstest]
    #[case(Side::Left)]
    #[case(Side::Right)]
    fn test_child_mut_targets_requested_slot(#[case] side: Side) {
        let mut node = Node::new_red(1, None);
        *node.child_mut(side) = Some(NodeId::new(9, 1));
        assert_eq!(node.child(side), Some(NodeId::new(9, 1)));
        assert_eq!(node.child(side.opposite()), None);
    }

    #[rstest]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(12, 1).to_string(), "#12");
    }

    #[rstest]
    fn test_node_id_debug_hides_epoch() {
        assert_eq!(format!("{:?}", NodeId::new(4, 77)), "NodeId(4)");
    }

    #[rstest]
    fn test_fresh_epochs_are_distinct_and_nonzero() {
        let first = fresh_epoch();
        let second = fresh_epoch();
        assert_ne!(first, 0);
        assert_ne!(first, second);
    }

    #[rstest]
    fn test_color_predicates() {
        assert!(Color::Red.is_red());
        assert!(!Color::Red.is_black());
        assert!(Color::Black.is_black());
    }
}
