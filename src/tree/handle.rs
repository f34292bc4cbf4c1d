//! Borrowed node handles.

use std::fmt;
use std::ptr;

use super::{Color, NodeId, RedBlackTree, Side};

/// A handle to one live node of a [`RedBlackTree`].
///
/// A `NodeRef` always refers to an existing node: lookups that miss return
/// `None` instead of an empty handle, so every accessor here is infallible.
/// The handle borrows the tree, which therefore cannot be mutated while the
/// handle is alive. Use [`NodeRef::id`] to keep a reference across
/// mutations and [`RedBlackTree::node`] to resolve it again.
///
/// # Examples
///
/// ```rust
/// use rbkeys::RedBlackTree;
///
/// let tree: RedBlackTree<i32> = [2, 1, 3].into_iter().collect();
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.key(), &2);
/// assert_eq!(root.left().map(|node| *node.key()), Some(1));
/// assert_eq!(root.right().map(|node| *node.key()), Some(3));
/// assert!(root.parent().is_none());
/// ```
pub struct NodeRef<'a, K> {
    tree: &'a RedBlackTree<K>,
    id: NodeId,
}

impl<'a, K> NodeRef<'a, K> {
    #[inline]
    pub(crate) const fn new(tree: &'a RedBlackTree<K>, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Returns the stable id of this node.
    #[inline]
    #[must_use]
    pub const fn id(self) -> NodeId {
        self.id
    }

    /// Returns the key stored in this node.
    #[inline]
    #[must_use]
    pub fn key(self) -> &'a K {
        &self.tree.slot(self.id).key
    }

    /// Returns the color of this node.
    #[inline]
    #[must_use]
    pub fn color(self) -> Color {
        self.tree.slot(self.id).color
    }

    /// Returns the child on `side`, or `None` for a leaf-sentinel.
    #[inline]
    #[must_use]
    pub fn child(self, side: Side) -> Option<Self> {
        self.tree
            .child(self.id, side)
            .map(|id| Self::new(self.tree, id))
    }

    /// Returns the left child.
    #[inline]
    #[must_use]
    pub fn left(self) -> Option<Self> {
        self.child(Side::Left)
    }

    /// Returns the right child.
    #[inline]
    #[must_use]
    pub fn right(self) -> Option<Self> {
        self.child(Side::Right)
    }

    /// Returns the parent, or `None` for the root.
    #[inline]
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        self.tree
            .parent_of(self.id)
            .map(|id| Self::new(self.tree, id))
    }

    /// Returns `true` if this node is the root of its tree.
    #[inline]
    #[must_use]
    pub fn is_root(self) -> bool {
        self.tree.root == Some(self.id)
    }

    /// Returns the tree this node belongs to.
    #[inline]
    #[must_use]
    pub const fn tree(self) -> &'a RedBlackTree<K> {
        self.tree
    }
}

impl<K: Ord> NodeRef<'_, K> {
    /// Returns the node with the smallest key greater than this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [10, 5, 20, 15].into_iter().collect();
    /// let node = tree.search(&10).unwrap();
    /// assert_eq!(node.successor().map(|next| *next.key()), Some(15));
    /// assert!(tree.search(&20).unwrap().successor().is_none());
    /// ```
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        self.tree
            .successor_id(self.id)
            .map(|id| Self::new(self.tree, id))
    }

    /// Returns the node with the greatest key smaller than this one.
    #[must_use]
    pub fn predecessor(self) -> Option<Self> {
        self.tree
            .predecessor_id(self.id)
            .map(|id| Self::new(self.tree, id))
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

/// Handles are equal when they denote the same node of the same tree.
impl<K> PartialEq for NodeRef<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<K> Eq for NodeRef<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}
