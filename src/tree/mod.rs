//! Red-black tree over an arena of node records.
//!
//! This module provides [`RedBlackTree`], an ordered container of unique
//! keys.
//!
//! # Overview
//!
//! - O(log N) insert
//! - O(log N) search
//! - O(log N) successor / predecessor
//! - O(log N) min/max
//! - O(1) len and `is_empty`
//!
//! # Internal Structure
//!
//! Nodes live in a `Vec` and refer to each other through [`NodeId`]
//! indices: `left` and `right` point down, `parent` points up. An absent
//! link is the leaf-sentinel, which counts as black. Every id is stamped
//! with the epoch of the arena that minted it; an empty arena takes a new
//! epoch on its next allocation.
//!
//! After every completed public operation the tree satisfies:
//! 1. In-order traversal yields strictly increasing keys
//! 2. The root is black and has no parent
//! 3. A red node never has a red child
//! 4. Every path from a node down to a leaf-sentinel has the same number
//!    of black nodes
//! 5. Every child records the node linking to it as its parent
//!
//! [`RedBlackTree::validate`] checks all of them.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

mod dot;
mod error;
mod fixup;
mod handle;
mod insertion;
mod navigation;
mod node;
mod rotation;
mod traversal;
mod validate;

pub use error::{InvariantViolation, TreeError};
pub use handle::NodeRef;
pub use node::{Color, NodeId, Side};
pub use traversal::{Ascending, Descending, Direction, Iter};

use node::Node;

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// An ordered container of unique keys backed by a red-black tree.
///
/// Keys must implement `Ord`. Inserting a key that is already present
/// leaves the tree untouched.
///
/// # Time Complexity
///
/// | Operation                   | Complexity |
/// |-----------------------------|------------|
/// | `new`                       | O(1)       |
/// | `insert`                    | O(log N)   |
/// | `search` / `contains`       | O(log N)   |
/// | `min` / `max`               | O(log N)   |
/// | `successor` / `predecessor` | O(log N)   |
/// | `len` / `is_empty`          | O(1)       |
/// | `validate`                  | O(N)       |
///
/// # Examples
///
/// ```rust
/// use rbkeys::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// assert!(tree.insert(3));
/// assert!(tree.insert(1));
/// assert!(tree.insert(2));
/// assert!(!tree.insert(2)); // duplicate
///
/// let keys: Vec<&i32> = tree.iter().collect();
/// assert_eq!(keys, vec![&1, &2, &3]);
/// ```
#[derive(Clone)]
pub struct RedBlackTree<K> {
    /// Arena of node records, indexed by `NodeId`
    nodes: Vec<Node<K>>,
    /// Root node of the tree
    root: Option<NodeId>,
    /// Stamp shared by every id minted since the arena was last empty
    epoch: u64,
}

static_assertions::assert_impl_all!(RedBlackTree<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(NodeId: Copy, Send, Sync);

impl<K> RedBlackTree<K> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            epoch: 0,
        }
    }

    /// Creates a new empty tree with room for `capacity` nodes.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
            epoch: 0,
        }
    }

    /// Returns the number of keys in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree contains no keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert("a");
    /// assert!(!tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a handle to the root node, if any.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| self.handle(id))
    }

    /// Resolves a raw [`NodeId`] into a handle bound to this tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] if `id` was not produced by this
    /// tree (or a clone of it), or the tree has been cleared since.
    pub fn node(&self, id: NodeId) -> Result<NodeRef<'_, K>, TreeError> {
        if id.epoch() == self.epoch && id.index() < self.nodes.len() {
            Ok(self.handle(id))
        } else {
            Err(TreeError::UnknownNode {
                index: id.index(),
                len: self.nodes.len(),
            })
        }
    }

    /// Removes every key, releasing all node records at once.
    ///
    /// Previously issued [`NodeId`]s become unknown to the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32> = (0..10).collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        tracing::debug!(released = self.nodes.len(), "clearing red-black tree");
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// Insertion keeps this below `2 * log2(len + 1)`.
    #[must_use]
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    fn subtree_height(&self, node: Option<NodeId>) -> usize {
        node.map_or(0, |id| {
            let slot = self.slot(id);
            1 + self
                .subtree_height(slot.left)
                .max(self.subtree_height(slot.right))
        })
    }

    /// Returns the number of black nodes on the leftmost root-to-leaf path.
    ///
    /// On a valid tree every such path has the same count.
    #[must_use]
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let slot = self.slot(id);
            if slot.color.is_black() {
                count += 1;
            }
            cursor = slot.left;
        }
        count
    }

    // =========================================================================
    // Arena Access
    // =========================================================================

    #[inline]
    pub(crate) const fn handle(&self, id: NodeId) -> NodeRef<'_, K> {
        NodeRef::new(self, id)
    }

    #[inline]
    pub(crate) fn slot(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.slot(id).child(side)
    }

    #[inline]
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        *self.slot_mut(id).child_mut(side) = child;
    }

    #[inline]
    pub(crate) fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).parent
    }

    /// Color of an optional node; absent nodes are black.
    #[inline]
    pub(crate) fn color_of(&self, node: Option<NodeId>) -> Color {
        node.map_or(Color::Black, |id| self.slot(id).color)
    }

    #[inline]
    pub(crate) fn paint(&mut self, id: NodeId, color: Color) {
        self.slot_mut(id).color = color;
    }

    /// Which side of its parent `id` hangs on, or `None` for the root.
    pub(crate) fn side_in_parent(&self, id: NodeId) -> Option<(NodeId, Side)> {
        self.parent_of(id).map(|parent| {
            if self.child(parent, Side::Left) == Some(id) {
                (parent, Side::Left)
            } else {
                (parent, Side::Right)
            }
        })
    }

    /// Pushes a fresh red leaf into the arena without linking it.
    pub(crate) fn allocate(&mut self, key: K, parent: Option<NodeId>) -> NodeId {
        if self.nodes.is_empty() {
            self.epoch = node::fresh_epoch();
        }
        let id = NodeId::new(self.nodes.len(), self.epoch);
        self.nodes.push(Node::new_red(key, parent));
        id
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Returns `true` if the tree contains `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let tree: RedBlackTree<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    /// assert!(tree.contains("a"));
    /// assert!(!tree.contains("c"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K> Default for RedBlackTree<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for RedBlackTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RedBlackTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: Ord> IntoIterator for &'a RedBlackTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K, Ascending>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Trees compare by their key sequence, not by their shape.
impl<K: Ord> PartialEq for RedBlackTree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Ord> Eq for RedBlackTree<K> {}

impl<K: Ord + Hash> Hash for RedBlackTree<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for key in self {
            key.hash(state);
        }
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for RedBlackTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord + fmt::Display> fmt::Display for RedBlackTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K> serde::Serialize for RedBlackTree<K>
where
    K: serde::Serialize + Ord,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for key in self {
            sequence.serialize_element(key)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct RedBlackTreeVisitor<K> {
    key_marker: std::marker::PhantomData<K>,
}

#[cfg(feature = "serde")]
impl<K> RedBlackTreeVisitor<K> {
    const fn new() -> Self {
        Self {
            key_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::de::Visitor<'de> for RedBlackTreeVisitor<K>
where
    K: serde::Deserialize<'de> + Ord,
{
    type Value = RedBlackTree<K>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of keys")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Every key goes through insert, so the result is always balanced.
        let mut tree = RedBlackTree::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(key) = access.next_element()? {
            tree.insert(key);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for RedBlackTree<K>
where
    K: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackTreeVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
