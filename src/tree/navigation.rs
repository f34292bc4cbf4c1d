//! Read-only lookup and order-statistics navigation.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::{NodeId, NodeRef, RedBlackTree, Side};

impl<K> RedBlackTree<K> {
    /// Returns the node holding the smallest key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.min().map(|node| *node.key()), Some(1));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|root| self.handle(self.extreme(root, Side::Left)))
    }

    /// Returns the node holding the greatest key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.max().map(|node| *node.key()), Some(3));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|root| self.handle(self.extreme(root, Side::Right)))
    }

    /// Descends from `from` along `side` until the slot is empty.
    pub(crate) fn extreme(&self, from: NodeId, side: Side) -> NodeId {
        let mut cursor = from;
        while let Some(next) = self.child(cursor, side) {
            cursor = next;
        }
        cursor
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Returns the node holding `key`, or `None` if the key is absent.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert("hello".to_string());
    ///
    /// assert_eq!(tree.search("hello").map(|node| node.key().as_str()), Some("hello"));
    /// assert!(tree.search("world").is_none());
    /// ```
    #[must_use]
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Some(current) = cursor {
            cursor = match key.cmp(self.slot(current).key.borrow()) {
                Ordering::Less => self.child(current, Side::Left),
                Ordering::Greater => self.child(current, Side::Right),
                Ordering::Equal => return Some(self.handle(current)),
            };
        }
        None
    }

    /// The in-order neighbour of `id` towards `side`.
    ///
    /// `Side::Right` yields the successor: the minimum of the right subtree
    /// when there is one, otherwise the first ancestor whose key is greater.
    /// `Side::Left` mirrors it for the predecessor.
    pub(crate) fn neighbour(&self, id: NodeId, side: Side) -> Option<NodeId> {
        if let Some(child) = self.child(id, side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let origin = &self.slot(id).key;
        let wanted = match side {
            Side::Left => Ordering::Less,
            Side::Right => Ordering::Greater,
        };
        let mut cursor = self.parent_of(id);
        while let Some(ancestor) = cursor {
            if self.slot(ancestor).key.cmp(origin) == wanted {
                return Some(ancestor);
            }
            cursor = self.parent_of(ancestor);
        }
        None
    }

    #[inline]
    pub(crate) fn successor_id(&self, id: NodeId) -> Option<NodeId> {
        self.neighbour(id, Side::Right)
    }

    #[inline]
    pub(crate) fn predecessor_id(&self, id: NodeId) -> Option<NodeId> {
        self.neighbour(id, Side::Left)
    }
}
