//! Ordered insertion.

use std::cmp::Ordering;

use super::{NodeId, RedBlackTree, Side};

impl<K: Ord> RedBlackTree<K> {
    /// Inserts `key` into the tree.
    ///
    /// Returns `true` if a new node was added and `false` if the key was
    /// already present, in which case the tree is left untouched.
    ///
    /// The new key is attached as a red leaf and the red-black invariants
    /// are restored by recoloring and at most two rotations.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::{Color, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(10);
    /// tree.insert(20);
    /// tree.insert(30);
    ///
    /// // The right-right shape is rotated around 10.
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.key(), &20);
    /// assert_eq!(root.color(), Color::Black);
    /// assert_eq!(root.left().unwrap().key(), &10);
    /// assert_eq!(root.right().unwrap().key(), &30);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let Some((parent, side)) = self.insertion_point(&key) else {
            tracing::trace!(len = self.len(), "duplicate key ignored");
            return false;
        };

        let inserted = self.allocate(key, parent);
        match parent {
            None => self.root = Some(inserted),
            Some(parent) => self.set_child(parent, side, Some(inserted)),
        }

        self.rebalance_after_insert(inserted);
        true
    }

    /// Finds the empty slot where `key` belongs.
    ///
    /// Returns `None` if the key is already present, otherwise the last
    /// visited node (absent for an empty tree) and the side to attach on.
    fn insertion_point(&self, key: &K) -> Option<(Option<NodeId>, Side)> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;

        while let Some(current) = cursor {
            side = match key.cmp(&self.slot(current).key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return None,
            };
            parent = Some(current);
            cursor = self.child(current, side);
        }

        Some((parent, side))
    }
}
