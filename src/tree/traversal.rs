//! Visitors and ordered iteration.
//!
//! The visitor methods call a closure once per node; whatever context the
//! caller needs is captured by the closure. Depth-first walks recurse on
//! the tree (whose height is logarithmic), breadth-first uses a FIFO
//! queue, and [`RedBlackTree::iterative_depth_infix`] replaces recursion
//! with an explicit stack.
//!
//! [`Iter`] steps through keys with successor or predecessor navigation,
//! selected at compile time by its [`Direction`] parameter.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use smallvec::SmallVec;

use super::{NodeId, NodeRef, RedBlackTree};

/// Inline capacity of the explicit traversal stack. A red-black tree with
/// fewer than 2^32 nodes is never deeper than this.
const STACK_INLINE: usize = 64;

#[derive(Clone, Copy)]
enum DepthOrder {
    Prefix,
    Infix,
    Postfix,
}

// =============================================================================
// Visitors
// =============================================================================

impl<K> RedBlackTree<K> {
    /// Visits every node, each parent before its subtrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [2, 1, 3].into_iter().collect();
    /// let mut keys = Vec::new();
    /// tree.depth_prefix(|node| keys.push(*node.key()));
    /// assert_eq!(keys, vec![2, 1, 3]);
    /// ```
    pub fn depth_prefix<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a, K>),
    {
        self.walk_depth(self.root, DepthOrder::Prefix, &mut visit);
    }

    /// Visits every node in ascending key order.
    pub fn depth_infix<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a, K>),
    {
        self.walk_depth(self.root, DepthOrder::Infix, &mut visit);
    }

    /// Visits every node after both of its subtrees.
    ///
    /// This is the order in which a pointer-based tree would have to free
    /// its nodes.
    pub fn depth_postfix<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a, K>),
    {
        self.walk_depth(self.root, DepthOrder::Postfix, &mut visit);
    }

    fn walk_depth<'a, F>(&'a self, node: Option<NodeId>, order: DepthOrder, visit: &mut F)
    where
        F: FnMut(NodeRef<'a, K>),
    {
        let Some(id) = node else {
            return;
        };
        let slot = self.slot(id);
        if let DepthOrder::Prefix = order {
            visit(self.handle(id));
        }
        self.walk_depth(slot.left, order, visit);
        if let DepthOrder::Infix = order {
            visit(self.handle(id));
        }
        self.walk_depth(slot.right, order, visit);
        if let DepthOrder::Postfix = order {
            visit(self.handle(id));
        }
    }

    /// Visits every node level by level, left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (1..=7).collect();
    /// let mut keys = Vec::new();
    /// tree.breadth_first(|node| keys.push(*node.key()));
    /// assert_eq!(keys[0], *tree.root().unwrap().key());
    /// assert_eq!(keys.len(), 7);
    /// ```
    pub fn breadth_first<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a, K>),
    {
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        queue.extend(self.root);
        while let Some(id) = queue.pop_front() {
            let slot = self.slot(id);
            queue.extend(slot.left);
            queue.extend(slot.right);
            visit(self.handle(id));
        }
    }

    /// Visits every node in ascending key order without recursion.
    pub fn iterative_depth_infix<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a, K>),
    {
        let mut pending: SmallVec<[NodeId; STACK_INLINE]> = SmallVec::new();
        let mut cursor = self.root;

        loop {
            while let Some(id) = cursor {
                pending.push(id);
                cursor = self.slot(id).left;
            }
            let Some(id) = pending.pop() else {
                break;
            };
            visit(self.handle(id));
            cursor = self.slot(id).right;
        }
    }
}

// =============================================================================
// Direction Definition
// =============================================================================

/// A traversal direction for [`Iter`].
///
/// A direction names where iteration starts and how it advances.
pub trait Direction {
    /// The first node in this direction.
    fn begin<K: Ord>(tree: &RedBlackTree<K>) -> Option<NodeRef<'_, K>>;

    /// The node following `node` in this direction.
    fn step<K: Ord>(node: NodeRef<'_, K>) -> Option<NodeRef<'_, K>>;
}

/// Smallest key first, advancing by successor.
#[derive(Clone, Copy, Debug)]
pub enum Ascending {}

/// Greatest key first, advancing by predecessor.
#[derive(Clone, Copy, Debug)]
pub enum Descending {}

impl Direction for Ascending {
    #[inline]
    fn begin<K: Ord>(tree: &RedBlackTree<K>) -> Option<NodeRef<'_, K>> {
        tree.min()
    }

    #[inline]
    fn step<K: Ord>(node: NodeRef<'_, K>) -> Option<NodeRef<'_, K>> {
        node.successor()
    }
}

impl Direction for Descending {
    #[inline]
    fn begin<K: Ord>(tree: &RedBlackTree<K>) -> Option<NodeRef<'_, K>> {
        tree.max()
    }

    #[inline]
    fn step<K: Ord>(node: NodeRef<'_, K>) -> Option<NodeRef<'_, K>> {
        node.predecessor()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the keys of a [`RedBlackTree`] in direction `D`.
pub struct Iter<'a, K, D = Ascending> {
    current: Option<NodeRef<'a, K>>,
    remaining: usize,
    direction: PhantomData<D>,
}

impl<'a, K: Ord, D: Direction> Iter<'a, K, D> {
    fn new(tree: &'a RedBlackTree<K>) -> Self {
        Self {
            current: D::begin(tree),
            remaining: tree.len(),
            direction: PhantomData,
        }
    }
}

impl<K, D> Clone for Iter<'_, K, D> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
            direction: PhantomData,
        }
    }
}

impl<'a, K: Ord, D: Direction> Iterator for Iter<'a, K, D> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = D::step(node);
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Ord, D: Direction> ExactSizeIterator for Iter<'_, K, D> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K: Ord, D: Direction> FusedIterator for Iter<'_, K, D> {}

impl<K: Ord> RedBlackTree<K> {
    /// Returns an iterator over keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// let keys: Vec<&i32> = tree.iter().collect();
    /// assert_eq!(keys, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, Ascending> {
        Iter::new(self)
    }

    /// Returns an iterator over keys in descending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// let keys: Vec<&i32> = tree.iter_descending().collect();
    /// assert_eq!(keys, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn iter_descending(&self) -> Iter<'_, K, Descending> {
        Iter::new(self)
    }

    /// Returns an iterator in direction `D`.
    #[must_use]
    pub fn iter_in<D: Direction>(&self) -> Iter<'_, K, D> {
        Iter::new(self)
    }

    /// Returns an iterator over node handles in ascending key order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = NodeRef<'_, K>> {
        std::iter::successors(self.min(), |node| node.successor())
    }
}
