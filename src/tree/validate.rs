//! Exhaustive invariant checking.

use super::{InvariantViolation, NodeId, RedBlackTree, Side};

impl<K: Ord> RedBlackTree<K> {
    /// Checks every structural and coloring invariant of the tree.
    ///
    /// On success returns the black-height of the root: the number of black
    /// nodes on every path from the root down to a leaf-sentinel.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found. Trees built only
    /// through this crate's public API never produce one.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbkeys::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (0..100).collect();
    /// let black_height = tree.validate().unwrap();
    /// assert_eq!(black_height, tree.black_height());
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            return Ok(0);
        };
        if let Some(parent) = self.parent_of(root) {
            return Err(InvariantViolation::RootHasParent { node: root, parent });
        }
        if self.slot(root).color.is_red() {
            return Err(InvariantViolation::RedRoot { node: root });
        }

        self.check_order()?;
        self.check_subtree(root)
    }

    /// In-order keys must be strictly increasing.
    fn check_order(&self) -> Result<(), InvariantViolation> {
        let mut previous: Option<NodeId> = None;
        let mut violation = None;
        self.iterative_depth_infix(|node| {
            if violation.is_some() {
                return;
            }
            if let Some(before) = previous
                && self.slot(before).key >= *node.key()
            {
                violation = Some(InvariantViolation::OutOfOrder {
                    node: node.id(),
                    previous: before,
                });
            }
            previous = Some(node.id());
        });
        violation.map_or(Ok(()), Err)
    }

    /// Checks links and colors below `id` and returns its black-height.
    fn check_subtree(&self, id: NodeId) -> Result<usize, InvariantViolation> {
        let slot = self.slot(id);
        let mut heights = [0; 2];

        for (index, side) in [Side::Left, Side::Right].into_iter().enumerate() {
            let Some(child) = slot.child(side) else {
                continue;
            };
            let recorded = self.parent_of(child);
            if recorded != Some(id) {
                return Err(InvariantViolation::ParentMismatch {
                    node: id,
                    child,
                    recorded,
                });
            }
            if slot.color.is_red() && self.slot(child).color.is_red() {
                return Err(InvariantViolation::RedRedEdge { parent: id, child });
            }
            heights[index] = self.check_subtree(child)?;
        }

        let [left, right] = heights;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                node: id,
                left,
                right,
            });
        }
        Ok(left + usize::from(slot.color.is_black()))
    }
}
