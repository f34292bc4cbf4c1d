//! Rotation primitives.
//!
//! A rotation exchanges a node with one of its children while keeping the
//! in-order key sequence intact. Rotations never touch colors.
//!
//! ```text
//!        x                  y
//!       / \   left(x)      / \
//!      a   y   ------>    x   c
//!         / \  <------   / \
//!        b   c  right(y) a   b
//! ```

use super::{NodeId, RedBlackTree, Side};

impl<K> RedBlackTree<K> {
    /// Rotates around `pivot` so that its child on `direction.opposite()`
    /// takes its place and `pivot` descends on `direction`.
    ///
    /// `Side::Left` is a left rotation (`pivot.right` rises), `Side::Right`
    /// a right rotation (`pivot.left` rises). When the rising child is
    /// absent the tree is returned unchanged.
    pub(crate) fn rotate(&mut self, pivot: NodeId, direction: Side) {
        let Some(riser) = self.child(pivot, direction.opposite()) else {
            return;
        };
        let moved = self.child(riser, direction);
        let anchor = self.side_in_parent(pivot);

        // The inner subtree of the riser changes owner.
        self.set_child(pivot, direction.opposite(), moved);
        if let Some(moved) = moved {
            self.slot_mut(moved).parent = Some(pivot);
        }

        // The riser takes the pivot's place.
        self.slot_mut(riser).parent = anchor.map(|(parent, _)| parent);
        match anchor {
            None => self.root = Some(riser),
            Some((parent, side)) => self.set_child(parent, side, Some(riser)),
        }

        self.set_child(riser, direction, Some(pivot));
        self.slot_mut(pivot).parent = Some(riser);

        tracing::trace!(%pivot, %riser, ?direction, "rotated");
    }
}
