//! Red-black fix-up after insertion.
//!
//! A freshly inserted node is red. The only invariant it can break is
//! "a red node never has a red parent". The engine inspects the local
//! shape around the current node, classifies it into one [`FixupCase`],
//! and applies that case. Only [`FixupCase::RedUncle`] moves the violation
//! upward (two levels at a time); every other case terminates within two
//! steps, so the loop is bounded by the tree height.
//!
//! The two mirror orientations share one code path: every case records
//! the side on which the parent hangs below the grandparent, and rotations
//! are expressed relative to it.

use super::{Color, NodeId, RedBlackTree, Side};

/// Local shape around a red node, as seen by the fix-up engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum FixupCase {
    /// The node is the root, or its parent is black.
    Balanced,
    /// The parent is red and has no parent of its own.
    RootChild { parent: NodeId },
    /// Parent and uncle are both red.
    RedUncle {
        parent: NodeId,
        uncle: NodeId,
        grandparent: NodeId,
    },
    /// The uncle is black and the node hangs on the same side of its
    /// parent as the parent hangs below the grandparent (zig-zig).
    Outer {
        parent: NodeId,
        grandparent: NodeId,
        side: Side,
    },
    /// The uncle is black and the node hangs on the other side (zig-zag).
    Inner { parent: NodeId, side: Side },
}

impl<K> RedBlackTree<K> {
    /// Restores the red-black invariants after `inserted` was linked in as a
    /// red leaf.
    pub(crate) fn rebalance_after_insert(&mut self, inserted: NodeId) {
        let mut current = inserted;

        loop {
            let case = self.classify(current);
            tracing::trace!(node = %current, ?case, "insert fix-up step");

            match case {
                FixupCase::Balanced => break,
                FixupCase::RootChild { parent } => {
                    self.paint(parent, Color::Black);
                    break;
                }
                FixupCase::RedUncle {
                    parent,
                    uncle,
                    grandparent,
                } => {
                    self.paint(parent, Color::Black);
                    self.paint(uncle, Color::Black);
                    self.paint(grandparent, Color::Red);
                    current = grandparent;
                }
                FixupCase::Inner { parent, side } => {
                    // Lift the node into its parent's place. The old parent
                    // is now an outer child and is classified as such next.
                    self.rotate(parent, side);
                    current = parent;
                }
                FixupCase::Outer {
                    parent,
                    grandparent,
                    side,
                } => {
                    self.rotate(grandparent, side.opposite());
                    self.paint(parent, Color::Black);
                    self.paint(grandparent, Color::Red);
                    break;
                }
            }
        }

        if let Some(root) = self.root {
            self.paint(root, Color::Black);
        }
    }

    fn classify(&self, node: NodeId) -> FixupCase {
        let Some((parent, node_side)) = self.side_in_parent(node) else {
            return FixupCase::Balanced;
        };
        if self.slot(node).color.is_black() || self.slot(parent).color.is_black() {
            return FixupCase::Balanced;
        }
        let Some((grandparent, side)) = self.side_in_parent(parent) else {
            return FixupCase::RootChild { parent };
        };

        // An absent uncle is a leaf-sentinel and therefore black.
        let uncle = self.child(grandparent, side.opposite());
        if self.color_of(uncle).is_red()
            && let Some(uncle) = uncle
        {
            return FixupCase::RedUncle {
                parent,
                uncle,
                grandparent,
            };
        }

        if node_side == side {
            FixupCase::Outer {
                parent,
                grandparent,
                side,
            }
        } else {
            FixupCase::Inner { parent, side }
        }
    }
}
