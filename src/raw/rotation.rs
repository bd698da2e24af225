use log::trace;

use super::handle::Handle;
use super::node::Side;
use super::raw_avl_tree::RawAvlTree;

/// What the rebalance walk does after one rotation step at a pivot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RotationOutcome {
    /// The pivot's subtree is balanced; continue with the pivot's new parent.
    Advance,
    /// Only the inner half of a double rotation was done; look at the same pivot again.
    Revisit,
}

impl RawAvlTree {
    /// Performs one rotation step at `pivot`, whose children's heights differ by
    /// at least two.
    ///
    /// When the heavy child leans outward (or is level) a single rotation at the
    /// pivot fixes it. When it leans inward only the child is rotated, turning
    /// the shape into the outward case for the next call.
    pub(crate) fn rotate(&mut self, pivot: Handle) -> RotationOutcome {
        let heavy = if self.balance_factor(pivot) > 0 { Side::Left } else { Side::Right };
        let child = self
            .node(pivot)
            .child(heavy)
            .expect("`RawAvlTree::rotate()` - heavy side of `pivot` is a sentinel!");

        let outer = self.link_height(self.node(child).child(heavy));
        let inner = self.link_height(self.node(child).child(heavy.opposite()));

        if outer >= inner {
            trace!("single rotation at key {} lifting its {heavy:?} child", self.node(pivot).key());
            self.rotate_up(pivot, heavy);
            RotationOutcome::Advance
        } else {
            trace!("inner rotation at key {} before its parent", self.node(child).key());
            self.rotate_up(child, heavy.opposite());
            RotationOutcome::Revisit
        }
    }

    /// Lifts the `side` child of `top` into `top`'s place; `top` becomes its
    /// `side.opposite()` child. A `Left` lift is a right rotation.
    fn rotate_up(&mut self, top: Handle, side: Side) {
        let risen = self
            .node(top)
            .child(side)
            .expect("`RawAvlTree::rotate_up()` - rotating child is a sentinel!");
        let inner = self.node(risen).child(side.opposite());
        let parent = self.node(top).parent();

        self.node_mut(top).set_child(side, inner);
        if let Some(inner) = inner {
            self.node_mut(inner).set_parent(Some(top));
        }

        self.replace_child(parent, top, Some(risen));
        self.node_mut(risen).set_child(side.opposite(), Some(top));
        self.node_mut(top).set_parent(Some(risen));

        // Child before parent.
        self.recompute(top);
        self.recompute(risen);
    }
}
