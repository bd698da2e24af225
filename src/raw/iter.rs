use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::handle::Handle;
use super::node::{Link, Side};
use super::raw_avl_tree::RawAvlTree;

/// An AVL tree needs millions of nodes before its height passes this.
const STACK_INLINE: usize = 32;

/// In-order walk over node handles, holding only the pending left spine.
#[derive(Clone)]
pub(crate) struct RawIter<'a> {
    tree: &'a RawAvlTree,
    stack: SmallVec<[Handle; STACK_INLINE]>,
    remaining: usize,
}

impl<'a> RawIter<'a> {
    fn new(tree: &'a RawAvlTree) -> Self {
        let mut iter = Self {
            tree,
            stack: SmallVec::new(),
            remaining: tree.len(),
        };
        iter.push_spine(tree.root());
        iter
    }

    fn push_spine(&mut self, mut link: Link) {
        while let Some(handle) = link {
            self.stack.push(handle);
            link = self.tree.node(handle).child(Side::Left);
        }
    }
}

impl Iterator for RawIter<'_> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let handle = self.stack.pop()?;
        self.push_spine(self.tree.node(handle).right());
        self.remaining -= 1;
        Some(handle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RawIter<'_> {}

impl FusedIterator for RawIter<'_> {}

impl RawAvlTree {
    pub(crate) fn iter(&self) -> RawIter<'_> {
        RawIter::new(self)
    }
}
