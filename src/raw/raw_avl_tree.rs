use alloc::string::String;
use core::cmp::Ordering;

use log::debug;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Link, Node, SENTINEL_HEIGHT, Side, is_sentinel};
use super::rotation::RotationOutcome;
use crate::error::{AvlError, Result};

/// The core AVL implementation backing `AvlTree`.
#[derive(Clone)]
pub(crate) struct RawAvlTree {
    /// Arena owning every node in the tree.
    nodes: Arena<Node>,
    /// Root node, or the sentinel if the tree is empty.
    root: Link,
    /// Node holding the smallest key.
    min: Link,
    /// Node holding the largest key.
    max: Link,
}

impl RawAvlTree {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            min: None,
            max: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            min: None,
            max: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of nodes in the tree.
    pub(crate) fn len(&self) -> usize {
        self.link_size(self.root)
    }

    pub(crate) fn is_empty(&self) -> bool {
        is_sentinel(self.root)
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.min = None;
        self.max = None;
    }

    pub(crate) fn root(&self) -> Link {
        self.root
    }

    pub(crate) fn min(&self) -> Link {
        self.min
    }

    pub(crate) fn max(&self) -> Link {
        self.max
    }

    /// Height of the tree; `-1` when empty.
    pub(crate) fn height(&self) -> i32 {
        self.link_height(self.root)
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node {
        self.nodes.get(handle)
    }

    #[inline]
    pub(super) fn node_mut(&mut self, handle: Handle) -> &mut Node {
        self.nodes.get_mut(handle)
    }

    /// Height of a link; the sentinel reports `-1`.
    #[inline]
    pub(super) fn link_height(&self, link: Link) -> i32 {
        link.map_or(SENTINEL_HEIGHT, |handle| self.node(handle).height())
    }

    /// Size of a link; the sentinel reports `0`.
    #[inline]
    pub(super) fn link_size(&self, link: Link) -> usize {
        link.map_or(0, |handle| self.node(handle).size())
    }

    /// Height of the left subtree minus height of the right subtree.
    pub(super) fn balance_factor(&self, handle: Handle) -> i32 {
        let node = self.node(handle);
        self.link_height(node.left()) - self.link_height(node.right())
    }

    /// Refreshes the cached height and size of `handle` from its children.
    pub(super) fn recompute(&mut self, handle: Handle) {
        let node = self.node(handle);
        let (left, right) = (node.left(), node.right());
        let left = (self.link_height(left), self.link_size(left));
        let right = (self.link_height(right), self.link_size(right));
        self.node_mut(handle).recompute(left, right);
    }

    /// Puts `new` in the slot of `parent` that currently holds `old`, or makes it
    /// the root when `parent` is the sentinel, and points `new` back at `parent`.
    pub(super) fn replace_child(&mut self, parent: Link, old: Handle, new: Link) {
        match parent {
            Some(parent) => {
                let side = if self.node(parent).left() == Some(old) { Side::Left } else { Side::Right };
                self.node_mut(parent).set_child(side, new);
            }
            None => self.root = new,
        }
        if let Some(new) = new {
            self.node_mut(new).set_parent(parent);
        }
    }
}

// ─── Navigation ──────────────────────────────────────────────────────────────

impl RawAvlTree {
    /// Finds the node holding `key`.
    pub(crate) fn find(&self, key: i32) -> Link {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            current = match key.cmp(&node.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Finds the node under whose sentinel child `key` would be attached.
    fn insertion_parent(&self, key: i32) -> Link {
        let mut parent = None;
        let mut current = self.root;
        while let Some(handle) = current {
            parent = current;
            let node = self.node(handle);
            current = if key < node.key() { node.left() } else { node.right() };
        }
        parent
    }

    /// Follows `side` children from `handle` as far as they go.
    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(next) = self.node(handle).child(side) {
            handle = next;
        }
        handle
    }

    /// The in-order neighbour of `handle` on `side`.
    fn neighbour(&self, handle: Handle, side: Side) -> Link {
        if let Some(child) = self.node(handle).child(side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut current = handle;
        while let Some(parent) = self.node(current).parent() {
            if self.node(parent).child(side.opposite()) == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// The node with the next smaller key, or `None` at the minimum.
    pub(crate) fn predecessor(&self, handle: Handle) -> Link {
        self.neighbour(handle, Side::Left)
    }

    /// The node with the next larger key, or `None` at the maximum.
    pub(crate) fn successor(&self, handle: Handle) -> Link {
        self.neighbour(handle, Side::Right)
    }

    /// Returns the node at zero-based position `rank` in key order.
    pub(crate) fn get_by_rank(&self, mut rank: usize) -> Link {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            let left_size = self.link_size(node.left());
            current = match rank.cmp(&left_size) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(handle),
                Ordering::Greater => {
                    rank -= left_size + 1;
                    node.right()
                }
            };
        }
        None
    }

    /// Returns the zero-based position of `key` in key order.
    pub(crate) fn rank_of(&self, key: i32) -> Option<usize> {
        let mut rank = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            let left_size = self.link_size(node.left());
            current = match key.cmp(&node.key()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(rank + left_size),
                Ordering::Greater => {
                    rank += left_size + 1;
                    node.right()
                }
            };
        }
        None
    }
}

// ─── Mutation ────────────────────────────────────────────────────────────────

impl RawAvlTree {
    /// Inserts `key` and returns the number of rotations performed.
    pub(crate) fn insert(&mut self, key: i32, value: String) -> Result<usize> {
        if !is_sentinel(self.find(key)) {
            return Err(AvlError::DuplicateKey(key));
        }

        let handle = self.nodes.alloc(Node::leaf(key, value));
        let Some(parent) = self.insertion_parent(key) else {
            self.root = Some(handle);
            self.min = Some(handle);
            self.max = Some(handle);
            debug!("insert {key}: new root, 0 rotation(s)");
            return Ok(0);
        };

        let side = if key < self.node(parent).key() { Side::Left } else { Side::Right };
        self.node_mut(parent).set_child(side, Some(handle));
        self.node_mut(handle).set_parent(Some(parent));

        if self.max.is_none_or(|max| key > self.node(max).key()) {
            self.max = Some(handle);
        }
        if self.min.is_none_or(|min| key < self.node(min).key()) {
            self.min = Some(handle);
        }

        let rotations = self.rebalance_from(Some(parent));
        debug!("insert {key}: {rotations} rotation(s)");
        Ok(rotations)
    }

    /// Deletes `key` and returns the number of rotations performed.
    pub(crate) fn delete(&mut self, key: i32) -> Result<usize> {
        let Some(handle) = self.find(key) else {
            return Err(AvlError::KeyNotFound(key));
        };

        // Resolve the cached extremes while the node is still linked.
        if self.max == Some(handle) {
            self.max = self.predecessor(handle);
        }
        if self.min == Some(handle) {
            self.min = self.successor(handle);
        }

        let changed = self.unlink_structurally(handle);
        self.nodes.free(handle);

        let rotations = self.rebalance_from(changed);
        debug_assert_eq!(self.nodes.len(), self.len(), "`RawAvlTree::delete()` - arena and root size disagree!");
        debug!("delete {key}: {rotations} rotation(s)");
        Ok(rotations)
    }

    /// Detaches `handle` from the tree without touching heights, sizes, or the
    /// cached extremes. Returns the lowest node whose subtree changed; the
    /// rebalance walk has to start there.
    fn unlink_structurally(&mut self, handle: Handle) -> Link {
        let node = self.node(handle);
        let parent = node.parent();

        match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                // The successor has no left child, so it leaves via the branch below.
                let successor = self.extreme(right, Side::Left);
                let changed = self.unlink_structurally(successor);

                // Re-read: the successor may have been our right child.
                let node = self.node(handle);
                let (left, right) = (node.left(), node.right());
                self.replace_child(parent, handle, Some(successor));
                let spliced = self.node_mut(successor);
                spliced.set_child(Side::Left, left);
                spliced.set_child(Side::Right, right);
                for child in [left, right].into_iter().flatten() {
                    self.node_mut(child).set_parent(Some(successor));
                }

                if changed == Some(handle) { Some(successor) } else { changed }
            }
            (child, None) | (None, child) => {
                self.replace_child(parent, handle, child);
                parent
            }
        }
    }

    /// Walks from `start` to the root restoring heights, sizes, and balance.
    /// Returns the number of rotation steps taken; a double rotation counts two.
    fn rebalance_from(&mut self, start: Link) -> usize {
        let mut rotations = 0;
        let mut current = start;

        while let Some(handle) = current {
            if self.balance_factor(handle).abs() <= 1 {
                self.recompute(handle);
                let parent = self.node(handle).parent();
                if is_sentinel(parent) {
                    self.root = Some(handle);
                }
                current = parent;
                continue;
            }

            rotations += 1;
            match self.rotate(handle) {
                RotationOutcome::Advance => current = self.node(handle).parent(),
                RotationOutcome::Revisit => {}
            }
        }

        rotations
    }
}
