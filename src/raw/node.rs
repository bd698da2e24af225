use alloc::string::String;

use super::handle::Handle;

/// A child or parent reference. `None` is the sentinel: an absent child, the
/// root's parent, or the root of an empty tree.
pub(crate) type Link = Option<Handle>;

/// Height reported for the sentinel, one below a leaf.
pub(crate) const SENTINEL_HEIGHT: i32 = -1;

/// Returns true if `link` is the sentinel rather than a real node.
#[inline]
pub(crate) const fn is_sentinel(link: Link) -> bool {
    link.is_none()
}

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A real tree node. Children are owned through the arena and reached only from
/// here; `parent` is used for upward walks and never for releasing nodes.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    key: i32,
    value: String,
    // 0 for a leaf.
    height: i32,
    // Number of nodes in the subtree rooted here, including this one.
    size: usize,
    left: Link,
    right: Link,
    parent: Link,
}

impl Node {
    /// Creates a detached leaf: sentinel children, height 0, size 1.
    pub(crate) fn leaf(key: i32, value: String) -> Self {
        Self {
            key,
            value,
            height: 0,
            size: 1,
            left: None,
            right: None,
            parent: None,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> i32 {
        self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub(crate) fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub(crate) fn left(&self) -> Link {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Link {
        self.right
    }

    #[inline]
    pub(crate) fn parent(&self) -> Link {
        self.parent
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Link) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Link) {
        self.parent = parent;
    }

    /// Stores height and size computed from the children's `(height, size)`.
    pub(crate) fn recompute(&mut self, left: (i32, usize), right: (i32, usize)) {
        self.height = 1 + left.0.max(right.0);
        self.size = 1 + left.1 + right.1;
    }
}
