use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::error::Result;
use crate::raw::{Handle, RawAvlTree, RawIter};

mod capacity;
mod order_statistic;

pub use crate::Rank;

/// An ordered map from distinct `i32` keys to `String` values, kept balanced as
/// an [AVL tree].
///
/// Every node caches the height and size of its subtree, so in addition to the
/// usual map operations the tree answers rank queries in O(log n). Each
/// mutation reports how many rotation steps it needed to restore balance; the
/// two halves of a double rotation are counted separately.
///
/// [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree
///
/// # Examples
///
/// ```
/// use avl_ost::{AvlError, AvlTree};
///
/// let mut tree = AvlTree::new();
/// assert_eq!(tree.insert(10, "ten"), Ok(0));
/// assert_eq!(tree.insert(20, "twenty"), Ok(0));
///
/// // The third ascending key leaves the root right-heavy: one rotation.
/// assert_eq!(tree.insert(30, "thirty"), Ok(1));
/// assert_eq!(tree.root_key(), Some(20));
///
/// assert_eq!(tree.insert(20, "again"), Err(AvlError::DuplicateKey(20)));
/// assert_eq!(tree.search(20), Some("twenty"));
///
/// assert_eq!(tree.delete(10), Ok(0));
/// assert_eq!(tree.keys_in_order(), [20, 30]);
/// assert_eq!(tree.min(), Some("twenty"));
/// ```
#[derive(Clone)]
pub struct AvlTree {
    raw: RawAvlTree,
}

impl AvlTree {
    /// Makes a new, empty `AvlTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTree;
    ///
    /// let tree = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        AvlTree { raw: RawAvlTree::new() }
    }

    /// Returns `true` if the tree holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Complexity
    ///
    /// O(1), read from the root's cached subtree size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns the height of the tree: `0` for a single node, `-1` when empty.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.raw.height()
    }

    /// Returns the key stored at the root, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.root_key(), None);
    /// for key in [30, 10, 20] {
    ///     tree.insert(key, "").unwrap();
    /// }
    /// assert_eq!(tree.root_key(), Some(20));
    /// ```
    #[must_use]
    pub fn root_key(&self) -> Option<i32> {
        self.raw.root().map(|handle| self.raw.node(handle).key())
    }

    /// Returns the value stored under `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1, "a").unwrap();
    /// assert_eq!(tree.search(1), Some("a"));
    /// assert_eq!(tree.search(2), None);
    /// ```
    #[must_use]
    pub fn search(&self, key: i32) -> Option<&str> {
        self.raw.find(key).map(|handle| self.raw.node(handle).value())
    }

    /// Returns `true` if the tree holds `key`.
    #[must_use]
    pub fn contains_key(&self, key: i32) -> bool {
        self.raw.find(key).is_some()
    }

    /// Inserts `key` with `value` and returns the number of rotation steps the
    /// insert needed.
    ///
    /// Values are never replaced in place; to change the value for a present key,
    /// [`delete`](AvlTree::delete) it first.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::DuplicateKey`](crate::AvlError::DuplicateKey) if `key`
    /// is already present. The tree is not modified.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(30, "c").unwrap();
    /// tree.insert(10, "a").unwrap();
    ///
    /// // 20 lands on the inner side of 10: a double rotation, counted as two.
    /// assert_eq!(tree.insert(20, "b"), Ok(2));
    /// ```
    pub fn insert(&mut self, key: i32, value: impl Into<String>) -> Result<usize> {
        self.raw.insert(key, value.into())
    }

    /// Removes `key` and returns the number of rotation steps the delete needed.
    ///
    /// # Errors
    ///
    /// Returns [`AvlError::KeyNotFound`](crate::AvlError::KeyNotFound) if `key`
    /// is not present. The tree is not modified.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::{AvlError, AvlTree};
    ///
    /// let mut tree = AvlTree::new();
    /// for key in 1..=7 {
    ///     tree.insert(key, key.to_string()).unwrap();
    /// }
    /// assert_eq!(tree.delete(4), Ok(0));
    /// assert_eq!(tree.delete(4), Err(AvlError::KeyNotFound(4)));
    /// assert_eq!(tree.keys_in_order(), [1, 2, 3, 5, 6, 7]);
    /// ```
    pub fn delete(&mut self, key: i32) -> Result<usize> {
        self.raw.delete(key)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the value stored under the smallest key.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn min(&self) -> Option<&str> {
        self.raw.min().map(|handle| self.raw.node(handle).value())
    }

    /// Returns the value stored under the largest key.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn max(&self) -> Option<&str> {
        self.raw.max().map(|handle| self.raw.node(handle).value())
    }

    /// Returns the smallest key.
    #[must_use]
    pub fn min_key(&self) -> Option<i32> {
        self.raw.min().map(|handle| self.raw.node(handle).key())
    }

    /// Returns the largest key.
    #[must_use]
    pub fn max_key(&self) -> Option<i32> {
        self.raw.max().map(|handle| self.raw.node(handle).key())
    }

    /// Returns the entry with the next smaller key than `key`.
    ///
    /// Returns `None` if `key` is not present or is the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1, "a").unwrap();
    /// tree.insert(5, "e").unwrap();
    ///
    /// assert_eq!(tree.predecessor(5), Some((1, "a")));
    /// assert_eq!(tree.predecessor(1), None);
    /// assert_eq!(tree.predecessor(3), None);
    /// ```
    #[must_use]
    pub fn predecessor(&self, key: i32) -> Option<(i32, &str)> {
        let handle = self.raw.find(key)?;
        self.raw.predecessor(handle).map(|handle| self.entry(handle))
    }

    /// Returns the entry with the next larger key than `key`.
    ///
    /// Returns `None` if `key` is not present or is the largest key.
    #[must_use]
    pub fn successor(&self, key: i32) -> Option<(i32, &str)> {
        let handle = self.raw.find(key)?;
        self.raw.successor(handle).map(|handle| self.entry(handle))
    }

    /// Returns all keys in ascending order.
    ///
    /// # Complexity
    ///
    /// O(n) time, O(log n) extra space besides the result.
    #[must_use]
    pub fn keys_in_order(&self) -> Vec<i32> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Returns all values ordered by their keys, index-aligned with
    /// [`keys_in_order`](AvlTree::keys_in_order).
    #[must_use]
    pub fn values_in_order(&self) -> Vec<&str> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Gets an iterator over the entries of the tree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3, "c").unwrap();
    /// tree.insert(1, "a").unwrap();
    ///
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next(), Some((3, "c")));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tree: self,
            inner: self.raw.iter(),
        }
    }

    fn entry(&self, handle: Handle) -> (i32, &str) {
        let node = self.raw.node(handle);
        (node.key(), node.value())
    }
}

/// An iterator over the entries of an `AvlTree` in key order.
///
/// This `struct` is created by the [`iter`](AvlTree::iter) method on [`AvlTree`].
#[derive(Clone)]
pub struct Iter<'a> {
    tree: &'a AvlTree,
    inner: RawIter<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i32, &'a str);

    fn next(&mut self) -> Option<(i32, &'a str)> {
        let tree = self.tree;
        self.inner.next().map(|handle| tree.entry(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a> IntoIterator for &'a AvlTree {
    type Item = (i32, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Debug for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Default for AvlTree {
    fn default() -> Self {
        AvlTree::new()
    }
}
