use super::AvlTree;
use crate::raw::RawAvlTree;

impl AvlTree {
    /// Creates an empty tree with room for at least `capacity` nodes before
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTree;
    ///
    /// let tree = AvlTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AvlTree {
            raw: RawAvlTree::with_capacity(capacity),
        }
    }

    /// Returns how many nodes the tree can hold before reallocating.
    ///
    /// Slots released by [`delete`](AvlTree::delete) are reused by later inserts.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_ost::AvlTree;
    ///
    /// let tree = AvlTree::with_capacity(32);
    /// assert!(tree.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
