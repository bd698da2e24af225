use core::ops::Index;

use super::AvlTree;
use crate::Rank;

impl AvlTree {
    /// Returns the entry at position `rank` in key order.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
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
    /// tree.insert(10, "a").unwrap();
    /// tree.insert(30, "c").unwrap();
    /// tree.insert(20, "b").unwrap();
    ///
    /// assert_eq!(tree.get_by_rank(1), Some((20, "b")));
    /// assert!(tree.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(i32, &str)> {
        self.raw.get_by_rank(rank).map(|handle| self.entry(handle))
    }

    /// Returns the zero-based rank of `key` in key order, or `None` if the key
    /// is not present.
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
    /// tree.insert(10, "a").unwrap();
    /// tree.insert(30, "c").unwrap();
    ///
    /// assert_eq!(tree.rank_of(30), Some(1));
    /// assert_eq!(tree.rank_of(20), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, key: i32) -> Option<usize> {
        self.raw.rank_of(key)
    }
}

impl Index<Rank> for AvlTree {
    type Output = str;

    /// Returns the value at `rank` in key order.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is out of bounds.
    fn index(&self, rank: Rank) -> &str {
        match self.get_by_rank(rank.0) {
            Some((_, value)) => value,
            None => panic!("rank {} out of bounds for AvlTree of length {}", rank.0, self.len()),
        }
    }
}
