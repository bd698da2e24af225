/// A zero-based position in the key order of an [`AvlTree`](crate::AvlTree).
///
/// # Examples
///
/// ```
/// use avl_ost::{AvlTree, Rank};
///
/// let mut tree = AvlTree::new();
/// tree.insert(20, "b").unwrap();
/// tree.insert(10, "a").unwrap();
///
/// assert_eq!(&tree[Rank(0)], "a");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
