mod arena;
mod handle;
mod iter;
mod node;
mod raw_avl_tree;
mod rotation;

pub(crate) use handle::Handle;
pub(crate) use iter::RawIter;
pub(crate) use raw_avl_tree::RawAvlTree;
