//! A size-augmented AVL tree for Rust.
//!
//! This crate provides [`AvlTree`], an ordered map from distinct `i32` keys to
//! `String` values. Besides lookup, insertion and deletion it offers:
//!
//! - Rotation accounting - [`insert`](AvlTree::insert) and
//!   [`delete`](AvlTree::delete) report how many rotation steps restored balance
//! - O(1) [`min`](AvlTree::min) / [`max`](AvlTree::max) from cached extremes
//! - O(log n) order statistics via [`get_by_rank`](AvlTree::get_by_rank),
//!   [`rank_of`](AvlTree::rank_of) and indexing by [`Rank`]
//! - Sorted export via [`keys_in_order`](AvlTree::keys_in_order) and
//!   [`values_in_order`](AvlTree::values_in_order)
//!
//! # Example
//!
//! ```
//! use avl_ost::{AvlTree, Rank};
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key, format!("v{key}")).unwrap();
//! }
//!
//! assert_eq!(tree.root_key(), Some(20));
//! assert_eq!(tree.keys_in_order(), [10, 20, 30]);
//! assert_eq!(tree.max(), Some("v30"));
//! assert_eq!(&tree[Rank(0)], "v10");
//! ```
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to each other by index, which lets every
//! node keep a parent link without reference cycles. An absent child or parent
//! is `None` and counts as height `-1`, size `0`. Each node caches its height
//! and subtree size; both are refreshed on the walk back up to the root after
//! every insert and delete.
//!
//! Mutations log through the [`log`](https://docs.rs/log) facade: rotations at
//! `trace` level, completed inserts and deletes at `debug` level.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

// Test helpers and proptest expand to std macros.
#[cfg(test)]
#[macro_use]
extern crate std;

mod error;
mod order_statistic;
mod raw;

pub mod avl_tree;

pub use avl_tree::AvlTree;
pub use error::{AvlError, Result};
pub use order_statistic::Rank;
