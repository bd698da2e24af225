use std::collections::BTreeMap;

use avl_ost::{AvlError, AvlTree, Rank};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn key_strategy() -> impl Strategy<Value = i32> {
    // Narrower than TEST_SIZE so inserts collide and deletes hit.
    -1_000i32..1_000i32
}

fn filled(keys: impl IntoIterator<Item = i32>) -> AvlTree {
    let mut tree = AvlTree::new();
    for key in keys {
        tree.insert(key, key.to_string()).unwrap();
    }
    tree
}

/// Everything observable about a tree without walking its internals.
fn snapshot(tree: &AvlTree) -> (Vec<i32>, Vec<String>, usize, Option<String>, Option<String>, Option<i32>) {
    (
        tree.keys_in_order(),
        tree.values_in_order().into_iter().map(str::to_owned).collect(),
        tree.len(),
        tree.min().map(str::to_owned),
        tree.max().map(str::to_owned),
        tree.root_key(),
    )
}

/// Largest height an AVL tree with `len` nodes can reach, from the Fibonacci bound.
fn max_avl_height(len: usize) -> i32 {
    // Minimum node count for heights 0, 1, 2, ...: 1, 2, 4, 7, 12, ...
    let (mut height, mut fewest, mut fewer) = (0, 1usize, 0usize);
    loop {
        let next = fewest + fewer + 1;
        if next > len {
            return height;
        }
        (fewer, fewest) = (fewest, next);
        height += 1;
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn ascending_insert_rotates_once() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.insert(10, "a"), Ok(0));
    assert_eq!(tree.insert(20, "b"), Ok(0));
    assert_eq!(tree.insert(30, "c"), Ok(1));
    assert_eq!(tree.root_key(), Some(20));
    assert_eq!(tree.keys_in_order(), vec![10, 20, 30]);
    assert_eq!(tree.height(), 1);
}

#[test]
fn zigzag_insert_counts_double_rotation_as_two() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.insert(30, "c"), Ok(0));
    assert_eq!(tree.insert(10, "a"), Ok(0));
    assert_eq!(tree.insert(20, "b"), Ok(2));
    assert_eq!(tree.root_key(), Some(20));
    assert_eq!(tree.values_in_order(), vec!["a", "b", "c"]);
}

#[test]
fn empty_tree() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.delete(5), Err(AvlError::KeyNotFound(5)));
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert_eq!(tree.root_key(), None);
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.search(5), None);
    assert!(tree.keys_in_order().is_empty());
    assert!(tree.values_in_order().is_empty());
    assert_eq!(tree.get_by_rank(0), None);
}

#[test]
fn duplicate_insert_keeps_first_value() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.insert(5, "a"), Ok(0));
    assert_eq!(tree.insert(5, "b"), Err(AvlError::DuplicateKey(5)));
    assert_eq!(tree.search(5), Some("a"));
    assert_eq!(tree.len(), 1);
}

#[test]
fn delete_inner_node_with_two_children() {
    let mut tree = filled(1..=7);
    assert_eq!(tree.delete(4), Ok(0));
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.keys_in_order(), vec![1, 2, 3, 5, 6, 7]);
    assert!(tree.height() <= max_avl_height(6));
    assert_eq!(tree.min(), Some("1"));
    assert_eq!(tree.max(), Some("7"));
}

#[test]
fn delete_down_to_empty_tracks_extremes() {
    let mut tree = filled([8, 3, 12, 1, 5, 10, 14]);
    let mut remaining: Vec<i32> = tree.keys_in_order();

    for key in [1, 14, 8, 3, 12, 5, 10] {
        tree.delete(key).unwrap();
        remaining.retain(|&k| k != key);

        assert_eq!(tree.keys_in_order(), remaining);
        assert_eq!(tree.min_key(), remaining.first().copied());
        assert_eq!(tree.max_key(), remaining.last().copied());
    }
    assert!(tree.is_empty());
    assert_eq!((tree.min(), tree.max()), (None, None));
}

#[test]
fn delete_can_rotate() {
    // 2 with children 1 and 3 -> 4; removing 1 leaves 2 right-heavy.
    let mut tree = filled([2, 1, 3, 4]);
    assert_eq!(tree.delete(1), Ok(1));
    assert_eq!(tree.root_key(), Some(3));
    assert_eq!(tree.keys_in_order(), vec![2, 3, 4]);
}

#[test]
fn delete_counts_double_rotation_as_two() {
    let mut tree = filled([5, 3, 8, 7]);
    assert_eq!(tree.delete(3), Ok(2));
    assert_eq!(tree.root_key(), Some(7));
    assert_eq!(tree.keys_in_order(), vec![5, 7, 8]);
    assert_eq!(tree.height(), 1);
}

#[test]
fn delete_can_rotate_more_than_once() {
    let mut tree = filled([8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.delete(12), Ok(2));
    assert_eq!(tree.root_key(), Some(5));
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.keys_in_order(), (1..=11).collect::<Vec<_>>());
}

#[test]
fn reinsert_after_delete_replaces_value() {
    let mut tree = filled(0..10);
    tree.delete(4).unwrap();
    tree.insert(4, "four").unwrap();
    assert_eq!(tree.search(4), Some("four"));
    assert_eq!(tree.len(), 10);
}

#[test]
fn extreme_keys() {
    let mut tree = AvlTree::new();
    tree.insert(i32::MAX, "max").unwrap();
    tree.insert(i32::MIN, "min").unwrap();
    tree.insert(0, "zero").unwrap();
    assert_eq!(tree.keys_in_order(), vec![i32::MIN, 0, i32::MAX]);
    assert_eq!(tree.min(), Some("min"));
    assert_eq!(tree.max(), Some("max"));
    assert_eq!(tree.predecessor(i32::MAX), Some((0, "zero")));
    assert_eq!(tree.successor(i32::MIN), Some((0, "zero")));
}

#[test]
fn rank_indexing() {
    let tree = filled([40, 10, 30, 20]);
    assert_eq!(&tree[Rank(0)], "10");
    assert_eq!(&tree[Rank(3)], "40");
    assert_eq!(tree.rank_of(30), Some(2));
    assert_eq!(tree.rank_of(25), None);
}

#[test]
fn iterates_by_reference() {
    let tree = filled([3, 1, 2]);
    let mut seen = Vec::new();
    for (key, value) in &tree {
        seen.push((key, value.to_owned()));
    }
    assert_eq!(seen, vec![(1, "1".to_owned()), (2, "2".to_owned()), (3, "3".to_owned())]);
    assert_eq!(tree.iter().len(), 3);
}

#[test]
fn errors_display_and_convert() {
    let err: Box<dyn std::error::Error> = Box::new(AvlError::DuplicateKey(7));
    assert_eq!(err.to_string(), "key 7 is already present");
}

// ─── Randomized ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i32),
    Delete(i32),
    Search(i32),
    Neighbours(i32),
    Rank(i32),
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        5 => key_strategy().prop_map(TreeOp::Insert),
        4 => key_strategy().prop_map(TreeOp::Delete),
        2 => key_strategy().prop_map(TreeOp::Search),
        1 => key_strategy().prop_map(TreeOp::Neighbours),
        1 => key_strategy().prop_map(TreeOp::Rank),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays random operations on both AvlTree and BTreeMap and compares every
    /// observable result.
    #[test]
    fn ops_match_btreemap(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree = AvlTree::new();
        let mut model: BTreeMap<i32, String> = BTreeMap::new();

        for op in &ops {
            match *op {
                TreeOp::Insert(key) => {
                    let value = format!("v{key}");
                    let expected = if model.contains_key(&key) {
                        Err(AvlError::DuplicateKey(key))
                    } else {
                        model.insert(key, value.clone());
                        Ok(())
                    };
                    let before = if expected.is_err() { Some(snapshot(&tree)) } else { None };

                    let result = tree.insert(key, value);
                    prop_assert_eq!(result.map(|_| ()), expected, "insert({})", key);
                    if let Some(before) = before {
                        prop_assert_eq!(snapshot(&tree), before, "failed insert({}) changed the tree", key);
                    }
                }
                TreeOp::Delete(key) => {
                    let expected = model.remove(&key).map(|_| ()).ok_or(AvlError::KeyNotFound(key));
                    let before = if expected.is_err() { Some(snapshot(&tree)) } else { None };

                    let result = tree.delete(key);
                    prop_assert_eq!(result.map(|_| ()), expected, "delete({})", key);
                    if let Some(before) = before {
                        prop_assert_eq!(snapshot(&tree), before, "failed delete({}) changed the tree", key);
                    }
                }
                TreeOp::Search(key) => {
                    prop_assert_eq!(tree.search(key), model.get(&key).map(String::as_str), "search({})", key);
                    prop_assert_eq!(tree.contains_key(key), model.contains_key(&key));
                }
                TreeOp::Neighbours(key) => {
                    let (pred, succ) = if model.contains_key(&key) {
                        (
                            model.range(..key).next_back().map(|(&k, v)| (k, v.as_str())),
                            model.range(key + 1..).next().map(|(&k, v)| (k, v.as_str())),
                        )
                    } else {
                        (None, None)
                    };
                    prop_assert_eq!(tree.predecessor(key), pred, "predecessor({})", key);
                    prop_assert_eq!(tree.successor(key), succ, "successor({})", key);
                }
                TreeOp::Rank(key) => {
                    let expected = model.contains_key(&key).then(|| model.range(..key).count());
                    prop_assert_eq!(tree.rank_of(key), expected, "rank_of({})", key);
                }
            }

            prop_assert_eq!(tree.len(), model.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(tree.is_empty(), model.is_empty(), "is_empty mismatch after {:?}", op);
            prop_assert_eq!(tree.min(), model.values().next().map(String::as_str), "min after {:?}", op);
            prop_assert_eq!(tree.max(), model.values().next_back().map(String::as_str), "max after {:?}", op);
            prop_assert!(tree.height() <= max_avl_height(tree.len()), "height {} for {} keys", tree.height(), tree.len());
        }

        prop_assert_eq!(tree.keys_in_order(), model.keys().copied().collect::<Vec<_>>());
        prop_assert_eq!(tree.values_in_order(), model.values().map(String::as_str).collect::<Vec<_>>());
    }

    /// Keys come out strictly increasing whatever order they went in.
    #[test]
    fn export_is_strictly_increasing(keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let mut tree = AvlTree::new();
        for key in keys {
            let _ = tree.insert(key, "");
        }

        let exported = tree.keys_in_order();
        prop_assert!(exported.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(exported.len(), tree.len());
        prop_assert_eq!(tree.values_in_order().len(), tree.len());
    }

    /// Every rank maps back to its key.
    #[test]
    fn rank_roundtrip(keys in proptest::collection::btree_set(key_strategy(), 1..500)) {
        let tree = filled(keys.iter().copied());
        for (rank, &key) in keys.iter().enumerate() {
            let (found, _) = tree.get_by_rank(rank).unwrap();
            prop_assert_eq!(found, key);
            prop_assert_eq!(tree.rank_of(key), Some(rank));
        }
        prop_assert_eq!(tree.get_by_rank(keys.len()), None);
    }
}
