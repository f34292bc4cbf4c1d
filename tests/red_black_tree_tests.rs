//! Unit tests for RedBlackTree through the public API.

use rbkeys::{Color, InvariantViolation, NodeRef, RedBlackTree, Side, TreeError};
use rstest::rstest;
use tracing_subscriber::EnvFilter;

/// Pre-order (key, color) pairs.
fn shape(tree: &RedBlackTree<i32>) -> Vec<(i32, Color)> {
    let mut nodes = Vec::new();
    tree.depth_prefix(|node| nodes.push((*node.key(), node.color())));
    nodes
}

fn keys_of(node: Option<NodeRef<'_, i32>>) -> Option<i32> {
    node.map(|node| *node.key())
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree: RedBlackTree<i32> = RedBlackTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.validate(), Ok(0));
}

#[rstest]
fn test_default_creates_empty_tree() {
    let tree: RedBlackTree<i32> = RedBlackTree::default();
    assert!(tree.is_empty());
}

#[rstest]
fn test_single_key_is_black_root() {
    let mut tree = RedBlackTree::new();
    tree.insert(10);

    assert_eq!(tree.len(), 1);
    assert_eq!(shape(&tree), vec![(10, Color::Black)]);
    assert_eq!(tree.validate(), Ok(1));
}

// =============================================================================
// Rebalancing Scenario Tests
// =============================================================================

#[rstest]
fn test_right_right_rotates_left_around_first_key() {
    let mut tree = RedBlackTree::new();
    tree.insert(10);
    tree.insert(20);
    tree.insert(30);

    let root = tree.root().unwrap();
    assert_eq!(root.key(), &20);
    assert_eq!(root.color(), Color::Black);
    assert_eq!(keys_of(root.left()), Some(10));
    assert_eq!(root.left().unwrap().color(), Color::Red);
    assert_eq!(keys_of(root.right()), Some(30));
    assert_eq!(root.right().unwrap().color(), Color::Red);
}

#[rstest]
fn test_left_left_rotates_right_around_first_key() {
    let mut tree = RedBlackTree::new();
    tree.insert(10);
    tree.insert(5);
    tree.insert(1);

    assert_eq!(
        shape(&tree),
        vec![(5, Color::Black), (1, Color::Red), (10, Color::Red)]
    );
}

#[rstest]
fn test_zig_zag_uses_two_rotations() {
    let mut tree = RedBlackTree::new();
    tree.insert(10);
    tree.insert(20);
    tree.insert(15);

    assert_eq!(
        shape(&tree),
        vec![(15, Color::Black), (10, Color::Red), (20, Color::Red)]
    );
}

#[rstest]
#[case::ascending((1..=64).collect::<Vec<_>>())]
#[case::descending((1..=64).rev().collect::<Vec<_>>())]
#[case::interleaved((0..64).map(|key| (key * 29) % 64).collect::<Vec<_>>())]
fn test_sequences_stay_valid_after_every_insert(#[case] keys: Vec<i32>) {
    let mut tree = RedBlackTree::new();
    for key in keys {
        tree.insert(key);
        assert_eq!(tree.validate().map(|_| ()), Ok(()));
    }
    assert_eq!(tree.len(), 64);
}

// =============================================================================
// Duplicate Tests
// =============================================================================

#[rstest]
fn test_duplicate_returns_false_and_keeps_shape() {
    let mut tree: RedBlackTree<i32> = [40, 20, 60, 10, 30].into_iter().collect();
    let before = shape(&tree);

    assert!(!tree.insert(30));
    assert!(!tree.insert(40));

    assert_eq!(shape(&tree), before);
    assert_eq!(tree.len(), 5);
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[rstest]
fn test_search_hit_and_miss() {
    let tree: RedBlackTree<i32> = (0..100).step_by(3).collect();
    assert_eq!(keys_of(tree.search(&42)), Some(42));
    assert!(tree.search(&43).is_none());
    assert!(tree.contains(&99));
    assert!(!tree.contains(&100));
}

#[rstest]
fn test_search_with_borrowed_key() {
    let tree: RedBlackTree<String> = ["pear", "apple", "plum"]
        .into_iter()
        .map(String::from)
        .collect();
    assert!(tree.contains("apple"));
    assert_eq!(tree.search("plum").map(|node| node.key().as_str()), Some("plum"));
}

// =============================================================================
// Navigation Tests
// =============================================================================

#[rstest]
fn test_successor_of_maximum_is_none() {
    let tree: RedBlackTree<i32> = (1..=9).collect();
    assert!(tree.max().unwrap().successor().is_none());
    assert!(tree.min().unwrap().predecessor().is_none());
}

#[rstest]
fn test_navigation_with_gaps() {
    let tree: RedBlackTree<i32> = [10, 20, 30, 40, 50].into_iter().collect();
    let node = tree.search(&30).unwrap();
    assert_eq!(keys_of(node.successor()), Some(40));
    assert_eq!(keys_of(node.predecessor()), Some(20));
}

#[rstest]
fn test_node_links_are_consistent() {
    let tree: RedBlackTree<i32> = (0..50).collect();
    for node in tree.iter_nodes() {
        for side in [Side::Left, Side::Right] {
            if let Some(child) = node.child(side) {
                assert_eq!(child.parent(), Some(node));
            }
        }
    }
}

// =============================================================================
// Handle Tests
// =============================================================================

#[rstest]
fn test_node_id_survives_insertions() {
    let mut tree: RedBlackTree<i32> = [5].into_iter().collect();
    let id = tree.search(&5).unwrap().id();
    tree.extend(0..20);
    assert_eq!(tree.node(id).map(|node| *node.key()), Ok(5));
}

#[rstest]
fn test_node_rejects_foreign_id_with_in_range_index() {
    let other: RedBlackTree<i32> = [100, 200, 300].into_iter().collect();
    let tree: RedBlackTree<i32> = [1, 2, 3].into_iter().collect();
    let id = other.search(&300).unwrap().id();
    assert_eq!(
        tree.node(id).map(|node| *node.key()),
        Err(TreeError::UnknownNode { index: 2, len: 3 })
    );
}

#[rstest]
fn test_node_rejects_id_issued_before_clear() {
    let mut tree: RedBlackTree<i32> = [1, 2].into_iter().collect();
    let id = tree.search(&1).unwrap().id();
    tree.clear();
    tree.insert(99);
    assert_eq!(
        tree.node(id).map(|node| *node.key()),
        Err(TreeError::UnknownNode { index: 0, len: 1 })
    );
}

#[rstest]
fn test_node_accepts_id_in_clone() {
    let tree: RedBlackTree<i32> = (0..8).collect();
    let clone = tree.clone();
    let id = tree.search(&6).unwrap().id();
    assert_eq!(clone.node(id).map(|node| *node.key()), Ok(6));
}

#[rstest]
fn test_node_rejects_foreign_id() {
    let large: RedBlackTree<i32> = (0..10).collect();
    let small: RedBlackTree<i32> = (0..2).collect();
    let id = large.search(&9).unwrap().id();
    assert_eq!(
        small.node(id).map(|node| *node.key()),
        Err(TreeError::UnknownNode { index: 9, len: 2 })
    );
}

// =============================================================================
// Iteration Tests
// =============================================================================

#[rstest]
fn test_iter_ascending_and_descending() {
    let tree: RedBlackTree<i32> = [5, 2, 8, 1, 9].into_iter().collect();
    let ascending: Vec<i32> = tree.iter().copied().collect();
    let descending: Vec<i32> = tree.iter_descending().copied().collect();
    assert_eq!(ascending, vec![1, 2, 5, 8, 9]);
    assert_eq!(descending, vec![9, 8, 5, 2, 1]);
}

#[rstest]
fn test_for_loop_over_reference() {
    let tree: RedBlackTree<i32> = (1..=4).collect();
    let mut sum = 0;
    for key in &tree {
        sum += key;
    }
    assert_eq!(sum, 10);
}

#[rstest]
fn test_postfix_visits_children_first() {
    let tree: RedBlackTree<i32> = (1..=15).collect();
    let mut seen = std::collections::HashSet::new();
    tree.depth_postfix(|node| {
        for side in [Side::Left, Side::Right] {
            if let Some(child) = node.child(side) {
                assert!(seen.contains(&child.id()));
            }
        }
        seen.insert(node.id());
    });
    assert_eq!(seen.len(), 15);
}

// =============================================================================
// Validation Report Tests
// =============================================================================

#[rstest]
fn test_violation_display_names_nodes() {
    let violation = InvariantViolation::BlackHeightMismatch {
        node: RedBlackTree::<i32>::from_iter([1]).root().unwrap().id(),
        left: 2,
        right: 1,
    };
    assert_eq!(
        violation.to_string(),
        "black-height differs below #0: left 2, right 1"
    );
}

// =============================================================================
// Logging Tests
// =============================================================================

#[rstest]
fn test_insert_emits_trace_events_without_panicking() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("rbkeys=trace"))
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut tree: RedBlackTree<i32> = (0..16).collect();
        tree.insert(3);
        tree.clear();
        assert!(tree.is_empty());
    });
}
