#![cfg(feature = "serde")]

//! Integration tests for serde support in rbkeys.

use rbkeys::RedBlackTree;
use rstest::rstest;

#[rstest]
fn test_tree_serializes_as_sorted_sequence() {
    let tree: RedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_tree_json_roundtrip() {
    let tree: RedBlackTree<i32> = (0..100).map(|key| (key * 7) % 101).collect();
    let json = serde_json::to_string(&tree).unwrap();
    let restored: RedBlackTree<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(tree, restored);
    assert!(restored.validate().is_ok());
}

#[rstest]
fn test_deserialize_collapses_duplicates_and_rebalances() {
    let restored: RedBlackTree<String> =
        serde_json::from_str(r#"["b", "a", "c", "a", "d", "e"]"#).unwrap();
    let keys: Vec<&str> = restored.iter().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b", "c", "d", "e"]);
    assert!(restored.validate().is_ok());
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<RedBlackTree<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}
