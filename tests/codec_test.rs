use treemetry::util::testing::init_test_logging;
use treemetry::{BinaryTree, ChildSlot, TreeError};

// ============================================================
// Round-Trip Tests
// ============================================================

#[test]
fn given_two_level_tree_when_serializing_then_preorder_tokens() {
    let mut tree = BinaryTree::new();
    let root = tree.insert_node(1, None).unwrap();
    tree.insert_node(2, Some((root, ChildSlot::Left))).unwrap();
    tree.insert_node(3, Some((root, ChildSlot::Right))).unwrap();

    assert_eq!(tree.serialize(), "1,2,X,X,3,X,X");
}

#[test]
fn given_serialized_form_when_deserializing_then_shape_and_values_survive() {
    init_test_logging();
    let tree = BinaryTree::deserialize("1,2,X,X,3,X,X").unwrap();

    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.values(), vec![1, 2, 3]);
    assert_eq!(tree.min_depth(), 2);
    assert_eq!(tree.max_depth(), 2);
    assert_eq!(tree.max_path_sum(), Ok(6));
    // and back out to the identical string
    assert_eq!(tree.serialize(), "1,2,X,X,3,X,X");
}

#[test]
fn given_skewed_tree_when_round_tripping_then_encoding_is_stable() {
    let mut tree = BinaryTree::new();
    let root = tree.insert_node(5, None).unwrap();
    let left = tree.insert_node(-3, Some((root, ChildSlot::Left))).unwrap();
    tree.insert_node(11, Some((left, ChildSlot::Right))).unwrap();

    let encoded = tree.serialize();
    assert_eq!(encoded, "5,-3,X,11,X,X,X");

    let decoded = BinaryTree::deserialize(&encoded).unwrap();
    assert_eq!(decoded.serialize(), encoded);
    assert_eq!(decoded.values(), tree.values());
}

#[test]
fn given_empty_tree_when_serializing_then_single_absent_token() {
    assert_eq!(BinaryTree::new().serialize(), "X");
}

#[test]
fn given_single_absent_token_when_deserializing_then_empty_tree() {
    let tree = BinaryTree::deserialize("X").unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 0);
}

// ============================================================
// Strict Parsing Tests
// ============================================================

#[test]
fn given_truncated_stream_when_deserializing_then_distinct_error() {
    let result = BinaryTree::deserialize("1,2");
    assert_eq!(result.unwrap_err(), TreeError::TruncatedInput { position: 2 });
}

#[test]
fn given_trailing_tokens_when_deserializing_then_distinct_error() {
    let result = BinaryTree::deserialize("1,X,X,7");
    assert_eq!(
        result.unwrap_err(),
        TreeError::TrailingTokens {
            remaining: 1,
            position: 3,
        }
    );
}

#[test]
fn given_non_integer_token_when_deserializing_then_distinct_error() {
    let result = BinaryTree::deserialize("1,q,X");
    assert_eq!(
        result.unwrap_err(),
        TreeError::InvalidToken {
            token: "q".to_string(),
            position: 1,
        }
    );
}

#[test]
fn given_whitespace_in_token_when_deserializing_then_rejected() {
    // The format carries no whitespace; a padded integer is not an integer
    let result = BinaryTree::deserialize("1, 2,X,X,X");
    assert_eq!(
        result.unwrap_err(),
        TreeError::InvalidToken {
            token: " 2".to_string(),
            position: 1,
        }
    );
}
