//! Pre-order string codec for the binary tree.
//!
//! Wire format: comma-separated pre-order token stream, each node emitted as
//! value, left encoding, right encoding, with an absent subtree written as
//! the literal token `X`. No whitespace, no escaping.

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::instrument;

use crate::arena::{BinaryNode, BinaryTree};
use crate::errors::{TreeError, TreeResult};

/// Token marking an absent subtree.
pub const ABSENT_TOKEN: &str = "X";

impl BinaryTree {
    /// Encodes the tree as a pre-order token stream. An empty tree encodes
    /// to `"X"`.
    #[instrument(level = "debug", skip(self))]
    pub fn serialize(&self) -> String {
        let mut tokens = Vec::new();
        self.emit_subtree(self.root, &mut tokens);
        tokens.iter().join(",")
    }

    fn emit_subtree(&self, node_idx: Option<Index>, tokens: &mut Vec<String>) {
        match node_idx.and_then(|idx| self.get_node(idx)) {
            Some(node) => {
                tokens.push(node.value.to_string());
                self.emit_subtree(node.left, tokens);
                self.emit_subtree(node.right, tokens);
            }
            None => tokens.push(ABSENT_TOKEN.to_string()),
        }
    }

    /// Reconstructs a tree from its pre-order encoding.
    ///
    /// Parsing is strict: a token that is neither an integer nor `X`, a
    /// stream that ends before the tree is complete, and tokens left over
    /// after it each surface a distinct error instead of silently producing
    /// a wrong tree.
    #[instrument(level = "debug")]
    pub fn deserialize(input: &str) -> TreeResult<BinaryTree> {
        let tokens: Vec<&str> = input.split(',').collect();
        let mut tree = BinaryTree::new();
        let mut cursor = 0;

        tree.root = Self::parse_subtree(&tokens, &mut cursor, &mut tree.arena)?;

        if cursor < tokens.len() {
            return Err(TreeError::TrailingTokens {
                remaining: tokens.len() - cursor,
                position: cursor,
            });
        }
        Ok(tree)
    }

    /// Consumes one subtree from the token stream in pre-order: either a
    /// single `X`, or a value followed by the left and right encodings.
    fn parse_subtree(
        tokens: &[&str],
        cursor: &mut usize,
        arena: &mut Arena<BinaryNode>,
    ) -> TreeResult<Option<Index>> {
        let position = *cursor;
        let token = match tokens.get(position) {
            Some(token) => *token,
            None => return Err(TreeError::TruncatedInput { position }),
        };
        *cursor += 1;

        if token == ABSENT_TOKEN {
            return Ok(None);
        }

        let value: i64 = token.parse().map_err(|_| TreeError::InvalidToken {
            token: token.to_string(),
            position,
        })?;

        let node_idx = arena.insert(BinaryNode {
            value,
            left: None,
            right: None,
        });
        let left = Self::parse_subtree(tokens, cursor, arena)?;
        let right = Self::parse_subtree(tokens, cursor, arena)?;

        if let Some(node) = arena.get_mut(node_idx) {
            node.left = left;
            node.right = right;
        }
        Ok(Some(node_idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_serializes_to_absent_token() {
        assert_eq!(BinaryTree::new().serialize(), "X");
    }

    #[test]
    fn test_empty_input_is_invalid() {
        // "".split(',') yields a single empty token, not an empty stream
        let result = BinaryTree::deserialize("");
        assert_eq!(
            result.unwrap_err(),
            TreeError::InvalidToken {
                token: String::new(),
                position: 0,
            }
        );
    }
}
