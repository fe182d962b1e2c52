use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Child position a binary-tree insertion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSlot {
    Left,
    Right,
}

impl fmt::Display for ChildSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildSlot::Left => write!(f, "left"),
            ChildSlot::Right => write!(f, "right"),
        }
    }
}

/// Tree node in the arena-based binary hierarchy.
#[derive(Debug)]
pub struct BinaryNode {
    /// Value carried by this node
    pub value: i64,
    /// Index of the left child in the arena, None if absent
    pub left: Option<Index>,
    /// Index of the right child in the arena, None if absent
    pub right: Option<Index>,
}

/// Arena-based binary tree.
///
/// Uses generational arena for memory-safe node handles and O(1) lookups.
/// A handle is the node's identity: two nodes carrying equal values are still
/// distinct nodes. A tree without a root is a valid empty tree.
#[derive(Debug)]
pub struct BinaryTree {
    /// Arena storage for all tree nodes
    pub(crate) arena: Arena<BinaryNode>,
    /// Index of the root node, None for an empty tree
    pub(crate) root: Option<Index>,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a node under `parent` at the given slot, or as the root when
    /// `parent` is None. The root can only be set once; `deserialize`
    /// constructs a fresh tree instead of replacing an existing root.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(
        &mut self,
        value: i64,
        parent: Option<(Index, ChildSlot)>,
    ) -> TreeResult<Index> {
        match parent {
            Some((parent_idx, slot)) => {
                let parent_node = self.arena.get(parent_idx).ok_or(TreeError::UnknownNode)?;
                let occupied = match slot {
                    ChildSlot::Left => parent_node.left.is_some(),
                    ChildSlot::Right => parent_node.right.is_some(),
                };
                if occupied {
                    return Err(TreeError::OccupiedSlot(slot));
                }

                let node_idx = self.arena.insert(BinaryNode {
                    value,
                    left: None,
                    right: None,
                });
                if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                    match slot {
                        ChildSlot::Left => parent_node.left = Some(node_idx),
                        ChildSlot::Right => parent_node.right = Some(node_idx),
                    }
                }
                Ok(node_idx)
            }
            None => {
                if self.root.is_some() {
                    return Err(TreeError::RootOccupied);
                }
                let node_idx = self.arena.insert(BinaryNode {
                    value,
                    left: None,
                    right: None,
                });
                self.root = Some(node_idx);
                Ok(node_idx)
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&BinaryNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Whether the handle refers to a node stored in this tree.
    pub fn contains(&self, idx: Index) -> bool {
        self.arena.contains(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> BinaryTreeIter {
        BinaryTreeIter::new(self)
    }

    /// Collects all node values in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn values(&self) -> Vec<i64> {
        self.iter().map(|(_, node)| node.value).collect()
    }

    /// Returns the smallest value strictly greater than `lower_bound`, or
    /// None if no node qualifies.
    ///
    /// The tree carries no ordering invariant, so every node is visited.
    #[instrument(level = "debug", skip(self))]
    pub fn next_larger(&self, lower_bound: i64) -> Option<i64> {
        self.iter()
            .map(|(_, node)| node.value)
            .filter(|&value| value > lower_bound)
            .min()
    }
}

/// Pre-order iterator over `(Index, &BinaryNode)` pairs.
pub struct BinaryTreeIter<'a> {
    tree: &'a BinaryTree,
    stack: Vec<Index>,
}

impl<'a> BinaryTreeIter<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for BinaryTreeIter<'a> {
    type Item = (Index, &'a BinaryNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push right before left for left-to-right pre-order
                if let Some(right) = node.right {
                    self.stack.push(right);
                }
                if let Some(left) = node.left {
                    self.stack.push(left);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      1
    //     / \
    //    2   3
    #[test]
    fn test_insert_and_lookup() {
        let mut tree = BinaryTree::new();
        let root = tree.insert_node(1, None).unwrap();
        let left = tree.insert_node(2, Some((root, ChildSlot::Left))).unwrap();
        tree.insert_node(3, Some((root, ChildSlot::Right))).unwrap();

        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.get_node(root).unwrap().left, Some(left));
        assert_eq!(tree.get_node(left).unwrap().value, 2);
    }

    #[test]
    fn test_insert_rejects_occupied_slot() {
        let mut tree = BinaryTree::new();
        let root = tree.insert_node(1, None).unwrap();
        tree.insert_node(2, Some((root, ChildSlot::Left))).unwrap();

        let result = tree.insert_node(3, Some((root, ChildSlot::Left)));
        assert_eq!(result, Err(TreeError::OccupiedSlot(ChildSlot::Left)));
    }

    #[test]
    fn test_insert_rejects_second_root() {
        let mut tree = BinaryTree::new();
        tree.insert_node(1, None).unwrap();

        assert_eq!(tree.insert_node(2, None), Err(TreeError::RootOccupied));
    }

    #[test]
    fn test_iter_visits_in_preorder() {
        let mut tree = BinaryTree::new();
        let root = tree.insert_node(1, None).unwrap();
        let left = tree.insert_node(2, Some((root, ChildSlot::Left))).unwrap();
        tree.insert_node(3, Some((root, ChildSlot::Right))).unwrap();
        tree.insert_node(4, Some((left, ChildSlot::Left))).unwrap();

        assert_eq!(tree.values(), vec![1, 2, 4, 3]);
    }
}
