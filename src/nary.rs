//! Arena-based n-ary tree with stack-traversal reductions.
//!
//! Collaborator component: nodes hold a value and an ordered sequence of
//! children, and the queries are linear reductions over all reachable nodes.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Tree node in the arena-based n-ary hierarchy.
#[derive(Debug)]
pub struct NaryNode {
    /// Value carried by this node
    pub value: i64,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<Index>,
}

/// Arena-based n-ary tree.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
#[derive(Debug)]
pub struct NaryTree {
    /// Arena storage for all tree nodes
    arena: Arena<NaryNode>,
    /// Index of the root node, None for an empty tree
    root: Option<Index>,
}

impl Default for NaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NaryTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a node, appending it to `parent`'s children or setting it as
    /// the root when `parent` is None.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, value: i64, parent: Option<Index>) -> TreeResult<Index> {
        match parent {
            Some(parent_idx) => {
                if !self.arena.contains(parent_idx) {
                    return Err(TreeError::UnknownNode);
                }
                let node_idx = self.arena.insert(NaryNode {
                    value,
                    children: Vec::new(),
                });
                if let Some(parent_node) = self.arena.get_mut(parent_idx) {
                    parent_node.children.push(node_idx);
                }
                Ok(node_idx)
            }
            None => {
                if self.root.is_some() {
                    return Err(TreeError::RootOccupied);
                }
                let node_idx = self.arena.insert(NaryNode {
                    value,
                    children: Vec::new(),
                });
                self.root = Some(node_idx);
                Ok(node_idx)
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&NaryNode> {
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

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> NaryTreeIter {
        NaryTreeIter::new(self)
    }

    /// Sum of the values of all reachable nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn sum_values(&self) -> i64 {
        self.iter().map(|(_, node)| node.value).sum()
    }

    /// Number of reachable nodes carrying an even value.
    #[instrument(level = "debug", skip(self))]
    pub fn count_evens(&self) -> usize {
        self.iter().filter(|(_, node)| node.value % 2 == 0).count()
    }

    /// Number of reachable nodes whose value exceeds `lower_bound`.
    #[instrument(level = "debug", skip(self))]
    pub fn num_greater(&self, lower_bound: i64) -> usize {
        self.iter()
            .filter(|(_, node)| node.value > lower_bound)
            .count()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}

/// Stack-based pre-order iterator over `(Index, &NaryNode)` pairs.
pub struct NaryTreeIter<'a> {
    tree: &'a NaryTree,
    stack: Vec<Index>,
}

impl<'a> NaryTreeIter<'a> {
    fn new(tree: &'a NaryTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for NaryTreeIter<'a> {
    type Item = (Index, &'a NaryNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
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

    // root
    // ├── child1
    // │   └── grandchild1
    // └── child2
    #[test]
    fn test_insert_preserves_child_order() {
        let mut tree = NaryTree::new();
        let root = tree.insert_node(1, None).unwrap();
        let child1 = tree.insert_node(2, Some(root)).unwrap();
        let child2 = tree.insert_node(3, Some(root)).unwrap();
        tree.insert_node(4, Some(child1)).unwrap();

        let root_node = tree.get_node(root).unwrap();
        assert_eq!(root_node.children, vec![child1, child2]);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_insert_rejects_unknown_parent() {
        let mut first = NaryTree::new();
        let foreign = first.insert_node(1, None).unwrap();

        let mut second = NaryTree::new();
        assert_eq!(
            second.insert_node(2, Some(foreign)),
            Err(TreeError::UnknownNode)
        );
    }
}
