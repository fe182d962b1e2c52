//! Queue-based level-order algorithms for the binary tree.
//!
//! Each queue element is a pair of the node handle and its auxiliary datum:
//! the depth for the depth queries, the parent handle for the cousin query.

use std::collections::VecDeque;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::BinaryTree;

impl BinaryTree {
    /// Length in nodes of the shortest path from the root to a node missing
    /// at least one child. Breadth-first, so the first such node dequeued is
    /// the shallowest. Returns 0 for an empty tree.
    ///
    /// A node with a single child already qualifies as a stopping point; it
    /// does not need to be a true leaf.
    #[instrument(level = "debug", skip(self))]
    pub fn min_depth(&self) -> usize {
        let mut queue = VecDeque::new();
        if let Some(root) = self.root {
            queue.push_back((root, 1));
        }

        while let Some((node_idx, depth)) = queue.pop_front() {
            if let Some(node) = self.get_node(node_idx) {
                match (node.left, node.right) {
                    (Some(left), Some(right)) => {
                        queue.push_back((left, depth + 1));
                        queue.push_back((right, depth + 1));
                    }
                    _ => return depth,
                }
            }
        }

        0
    }

    /// Length in nodes of the longest root-to-leaf path. Visits every node
    /// and tracks the maximum depth observed. Returns 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn max_depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        if let Some(root) = self.root {
            queue.push_back((root, 1));
        }

        while let Some((node_idx, depth)) = queue.pop_front() {
            if depth > max_depth {
                max_depth = depth;
            }
            if let Some(node) = self.get_node(node_idx) {
                if let Some(left) = node.left {
                    queue.push_back((left, depth + 1));
                }
                if let Some(right) = node.right {
                    queue.push_back((right, depth + 1));
                }
            }
        }

        max_depth
    }

    /// Whether two nodes are cousins: at the same depth but under different
    /// parents. The root has no parent and is never a cousin; siblings are
    /// not cousins. Handles not present in the tree yield false.
    ///
    /// Walks the tree one generation at a time carrying each node's parent,
    /// so the search stops at the first level containing either target.
    #[instrument(level = "debug", skip(self))]
    pub fn are_cousins(&self, first: Index, second: Index) -> bool {
        let root = match self.root {
            Some(root) => root,
            None => return false,
        };
        if root == first || root == second {
            return false;
        }

        // (node, parent) pairs for the generation under inspection
        let mut level: Vec<(Index, Index)> = Vec::new();
        if let Some(node) = self.get_node(root) {
            if let Some(left) = node.left {
                level.push((left, root));
            }
            if let Some(right) = node.right {
                level.push((right, root));
            }
        }

        while !level.is_empty() {
            let found: Vec<&(Index, Index)> = level
                .iter()
                .filter(|(node_idx, _)| *node_idx == first || *node_idx == second)
                .collect();

            match found.len() {
                // Both targets on this level: cousins iff parents differ
                2 => return found[0].1 != found[1].1,
                // Only one target on this level: depths cannot match
                1 => return false,
                _ => {}
            }

            let mut next_level = Vec::new();
            for (node_idx, _) in level {
                if let Some(node) = self.get_node(node_idx) {
                    if let Some(left) = node.left {
                        next_level.push((left, node_idx));
                    }
                    if let Some(right) = node.right {
                        next_level.push((right, node_idx));
                    }
                }
            }
            level = next_level;
        }

        false
    }
}
