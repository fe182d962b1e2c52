//! Post-order reductions for the binary tree.
//!
//! Both walks thread their accumulator through the call chain as an explicit
//! `&mut` parameter instead of mutating state captured by a closure.

use generational_arena::Index;
use tracing::instrument;

use crate::arena::BinaryTree;
use crate::errors::{TreeError, TreeResult};

impl BinaryTree {
    /// Maximum sum of values along any simple path in the tree. The path may
    /// start and end at any node and must not revisit one; a branch whose
    /// best contribution is negative is excluded rather than traversed.
    ///
    /// An empty tree has no paths and yields [`TreeError::EmptyTree`].
    #[instrument(level = "debug", skip(self))]
    pub fn max_path_sum(&self) -> TreeResult<i64> {
        let root = self.root.ok_or(TreeError::EmptyTree)?;
        let mut best = i64::MIN;
        let downward = self.best_branch(Some(root), &mut best);
        Ok(best.max(downward))
    }

    /// Best single-branch sum walking downward from `node_idx`, updating
    /// `best` with the best path passing through each visited node.
    fn best_branch(&self, node_idx: Option<Index>, best: &mut i64) -> i64 {
        let node = match node_idx.and_then(|idx| self.get_node(idx)) {
            Some(node) => node,
            None => return 0,
        };

        let left = self.best_branch(node.left, best).max(0);
        let right = self.best_branch(node.right, best).max(0);

        // A path may bend through this node, joining both branches
        *best = (*best).max(node.value + left + right);

        // Only one branch may continue toward the parent
        node.value + left.max(right)
    }

    /// Deepest node having both targets as descendants, a node counting as
    /// its own descendant. Returns None when the targets are not both
    /// present in the tree.
    #[instrument(level = "debug", skip(self))]
    pub fn lowest_common_ancestor(&self, first: Index, second: Index) -> Option<Index> {
        let mut found = None;
        self.contains_target(self.root, first, second, &mut found);
        found
    }

    /// Post-order containment walk: reports whether the subtree at
    /// `node_idx` holds either target, recording in `found` the first node
    /// (deepest, since post-order) where two containment sources meet.
    fn contains_target(
        &self,
        node_idx: Option<Index>,
        first: Index,
        second: Index,
        found: &mut Option<Index>,
    ) -> bool {
        let (idx, node) = match node_idx.and_then(|idx| self.get_node(idx).map(|n| (idx, n))) {
            Some(pair) => pair,
            None => return false,
        };

        let left = self.contains_target(node.left, first, second, found);
        let right = self.contains_target(node.right, first, second, found);
        let current = idx == first || idx == second;

        if (current && left) || (current && right) || (left && right) {
            *found = Some(idx);
        }

        current || left || right
    }
}
