//! Terminal rendering of trees via `termtree`.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::BinaryTree;
use crate::nary::NaryTree;

/// Conversion into a displayable `termtree::Tree`.
pub trait TreeRender {
    fn to_display_tree(&self) -> Tree<String>;
}

impl TreeRender for BinaryTree {
    #[instrument(level = "debug", skip(self))]
    fn to_display_tree(&self) -> Tree<String> {
        fn build_tree(source: &BinaryTree, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = source.get_node(node_idx) {
                for child_idx in [node.left, node.right].into_iter().flatten() {
                    if let Some(child) = source.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.value.to_string());
                        build_tree(source, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        match self.root().and_then(|idx| self.get_node(idx).map(|node| (idx, node))) {
            Some((root_idx, root_node)) => {
                let mut tree = Tree::new(root_node.value.to_string());
                build_tree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("(empty tree)".to_string()),
        }
    }
}

impl TreeRender for NaryTree {
    #[instrument(level = "debug", skip(self))]
    fn to_display_tree(&self) -> Tree<String> {
        fn build_tree(source: &NaryTree, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = source.get_node(node_idx) {
                for &child_idx in &node.children {
                    if let Some(child) = source.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.value.to_string());
                        build_tree(source, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        match self.root().and_then(|idx| self.get_node(idx).map(|node| (idx, node))) {
            Some((root_idx, root_node)) => {
                let mut tree = Tree::new(root_node.value.to_string());
                build_tree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("(empty tree)".to_string()),
        }
    }
}
