//! Traversal-based analytics over in-memory trees.
//!
//! The binary tree is the core: depth queries, maximum path sum, bounded
//! next-larger search, cousin and ancestor relationship queries, and a
//! pre-order string codec. The n-ary tree is a linear-traversal collaborator
//! exposing value reductions. Both are arena-backed: a node's identity is its
//! arena handle, never its value, so trees may carry duplicate values without
//! confusing the relationship queries.

pub mod arena;
mod codec;
pub mod errors;
pub mod nary;
mod reduce;
mod traverse;
pub mod tree_display;
pub mod util;

pub use arena::{BinaryNode, BinaryTree, BinaryTreeIter, ChildSlot};
pub use codec::ABSENT_TOKEN;
pub use errors::{TreeError, TreeResult};
pub use nary::{NaryNode, NaryTree, NaryTreeIter};
pub use tree_display::TreeRender;
