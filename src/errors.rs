//! Crate-level errors.
//!
//! Absence of a query result (no qualifying value, targets not in the tree)
//! is expressed as `Option`/`bool`, never as an error. Errors are reserved
//! for construction misuse, malformed serialized input, and operations that
//! are undefined on an empty tree.

use thiserror::Error;

use crate::arena::ChildSlot;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("node handle not found in this tree")]
    UnknownNode,

    #[error("tree already has a root")]
    RootOccupied,

    #[error("parent already has a {0} child")]
    OccupiedSlot(ChildSlot),

    #[error("empty tree has no paths")]
    EmptyTree,

    #[error("invalid token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },

    #[error("serialized tree ends prematurely at position {position}")]
    TruncatedInput { position: usize },

    #[error("{remaining} unconsumed tokens after position {position}")]
    TrailingTokens { remaining: usize, position: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
