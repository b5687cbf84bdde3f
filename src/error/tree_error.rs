use std::fmt;

use thiserror::Error;

use crate::ast::NodeTag;

/// Which child of a node was requested.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChildPosition {
    First,
    Second,
}

impl fmt::Display for ChildPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Represents a malformed tree.
///
/// Trees built by the parser never trigger this; it signals a bug in the
/// code building or walking the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A node was asked for a child it does not have.
    #[error("no {position} child for node with tag {tag} and representation '{repr}'")]
    MissingChild {
        /// The requested child.
        position: ChildPosition,
        /// The tag of the node.
        tag:      NodeTag,
        /// The representation of the node.
        repr:     String,
    },
}
