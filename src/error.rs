//! Error types for rs-htree.
//!
//! Searching never fails; "no match" is `None`. Errors come out of the
//! writers (text extraction, the markup renderer and the indenting renderer)
//! and out of tree building when an append would break the tree.

use crate::node::NodeId;

/// Error type for rendering, text extraction and tree building.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An `Error`-kind node was handed to a renderer.
    #[error("cannot render error node")]
    ErrorNode,

    /// A void element (e.g. `<br>`) carries child nodes and cannot be serialized.
    #[error("void element <{0}> has child nodes")]
    VoidElementChildren(String),

    /// A `NodeId` that is out of range for the tree it was used with.
    #[error("node {0:?} does not belong to this tree")]
    UnknownNode(NodeId),

    /// The node to append already has a parent, or is the tree root.
    #[error("node {0:?} is already attached")]
    AlreadyAttached(NodeId),

    /// The node to append is the new parent or one of its ancestors.
    #[error("appending node {0:?} would create a cycle")]
    Cycle(NodeId),

    /// The output sink failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rendering, text extraction and tree building.
pub type Result<T> = std::result::Result<T, Error>;
