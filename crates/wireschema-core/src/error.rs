//! Errors raised when a layout invariant would be violated.

use thiserror::Error;

/// An invariant violation detected while building a [`Layout`](crate::layout::Layout).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("identifier is empty")]
    EmptyId,

    #[error("identifier `{id}` contains reserved character {ch:?}")]
    InvalidIdChar { id: String, ch: char },

    #[error("component `{0}` is already defined")]
    DuplicateComponent(String),

    #[error("wire `{0}` is already defined")]
    DuplicateWire(String),

    #[error("{subject} has a non-finite position")]
    NonFinite { subject: String },

    #[error("node {node} has back-edge {edge}, which does not point to an earlier node")]
    ForwardEdge { node: usize, edge: usize },
}
