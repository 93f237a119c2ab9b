//! Errors surfaced by the containers and graph utilities in this crate.
//!
//! Tree operations never fail: an empty tree simply produces empty output. Only
//! operations that must hand back an element can fail, and they do so loudly.

use thiserror::Error;

/// An element was requested from an empty [`SmartList`](crate::list::SmartList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("`{operation}` on empty SmartList")]
pub struct Underflow {
    /// The name of the operation that needed an element.
    pub operation: &'static str,
}

impl Underflow {
    pub(crate) const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

/// Invalid input to one of the shortest path utilities in [`paths`](crate::paths).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The search was started from a vertex the graph doesn't have.
    #[error("source vertex {vertex} is out of range for a graph with {vertices} vertices")]
    SourceOutOfRange {
        /// The requested source vertex.
        vertex: usize,
        /// How many vertices the graph has.
        vertices: usize,
    },
    /// An edge referenced a vertex the graph doesn't have.
    #[error("edge {from} -> {to} is out of range for a graph with {vertices} vertices")]
    EdgeOutOfRange {
        /// Tail of the edge.
        from: usize,
        /// Head of the edge.
        to: usize,
        /// How many vertices the graph has.
        vertices: usize,
    },
    /// A weight matrix row didn't have one entry per vertex.
    #[error("weight matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// The number of rows in the matrix.
        expected: usize,
    },
}
