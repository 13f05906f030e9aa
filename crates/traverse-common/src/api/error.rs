// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use thiserror::Error;

/// Errors raised while building a graph or grid, or when a query names a
/// node or cell outside of it.
///
/// A traversal that simply finds nothing (no path, no cycle, no bridge) is
/// not an error; those outcomes are carried by each algorithm's result type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TraversalError {
    #[error("Edge ({src}, {dst}) references a node outside 0..{node_count}")]
    InvalidEdge {
        src: u32,
        dst: u32,
        node_count: usize,
    },

    #[error("Node {node} is outside 0..{node_count}")]
    InvalidNode { node: u32, node_count: usize },

    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    InvalidCell {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Grid rows must all have the same width.
    #[error("Grid row {row} has {actual} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{what} exceeded the configured limit of {limit}")]
    LimitExceeded { what: String, limit: usize },

    /// An accumulated value left the range of its integer type.
    #[error("{what} overflowed")]
    Overflow { what: String },

    #[error("Argument '{arg}' is invalid: {message}")]
    InvalidArgument { arg: String, message: String },
}

pub type Result<T> = std::result::Result<T, TraversalError>;
