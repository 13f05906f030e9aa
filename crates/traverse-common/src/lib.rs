// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod core {
    pub mod cell;
}

pub mod graph {
    pub mod adjacency;
    pub mod grid;
}

// Re-exports for convenience
pub use api::error::{Result, TraversalError};
pub use core::cell::Cell;
pub use graph::adjacency::{Graph, GraphBuilder};
pub use graph::grid::Grid;
