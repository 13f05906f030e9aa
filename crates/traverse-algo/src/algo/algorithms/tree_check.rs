// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Tree Check.
//!
//! An undirected graph is a tree when it is connected and acyclic. One DFS
//! from node 0 stops at the first non-tree edge other than the edge back to
//! the parent; afterwards every node must have been discovered.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{DepthFirst, DfsEvent, undirected_neighbors};
use std::ops::ControlFlow;
use traverse_common::{Graph, Result};

pub struct TreeCheck;

#[derive(Debug, Clone, Default)]
pub struct TreeCheckConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeCheckResult {
    pub is_tree: bool,
}

impl Algorithm for TreeCheck {
    type Input = Graph;
    type Config = TreeCheckConfig;
    type Result = TreeCheckResult;

    fn name() -> &'static str {
        "tree_check"
    }

    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Result> {
        let n = graph.node_count();
        if n == 0 {
            return Ok(TreeCheckResult { is_tree: true });
        }

        let mut dfs = DepthFirst::new(n);
        let acyclic = dfs
            .run([0], undirected_neighbors(graph), |event| match event {
                DfsEvent::NonTreeEdge {
                    to_parent: false, ..
                } => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            })
            .is_exhausted();

        Ok(TreeCheckResult {
            is_tree: acyclic && dfs.state().all_discovered(),
        })
    }
}
