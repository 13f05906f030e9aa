// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Bridge Detection (2-edge connectivity).
//!
//! DFS with arrival times and low-link values: `low[v]` is the earliest
//! arrival reachable from `v`'s subtree through one non-tree edge. A tree edge
//! `(parent, v)` is a bridge iff `low[v] == arrival[v]`. Only the first
//! occurrence of the parent is skipped, so a doubled edge is never a bridge.
//!
//! Every component is searched. Bridges are reported as `(parent, child)`
//! pairs of the DFS tree, sorted.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{DfsEvent, depth_first, undirected_neighbors};
use std::convert::Infallible;
use std::ops::ControlFlow;
use traverse_common::{Graph, Result};

pub struct Bridges;

#[derive(Debug, Clone, Default)]
pub struct BridgesConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgesResult {
    pub bridges: Vec<(u32, u32)>,
}

impl BridgesResult {
    /// True when no single edge removal disconnects anything.
    pub fn is_two_edge_connected(&self) -> bool {
        self.bridges.is_empty()
    }
}

impl Algorithm for Bridges {
    type Input = Graph;
    type Config = BridgesConfig;
    type Result = BridgesResult;

    fn name() -> &'static str {
        "bridges"
    }

    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Result> {
        let n = graph.node_count();
        let mut arrival = vec![0u32; n];
        let mut low = vec![0u32; n];
        let mut bridges = Vec::new();

        let _ = depth_first::<_, _, Infallible>(n, 0..n, undirected_neighbors(graph), |event| {
            match event {
                DfsEvent::Discover { node, time, .. } => {
                    arrival[node] = time;
                    low[node] = time;
                }
                DfsEvent::NonTreeEdge {
                    from,
                    to,
                    to_parent: false,
                    ..
                } => {
                    low[from] = low[from].min(arrival[to]);
                }
                DfsEvent::Finish {
                    node,
                    parent: Some(parent),
                    ..
                } => {
                    if low[node] == arrival[node] {
                        bridges.push((parent as u32, node as u32));
                    }
                    low[parent] = low[parent].min(low[node]);
                }
                _ => {}
            }
            ControlFlow::Continue(())
        });

        bridges.sort_unstable();
        Ok(BridgesResult { bridges })
    }
}
