// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Strong Connectivity Check.
//!
//! Two ways to decide whether every node reaches every other node:
//!
//! - [`StrongConnectivity`]: DFS from node 0 over outbound arcs and again over
//!   inbound arcs. Both passes must discover every node.
//! - [`StrongConnectivityOnePass`]: a single DFS from node 0 tracking arrival
//!   times and low-links. If some non-root node finishes with
//!   `low == arrival`, nothing in its subtree reaches back above it and the
//!   search stops early with `false`.
//!
//! The empty graph counts as strongly connected.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{DepthFirst, DfsEvent, depth_first, in_neighbors, out_neighbors};
use std::convert::Infallible;
use std::ops::ControlFlow;
use tracing::debug;
use traverse_common::{Graph, Result};

pub struct StrongConnectivity;

pub struct StrongConnectivityOnePass;

#[derive(Debug, Clone, Default)]
pub struct StrongConnectivityConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrongConnectivityResult {
    pub is_strongly_connected: bool,
}

fn covers_all<N: FnMut(usize, &mut Vec<usize>)>(n: usize, neighbors: N) -> bool {
    let mut dfs = DepthFirst::new(n);
    let _ = dfs.run::<_, _, Infallible>([0], neighbors, |_| ControlFlow::Continue(()));
    dfs.state().all_discovered()
}

impl Algorithm for StrongConnectivity {
    type Input = Graph;
    type Config = StrongConnectivityConfig;
    type Result = StrongConnectivityResult;

    fn name() -> &'static str {
        "strong_connectivity"
    }

    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Result> {
        let n = graph.node_count();
        let is_strongly_connected = n == 0
            || (covers_all(n, out_neighbors(graph)) && covers_all(n, in_neighbors(graph)));
        Ok(StrongConnectivityResult {
            is_strongly_connected,
        })
    }
}

impl Algorithm for StrongConnectivityOnePass {
    type Input = Graph;
    type Config = StrongConnectivityConfig;
    type Result = StrongConnectivityResult;

    fn name() -> &'static str {
        "strong_connectivity_one_pass"
    }

    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Result> {
        let n = graph.node_count();
        if n == 0 {
            return Ok(StrongConnectivityResult {
                is_strongly_connected: true,
            });
        }

        let mut arrival = vec![0u32; n];
        let mut low = vec![0u32; n];
        let mut discovered = 0usize;

        let cut = depth_first(n, [0], out_neighbors(graph), |event| {
            match event {
                DfsEvent::Discover { node, time, .. } => {
                    arrival[node] = time;
                    low[node] = time;
                    discovered += 1;
                }
                DfsEvent::NonTreeEdge { from, to, .. } => {
                    low[from] = low[from].min(arrival[to]);
                }
                DfsEvent::Finish {
                    node,
                    parent: Some(parent),
                    ..
                } => {
                    if low[node] == arrival[node] {
                        return ControlFlow::Break(node);
                    }
                    low[parent] = low[parent].min(low[node]);
                }
                _ => {}
            }
            ControlFlow::Continue(())
        })
        .stopped();

        if let Some(node) = cut {
            debug!(node, "subtree cannot reach an ancestor");
        }
        Ok(StrongConnectivityResult {
            is_strongly_connected: cut.is_none() && discovered == n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_test_graph;

    fn both(graph: &Graph) -> (bool, bool) {
        let two = StrongConnectivity::run(graph, StrongConnectivityConfig::default()).unwrap();
        let one =
            StrongConnectivityOnePass::run(graph, StrongConnectivityConfig::default()).unwrap();
        (two.is_strongly_connected, one.is_strongly_connected)
    }

    #[test]
    fn test_fixture_is_strongly_connected() {
        let graph = build_test_graph(
            5,
            vec![
                (0, 4),
                (1, 0),
                (1, 2),
                (2, 1),
                (2, 4),
                (3, 1),
                (3, 2),
                (4, 3),
            ],
        );
        assert_eq!(both(&graph), (true, true));
    }

    #[test]
    fn test_path_is_not_strongly_connected() {
        let graph = build_test_graph(3, vec![(0, 1), (1, 2)]);
        assert_eq!(both(&graph), (false, false));
    }

    #[test]
    fn test_unreachable_node() {
        // 0 <-> 1, node 2 isolated
        let graph = build_test_graph(3, vec![(0, 1), (1, 0)]);
        assert_eq!(both(&graph), (false, false));
    }

    #[test]
    fn test_cross_edge_into_finished_subtree() {
        // 0 -> 1 -> 0, 0 -> 2 -> 1: node 2 escapes through the finished node 1
        let graph = build_test_graph(3, vec![(0, 1), (1, 0), (0, 2), (2, 1)]);
        assert_eq!(both(&graph), (true, true));
    }

    #[test]
    fn test_single_node_and_empty() {
        assert_eq!(both(&build_test_graph(1, vec![])), (true, true));
        assert_eq!(both(&build_test_graph(0, vec![])), (true, true));
    }
}
