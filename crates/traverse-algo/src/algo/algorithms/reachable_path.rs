// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Path between two vertices of a directed graph.
//!
//! DFS from `source` keeping the active path: a node joins the path when it
//! is discovered and leaves it when it finishes. The search stops the moment
//! `target` is discovered, at which point the active path leads to it.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{DfsEvent, depth_first, out_neighbors};
use std::ops::ControlFlow;
use traverse_common::{Graph, Result};

pub struct ReachablePath;

#[derive(Debug, Clone, Default)]
pub struct ReachablePathConfig {
    pub source: u32,
    pub target: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachablePathResult {
    /// `source` to `target` inclusive, `None` if `target` is unreachable.
    pub path: Option<Vec<u32>>,
}

impl Algorithm for ReachablePath {
    type Input = Graph;
    type Config = ReachablePathConfig;
    type Result = ReachablePathResult;

    fn name() -> &'static str {
        "reachable_path"
    }

    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Result> {
        if graph.is_empty() {
            return Ok(ReachablePathResult { path: None });
        }
        graph.check_node(config.source)?;
        graph.check_node(config.target)?;

        let target = config.target as usize;
        let mut active: Vec<u32> = Vec::new();

        let reached = depth_first(
            graph.node_count(),
            [config.source as usize],
            out_neighbors(graph),
            |event| {
                match event {
                    DfsEvent::Discover { node, .. } => {
                        active.push(node as u32);
                        if node == target {
                            return ControlFlow::Break(());
                        }
                    }
                    DfsEvent::Finish { .. } => {
                        active.pop();
                    }
                    _ => {}
                }
                ControlFlow::Continue(())
            },
        )
        .stopped()
        .is_some();

        Ok(ReachablePathResult {
            path: reached.then_some(active),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_test_graph;

    fn fixture() -> Graph {
        build_test_graph(
            8,
            vec![
                (0, 3),
                (1, 0),
                (1, 2),
                (1, 4),
                (2, 7),
                (3, 4),
                (3, 5),
                (4, 3),
                (4, 6),
                (5, 6),
                (6, 7),
            ],
        )
    }

    fn path(graph: &Graph, source: u32, target: u32) -> Option<Vec<u32>> {
        ReachablePath::run(graph, ReachablePathConfig { source, target })
            .unwrap()
            .path
    }

    #[test]
    fn test_reachable_path_fixture() {
        assert_eq!(path(&fixture(), 0, 7), Some(vec![0, 3, 4, 6, 7]));
    }

    #[test]
    fn test_dead_ends_are_dropped_from_the_path() {
        // from 1: 1 -> 0 -> 3 -> 4 -> 6 -> 7 is found before 1 -> 2 -> 7
        assert_eq!(path(&fixture(), 1, 7), Some(vec![1, 0, 3, 4, 6, 7]));
        // 3 -> 5 is explored only after 3 -> 4 -> 6 finishes
        assert_eq!(path(&fixture(), 3, 5), Some(vec![3, 5]));
    }

    #[test]
    fn test_unreachable_target() {
        assert_eq!(path(&fixture(), 7, 0), None);
    }

    #[test]
    fn test_source_is_target() {
        assert_eq!(path(&fixture(), 2, 2), Some(vec![2]));
    }

    #[test]
    fn test_invalid_target() {
        let err = ReachablePath::run(
            &fixture(),
            ReachablePathConfig {
                source: 0,
                target: 8,
            },
        );
        assert!(err.is_err());
    }
}
