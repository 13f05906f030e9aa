// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! DAG Check.
//!
//! Runs DFS over every component recording departure times. In a DAG every
//! arc `(u, v)` leaves `u` after `v` has already departed; an arc with
//! `departure[u] <= departure[v]` is a back edge (a self-loop included).

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{DfsTimestamps, depth_first_timestamps};
use traverse_common::{Graph, Result};

pub struct DagCheck;

#[derive(Debug, Clone, Default)]
pub struct DagCheckConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DagCheckResult {
    pub is_dag: bool,
    /// First arc found pointing at a node that departed later.
    pub back_edge: Option<(u32, u32)>,
}

pub(crate) fn find_back_edge(graph: &Graph, stamps: &DfsTimestamps) -> Option<(u32, u32)> {
    graph
        .arcs()
        .find(|&(u, v)| stamps.departure[u as usize] <= stamps.departure[v as usize])
}

impl Algorithm for DagCheck {
    type Input = Graph;
    type Config = DagCheckConfig;
    type Result = DagCheckResult;

    fn name() -> &'static str {
        "dag_check"
    }

    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Result> {
        let stamps = depth_first_timestamps(graph);
        let back_edge = find_back_edge(graph, &stamps);
        Ok(DagCheckResult {
            is_dag: back_edge.is_none(),
            back_edge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_test_graph;

    #[test]
    fn test_dag_check_fixture() {
        // 0 -> 3 -> 0 closes a cycle
        let graph = build_test_graph(
            7,
            vec![
                (0, 1),
                (0, 3),
                (1, 2),
                (1, 3),
                (3, 2),
                (3, 4),
                (3, 0),
                (5, 6),
                (6, 3),
            ],
        );
        let result = DagCheck::run(&graph, DagCheckConfig::default()).unwrap();
        assert!(!result.is_dag);
        assert_eq!(result.back_edge, Some((3, 0)));
    }

    #[test]
    fn test_dag_without_the_back_edge() {
        let graph = build_test_graph(
            7,
            vec![
                (0, 1),
                (0, 3),
                (1, 2),
                (1, 3),
                (3, 2),
                (3, 4),
                (5, 6),
                (6, 3),
            ],
        );
        let result = DagCheck::run(&graph, DagCheckConfig::default()).unwrap();
        assert!(result.is_dag);
        assert_eq!(result.back_edge, None);
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let graph = build_test_graph(2, vec![(0, 1), (1, 1)]);
        assert!(!DagCheck::run(&graph, DagCheckConfig::default()).unwrap().is_dag);
    }

    #[test]
    fn test_empty_graph_is_a_dag() {
        let graph = build_test_graph(0, vec![]);
        assert!(DagCheck::run(&graph, DagCheckConfig::default()).unwrap().is_dag);
    }
}
