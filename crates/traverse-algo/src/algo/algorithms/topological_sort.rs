// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Topological Sort Algorithm.
//!
//! DFS over every component, then nodes in decreasing departure time. For
//! every arc `u -> v` of a DAG, `u` departs after `v`, so `u` comes first.
//!
//! If the graph contains a cycle no order exists: `sorted_nodes` is empty and
//! `has_cycle` is true. The cycle test is the same one [`DagCheck`] uses.
//!
//! [`DagCheck`]: super::DagCheck

use crate::algo::algorithms::Algorithm;
use crate::algo::algorithms::dag_check::find_back_edge;
use crate::algo::traversal::depth_first_timestamps;
use tracing::debug;
use traverse_common::{Graph, Result};

pub struct TopologicalSort;

#[derive(Debug, Clone, Default)]
pub struct TopologicalSortConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalSortResult {
    pub sorted_nodes: Vec<u32>,
    pub has_cycle: bool,
}

impl Algorithm for TopologicalSort {
    type Input = Graph;
    type Config = TopologicalSortConfig;
    type Result = TopologicalSortResult;

    fn name() -> &'static str {
        "topological_sort"
    }

    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Result> {
        let stamps = depth_first_timestamps(graph);

        if let Some((u, v)) = find_back_edge(graph, &stamps) {
            debug!(u, v, "back edge, no topological order");
            return Ok(TopologicalSortResult {
                sorted_nodes: Vec::new(),
                has_cycle: true,
            });
        }

        let mut sorted_nodes = stamps.finish_order;
        sorted_nodes.reverse();
        Ok(TopologicalSortResult {
            sorted_nodes,
            has_cycle: false,
        })
    }
}
