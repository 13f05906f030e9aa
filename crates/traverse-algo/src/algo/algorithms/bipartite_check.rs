// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Bipartite Check Algorithm.
//!
//! Breadth-first over every component, recording each node's BFS level. Edges
//! only ever join equal or adjacent levels, so an edge between two nodes on
//! the same level closes an odd cycle. On success the color is level parity.
//!
//! Directed input is checked on its underlying undirected graph.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{Traversal, Visitor, undirected_neighbors};
use std::ops::ControlFlow;
use tracing::debug;
use traverse_common::{Graph, Result};

pub struct BipartiteCheck;

#[derive(Debug, Clone, Default)]
pub struct BipartiteCheckConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BipartiteCheckResult {
    pub is_bipartite: bool,
    pub partition: Vec<(u32, u8)>, // (node, color: 0 or 1), empty when not bipartite
}

struct LevelVisitor<N> {
    neighbors: N,
    levels: Vec<u32>,
}

impl<N: FnMut(usize, &mut Vec<usize>)> Visitor for LevelVisitor<N> {
    type Payload = ();
    type Break = (usize, usize);

    fn neighbors(&mut self, node: usize, _: &(), out: &mut Vec<usize>) {
        (self.neighbors)(node, out)
    }

    fn discover(&mut self, from: usize, _: &(), to: usize) {
        self.levels[to] = self.levels[from] + 1;
    }

    fn revisit(&mut self, from: usize, _: &(), to: usize) -> ControlFlow<(usize, usize)> {
        if self.levels[from] == self.levels[to] {
            ControlFlow::Break((from, to))
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl Algorithm for BipartiteCheck {
    type Input = Graph;
    type Config = BipartiteCheckConfig;
    type Result = BipartiteCheckResult;

    fn name() -> &'static str {
        "bipartite_check"
    }

    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Result> {
        let n = graph.node_count();
        let mut visitor = LevelVisitor {
            neighbors: undirected_neighbors(graph),
            levels: vec![0; n],
        };
        let mut traversal = Traversal::breadth_first(n);

        for start in 0..n {
            if !traversal.state().is_unvisited(start) {
                continue;
            }
            if let Some((u, v)) = traversal.run([(start, ())], &mut visitor).stopped() {
                debug!(u, v, "same-level edge, graph is not bipartite");
                return Ok(BipartiteCheckResult {
                    is_bipartite: false,
                    partition: Vec::new(),
                });
            }
        }

        let partition = visitor
            .levels
            .iter()
            .enumerate()
            .map(|(node, level)| (node as u32, (level % 2) as u8))
            .collect();

        Ok(BipartiteCheckResult {
            is_bipartite: true,
            partition,
        })
    }
}
