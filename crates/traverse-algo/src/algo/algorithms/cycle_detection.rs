// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Undirected Cycle Detection.
//!
//! Two traversals answering the same question. Each node remembers the node
//! it was discovered from; reaching an already discovered node through any
//! edge other than the one back to that parent closes a cycle. Only the first
//! parent occurrence is skipped, so parallel edges and self-loops count.
//!
//! Every component is searched. Directed input is checked on its underlying
//! undirected graph.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{DfsEvent, Traversal, Visitor, depth_first, undirected_neighbors};
use std::ops::ControlFlow;
use traverse_common::{Graph, Result};

/// Breadth-first cycle check.
pub struct BfsCycleCheck;

/// Depth-first cycle check, stopping at the first back edge.
pub struct DfsCycleCheck;

#[derive(Debug, Clone, Default)]
pub struct CycleCheckConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleCheckResult {
    pub has_cycle: bool,
    /// The edge that closed the first cycle found.
    pub closing_edge: Option<(u32, u32)>,
}

impl CycleCheckResult {
    fn from_edge(edge: Option<(usize, usize)>) -> Self {
        Self {
            has_cycle: edge.is_some(),
            closing_edge: edge.map(|(u, v)| (u as u32, v as u32)),
        }
    }
}

struct ParentVisitor<N> {
    neighbors: N,
    parent_skipped: bool,
}

impl<N: FnMut(usize, &mut Vec<usize>)> Visitor for ParentVisitor<N> {
    type Payload = Option<usize>;
    type Break = (usize, usize);

    fn neighbors(&mut self, node: usize, _: &Option<usize>, out: &mut Vec<usize>) {
        (self.neighbors)(node, out)
    }

    fn visit(&mut self, _node: usize, _: &Option<usize>) -> ControlFlow<(usize, usize)> {
        self.parent_skipped = false;
        ControlFlow::Continue(())
    }

    fn discover(&mut self, from: usize, _: &Option<usize>, _to: usize) -> Option<usize> {
        Some(from)
    }

    fn revisit(
        &mut self,
        from: usize,
        parent: &Option<usize>,
        to: usize,
    ) -> ControlFlow<(usize, usize)> {
        if *parent == Some(to) && !self.parent_skipped {
            self.parent_skipped = true;
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break((from, to))
        }
    }
}

impl Algorithm for BfsCycleCheck {
    type Input = Graph;
    type Config = CycleCheckConfig;
    type Result = CycleCheckResult;

    fn name() -> &'static str {
        "bfs_cycle_check"
    }

    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Result> {
        let n = graph.node_count();
        let mut visitor = ParentVisitor {
            neighbors: undirected_neighbors(graph),
            parent_skipped: false,
        };
        let mut traversal = Traversal::breadth_first(n);

        for start in 0..n {
            if !traversal.state().is_unvisited(start) {
                continue;
            }
            if let Some(edge) = traversal.run([(start, None)], &mut visitor).stopped() {
                return Ok(CycleCheckResult::from_edge(Some(edge)));
            }
        }
        Ok(CycleCheckResult::from_edge(None))
    }
}

impl Algorithm for DfsCycleCheck {
    type Input = Graph;
    type Config = CycleCheckConfig;
    type Result = CycleCheckResult;

    fn name() -> &'static str {
        "dfs_cycle_check"
    }

    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Result> {
        let n = graph.node_count();
        let edge = depth_first(n, 0..n, undirected_neighbors(graph), |event| match event {
            DfsEvent::NonTreeEdge {
                from,
                to,
                to_parent: false,
                ..
            } => ControlFlow::Break((from, to)),
            _ => ControlFlow::Continue(()),
        })
        .stopped();

        Ok(CycleCheckResult::from_edge(edge))
    }
}
