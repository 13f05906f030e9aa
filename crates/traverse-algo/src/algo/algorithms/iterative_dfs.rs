// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Iterative depth-first traversal order.
//!
//! Stack-driven DFS that reports nodes in the order a recursive DFS would
//! first reach them. Without a source every component is swept, starting
//! each from its lowest-numbered unvisited node.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{Traversal, Visitor, depth_first_stack};
use std::convert::Infallible;
use std::ops::ControlFlow;
use traverse_common::{Graph, Result};

pub struct IterativeDfs;

#[derive(Debug, Clone, Default)]
pub struct IterativeDfsConfig {
    /// Restrict the traversal to nodes reachable from this one.
    pub source: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterativeDfsResult {
    pub order: Vec<u32>,
}

struct OrderVisitor<'a> {
    graph: &'a Graph,
    order: Vec<u32>,
}

impl Visitor for OrderVisitor<'_> {
    type Payload = ();
    type Break = Infallible;

    fn neighbors(&mut self, node: usize, _: &(), out: &mut Vec<usize>) {
        out.extend(self.graph.neighbors(node as u32).iter().map(|&v| v as usize));
    }

    fn visit(&mut self, node: usize, _: &()) -> ControlFlow<Infallible> {
        self.order.push(node as u32);
        ControlFlow::Continue(())
    }

    fn discover(&mut self, _from: usize, _: &(), _to: usize) {}
}

impl Algorithm for IterativeDfs {
    type Input = Graph;
    type Config = IterativeDfsConfig;
    type Result = IterativeDfsResult;

    fn name() -> &'static str {
        "iterative_dfs"
    }

    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Result> {
        let n = graph.node_count();
        let mut visitor = OrderVisitor {
            graph,
            order: Vec::with_capacity(n),
        };
        match config.source {
            Some(source) => {
                graph.check_node(source)?;
                let _ = depth_first_stack(n, [(source as usize, ())], &mut visitor);
            }
            None => {
                let mut traversal = Traversal::depth_first(n);
                for start in 0..n {
                    if traversal.state().is_unvisited(start) {
                        let _ = traversal.run([(start, ())], &mut visitor);
                    }
                }
            }
        }

        Ok(IterativeDfsResult {
            order: visitor.order,
        })
    }
}
