// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Transitive Closure.
//!
//! One DFS per root; every node discovered from `root` is reachable from it.
//! The closure is reflexive: each root reaches itself.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{DfsEvent, DepthFirst, out_neighbors};
use std::convert::Infallible;
use std::ops::ControlFlow;
use traverse_common::{Graph, Result};

pub struct TransitiveClosure;

#[derive(Debug, Clone, Default)]
pub struct TransitiveClosureConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitiveClosureResult {
    /// `reachable[u][v]` is true iff there is a path from `u` to `v`.
    pub reachable: Vec<Vec<bool>>,
}

impl TransitiveClosureResult {
    pub fn reaches(&self, from: u32, to: u32) -> bool {
        self.reachable[from as usize][to as usize]
    }
}

impl Algorithm for TransitiveClosure {
    type Input = Graph;
    type Config = TransitiveClosureConfig;
    type Result = TransitiveClosureResult;

    fn name() -> &'static str {
        "transitive_closure"
    }

    fn run(graph: &Graph, _config: Self::Config) -> Result<Self::Result> {
        let n = graph.node_count();
        let mut reachable = Vec::with_capacity(n);

        for root in 0..n {
            let mut row = vec![false; n];
            let _ = DepthFirst::new(n).run::<_, _, Infallible>([root], out_neighbors(graph), |event| {
                if let DfsEvent::Discover { node, .. } = event {
                    row[node] = true;
                }
                ControlFlow::Continue(())
            });
            reachable.push(row);
        }

        Ok(TransitiveClosureResult { reachable })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::build_test_graph;

    #[test]
    fn test_transitive_closure_fixture() {
        let graph = build_test_graph(4, vec![(0, 2), (1, 0), (3, 1)]);
        let result = TransitiveClosure::run(&graph, TransitiveClosureConfig::default()).unwrap();

        assert_eq!(
            result.reachable,
            vec![
                vec![true, false, true, false],
                vec![true, true, true, false],
                vec![false, false, true, false],
                vec![true, true, true, true],
            ]
        );
        assert!(result.reaches(3, 2));
        assert!(!result.reaches(2, 3));
    }

    #[test]
    fn test_cycle_reaches_everything_in_it() {
        let graph = build_test_graph(3, vec![(0, 1), (1, 2), (2, 0)]);
        let result = TransitiveClosure::run(&graph, TransitiveClosureConfig::default()).unwrap();
        assert!(result.reachable.iter().flatten().all(|&r| r));
    }

    #[test]
    fn test_empty_graph() {
        let graph = build_test_graph(0, vec![]);
        let result = TransitiveClosure::run(&graph, TransitiveClosureConfig::default()).unwrap();
        assert!(result.reachable.is_empty());
    }
}
