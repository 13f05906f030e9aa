// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Maximum Cost Simple Path.
//!
//! Finds the most expensive simple path starting at `source` whose cost is
//! strictly greater than `threshold`. Every simple path is enumerated
//! breadth-first; each queued branch owns the set of nodes already on its
//! path, so branches never share visited state. Work is exponential in the
//! graph size, which is what `expansion_limit` is for. A path cost that leaves
//! the `i64` range is reported as [`TraversalError::Overflow`].

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::expand_layers;
use fxhash::FxHashSet;
use std::ops::ControlFlow;
use tracing::debug;
use traverse_common::{Graph, Result, TraversalError};

pub struct MaxCostPath;

#[derive(Debug, Clone, Default)]
pub struct MaxCostPathConfig {
    pub source: u32,
    pub threshold: i64,
    /// Maximum number of branches to expand before giving up.
    pub expansion_limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxCostPathResult {
    /// `None` if no path from the source costs more than the threshold.
    pub max_cost: Option<i64>,
}

struct Branch {
    node: u32,
    cost: i64,
    on_path: FxHashSet<u32>,
}

impl Algorithm for MaxCostPath {
    type Input = Graph;
    type Config = MaxCostPathConfig;
    type Result = MaxCostPathResult;

    fn name() -> &'static str {
        "max_cost_path"
    }

    fn run(graph: &Graph, config: Self::Config) -> Result<Self::Result> {
        if graph.is_empty() {
            return Ok(MaxCostPathResult { max_cost: None });
        }
        graph.check_node(config.source)?;

        let mut on_path = FxHashSet::default();
        on_path.insert(config.source);
        let seed = Branch {
            node: config.source,
            cost: 0,
            on_path,
        };

        let mut best: Option<i64> = None;
        let mut expanded = 0usize;

        let outcome = expand_layers([seed], |branch: Branch, children| {
            expanded += 1;
            if let Some(limit) = config.expansion_limit
                && expanded > limit
            {
                return ControlFlow::Break(TraversalError::LimitExceeded {
                    what: "max cost path expansion".to_string(),
                    limit,
                });
            }

            if branch.cost > config.threshold {
                best = Some(best.map_or(branch.cost, |b| b.max(branch.cost)));
            }

            for (next, weight) in graph.weighted_neighbors(branch.node) {
                if branch.on_path.contains(&next) {
                    continue;
                }
                let Some(cost) = branch.cost.checked_add(weight) else {
                    return ControlFlow::Break(TraversalError::Overflow {
                        what: "max cost path cost".to_string(),
                    });
                };
                let mut on_path = branch.on_path.clone();
                on_path.insert(next);
                children.push(Branch {
                    node: next,
                    cost,
                    on_path,
                });
            }
            ControlFlow::Continue(())
        });

        if let Some(err) = outcome.stopped() {
            return Err(err);
        }

        debug!(expanded, max_cost = ?best, "enumerated simple paths");
        Ok(MaxCostPathResult { max_cost: best })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traverse_common::Graph;

    fn fixture() -> Graph {
        Graph::weighted_undirected(
            8,
            &[
                (0, 6, 11),
                (0, 1, 5),
                (1, 6, 3),
                (1, 5, 5),
                (1, 2, 7),
                (2, 3, -8),
                (3, 4, 10),
                (5, 2, -1),
                (5, 3, 9),
                (5, 4, 1),
                (6, 5, 2),
                (7, 6, 9),
                (7, 1, 6),
            ],
        )
        .unwrap()
    }

    fn config(threshold: i64) -> MaxCostPathConfig {
        MaxCostPathConfig {
            source: 0,
            threshold,
            expansion_limit: None,
        }
    }

    #[test]
    fn test_max_cost_fixture() {
        let result = MaxCostPath::run(&fixture(), config(50)).unwrap();
        assert_eq!(result.max_cost, Some(51));
    }

    #[test]
    fn test_threshold_above_every_path() {
        let result = MaxCostPath::run(&fixture(), config(1_000)).unwrap();
        assert_eq!(result.max_cost, None);
    }

    #[test]
    fn test_simple_paths_only() {
        // 0 -(5)- 1 -(5)- 2; revisiting 1 would be more expensive
        let graph = Graph::weighted_undirected(3, &[(0, 1, 5), (1, 2, 5)]).unwrap();
        let result = MaxCostPath::run(&graph, config(0)).unwrap();
        assert_eq!(result.max_cost, Some(10));
    }

    #[test]
    fn test_expansion_limit() {
        let limited = MaxCostPathConfig {
            expansion_limit: Some(10),
            ..config(50)
        };
        let err = MaxCostPath::run(&fixture(), limited).unwrap_err();
        assert_eq!(
            err,
            TraversalError::LimitExceeded {
                what: "max cost path expansion".to_string(),
                limit: 10
            }
        );
    }

    #[test]
    fn test_cost_overflow_is_an_error() {
        let graph = Graph::weighted_undirected(3, &[(0, 1, i64::MAX), (1, 2, 1)]).unwrap();
        let err = MaxCostPath::run(&graph, config(0)).unwrap_err();
        assert_eq!(
            err,
            TraversalError::Overflow {
                what: "max cost path cost".to_string()
            }
        );
    }

    #[test]
    fn test_cost_at_the_boundary() {
        let graph = Graph::weighted_undirected(2, &[(0, 1, i64::MAX)]).unwrap();
        let result = MaxCostPath::run(&graph, config(0)).unwrap();
        assert_eq!(result.max_cost, Some(i64::MAX));
    }

    #[test]
    fn test_invalid_source() {
        let bad = MaxCostPathConfig {
            source: 8,
            ..config(0)
        };
        assert!(matches!(
            MaxCostPath::run(&fixture(), bad),
            Err(TraversalError::InvalidNode { node: 8, .. })
        ));
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::weighted_undirected(0, &[]).unwrap();
        let result = MaxCostPath::run(&graph, config(0)).unwrap();
        assert_eq!(result.max_cost, None);
    }
}
