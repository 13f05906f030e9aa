// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Minimum Passes to Convert Negative Values.
//!
//! Every positive cell flips the sign of its negative orthogonal neighbors in
//! one pass; flipped cells spread on the next pass. A multi-source BFS seeded
//! with all positive cells at level 0 assigns each reachable negative cell the
//! pass that converts it. The answer is the deepest level, or `None` when a
//! negative cell is never reached.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{Visitor, breadth_first};
use std::convert::Infallible;
use std::ops::ControlFlow;
use tracing::debug;
use traverse_common::{Grid, Result};

const PASS_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

pub struct MinPasses;

#[derive(Debug, Clone, Default)]
pub struct MinPassesConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinPassesResult {
    /// `None` if some negative value can never be converted.
    pub passes: Option<u32>,
    /// The input after every reachable negative value was flipped.
    pub converted: Grid<i64>,
}

struct PassVisitor<'a> {
    grid: &'a Grid<i64>,
    converted: Grid<i64>,
    deepest: u32,
}

impl Visitor for PassVisitor<'_> {
    type Payload = u32;
    type Break = Infallible;

    fn neighbors(&mut self, node: usize, _pass: &u32, out: &mut Vec<usize>) {
        let grid = self.grid;
        let cell = grid.cell_at(node);
        out.extend(
            grid.neighbors(cell, &PASS_OFFSETS)
                .filter(|&next| grid[next] < 0)
                .map(|next| grid.index_of(next)),
        );
    }

    fn visit(&mut self, _node: usize, pass: &u32) -> ControlFlow<Infallible> {
        self.deepest = self.deepest.max(*pass);
        ControlFlow::Continue(())
    }

    fn discover(&mut self, _from: usize, pass: &u32, to: usize) -> u32 {
        let cell = self.grid.cell_at(to);
        self.converted[cell] = -self.grid[cell];
        pass + 1
    }
}

impl Algorithm for MinPasses {
    type Input = Grid<i64>;
    type Config = MinPassesConfig;
    type Result = MinPassesResult;

    fn name() -> &'static str {
        "min_passes"
    }

    fn run(grid: &Grid<i64>, _config: Self::Config) -> Result<Self::Result> {
        let mut visitor = PassVisitor {
            grid,
            converted: grid.clone(),
            deepest: 0,
        };

        let sources: Vec<(usize, u32)> = grid
            .iter()
            .filter(|&(_, &value)| value > 0)
            .map(|(cell, _)| (grid.index_of(cell), 0))
            .collect();
        let _ = breadth_first(grid.len(), sources, &mut visitor);

        let stranded = visitor.converted.iter().filter(|&(_, &v)| v < 0).count();
        let passes = if stranded > 0 {
            debug!(stranded, "negative cells unreachable from any positive cell");
            None
        } else {
            Some(visitor.deepest)
        };

        Ok(MinPassesResult {
            passes,
            converted: visitor.converted,
        })
    }
}
