// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Replace every 0 that is not enclosed by 1s.
//!
//! Flood fill over 8-connected zero cells, seeded with every zero on the
//! border. Each zero reached from the border becomes 1; zeros that no border
//! zero can reach are left alone.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{Traversal, Visitor};
use std::convert::Infallible;
use std::ops::ControlFlow;
use traverse_common::{Grid, Result};

const FILL_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub struct ReplaceBorderZeros;

#[derive(Debug, Clone, Default)]
pub struct ReplaceBorderZerosConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceBorderZerosResult {
    pub grid: Grid<i64>,
    pub replaced: usize,
}

struct FillVisitor<'a> {
    grid: &'a mut Grid<i64>,
    replaced: usize,
}

impl Visitor for FillVisitor<'_> {
    type Payload = ();
    type Break = Infallible;

    fn neighbors(&mut self, node: usize, _: &(), out: &mut Vec<usize>) {
        let grid = &*self.grid;
        let cell = grid.cell_at(node);
        out.extend(
            grid.neighbors(cell, &FILL_OFFSETS)
                .filter(|&next| grid[next] == 0)
                .map(|next| grid.index_of(next)),
        );
    }

    fn visit(&mut self, node: usize, _: &()) -> ControlFlow<Infallible> {
        let cell = self.grid.cell_at(node);
        self.grid[cell] = 1;
        self.replaced += 1;
        ControlFlow::Continue(())
    }

    fn discover(&mut self, _from: usize, _: &(), _to: usize) {}
}

/// Rewrites border-connected zeros to 1 in place and returns how many
/// cells changed.
pub fn replace_border_zeros(grid: &mut Grid<i64>) -> usize {
    let seeds: Vec<(usize, ())> = grid
        .border()
        .filter(|&cell| grid[cell] == 0)
        .map(|cell| (grid.index_of(cell), ()))
        .collect();

    let len = grid.len();
    let mut visitor = FillVisitor { grid, replaced: 0 };
    let _ = Traversal::depth_first(len).run(seeds, &mut visitor);
    visitor.replaced
}

impl Algorithm for ReplaceBorderZeros {
    type Input = Grid<i64>;
    type Config = ReplaceBorderZerosConfig;
    type Result = ReplaceBorderZerosResult;

    fn name() -> &'static str {
        "replace_border_zeros"
    }

    fn run(grid: &Grid<i64>, _config: Self::Config) -> Result<Self::Result> {
        let mut filled = grid.clone();
        let replaced = replace_border_zeros(&mut filled);
        Ok(ReplaceBorderZerosResult {
            grid: filled,
            replaced,
        })
    }
}
