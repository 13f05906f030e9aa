// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Shortest Path with Value-Length Jumps.
//!
//! From a cell holding value `n` the only moves are exactly `n` cells up,
//! left, right or down; a cell holding zero or a negative value is a dead
//! end. BFS finds the fewest jumps from the source to the target; parent
//! links live in an arena so the path is rebuilt by walking indices back to
//! the source.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{Visitor, breadth_first};
use std::ops::ControlFlow;
use tracing::debug;
use traverse_common::{Cell, Grid, Result};

const JUMP_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

pub struct JumpPath;

#[derive(Debug, Clone, Default)]
pub struct JumpPathConfig {
    pub source: Cell,
    /// Defaults to the bottom-right cell.
    pub target: Option<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpPathResult {
    /// Source to target inclusive; empty if the target is unreachable.
    pub path: Vec<Cell>,
}

#[derive(Debug, Clone, Copy)]
struct PathNode {
    cell: Cell,
    parent: Option<usize>,
}

struct JumpVisitor<'a> {
    grid: &'a Grid<i64>,
    target: Cell,
    arena: Vec<PathNode>,
}

impl Visitor for JumpVisitor<'_> {
    /// Arena handle of the node's [`PathNode`].
    type Payload = usize;
    type Break = usize;

    fn neighbors(&mut self, node: usize, _: &usize, out: &mut Vec<usize>) {
        let grid = self.grid;
        let cell = grid.cell_at(node);
        let Ok(reach) = isize::try_from(grid[cell]) else {
            return;
        };
        if reach <= 0 {
            return;
        }
        for (d_row, d_col) in JUMP_OFFSETS {
            let (Some(dr), Some(dc)) = (d_row.checked_mul(reach), d_col.checked_mul(reach)) else {
                continue;
            };
            if let Some(next) = grid.offset(cell, dr, dc) {
                out.push(grid.index_of(next));
            }
        }
    }

    fn visit(&mut self, node: usize, handle: &usize) -> ControlFlow<usize> {
        if self.grid.cell_at(node) == self.target {
            ControlFlow::Break(*handle)
        } else {
            ControlFlow::Continue(())
        }
    }

    fn discover(&mut self, _from: usize, handle: &usize, to: usize) -> usize {
        self.arena.push(PathNode {
            cell: self.grid.cell_at(to),
            parent: Some(*handle),
        });
        self.arena.len() - 1
    }
}

impl JumpVisitor<'_> {
    fn path_to(&self, handle: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cursor = Some(handle);
        while let Some(idx) = cursor {
            let node = self.arena[idx];
            path.push(node.cell);
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}

impl Algorithm for JumpPath {
    type Input = Grid<i64>;
    type Config = JumpPathConfig;
    type Result = JumpPathResult;

    fn name() -> &'static str {
        "jump_path"
    }

    fn run(grid: &Grid<i64>, config: Self::Config) -> Result<Self::Result> {
        if grid.is_empty() {
            return Ok(JumpPathResult { path: Vec::new() });
        }

        let target = config
            .target
            .unwrap_or(Cell::new(grid.rows() - 1, grid.cols() - 1));
        grid.check_cell(config.source)?;
        grid.check_cell(target)?;

        let mut visitor = JumpVisitor {
            grid,
            target,
            arena: vec![PathNode {
                cell: config.source,
                parent: None,
            }],
        };

        let start = grid.index_of(config.source);
        let path = match breadth_first(grid.len(), [(start, 0)], &mut visitor).stopped() {
            Some(handle) => visitor.path_to(handle),
            None => {
                debug!(source = %config.source, target = %target, "target not reachable");
                Vec::new()
            }
        };

        Ok(JumpPathResult { path })
    }
}
