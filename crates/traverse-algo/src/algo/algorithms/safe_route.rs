// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Shortest safe route across a field with sensors.
//!
//! A `0` marks a sensor. The sensor's cell and its eight neighbors are unsafe.
//! Any other value is passable ground.
//! The route starts anywhere in the first column, moves orthogonally through
//! safe cells and ends on reaching the last column. Multi-source BFS from
//! every safe first-column cell; the first dequeued last-column cell gives
//! the length.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{Visitor, breadth_first};
use std::ops::ControlFlow;
use traverse_common::{Cell, Grid, Result};

const SENSOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROUTE_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

pub struct SafeRoute;

#[derive(Debug, Clone, Default)]
pub struct SafeRouteConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeRouteResult {
    /// Number of moves on the shortest safe route, `None` if every route
    /// passes a sensor.
    pub length: Option<u32>,
}

/// Marks sensor cells and everything adjacent to one.
fn safe_cells(field: &Grid<i64>) -> Grid<bool> {
    let mut safe = field.map(|&v| v != 0);
    for (cell, &value) in field.iter() {
        if value == 0 {
            for next in field.neighbors(cell, &SENSOR_OFFSETS) {
                safe[next] = false;
            }
        }
    }
    safe
}

struct RouteVisitor {
    safe: Grid<bool>,
}

impl Visitor for RouteVisitor {
    type Payload = u32;
    type Break = u32;

    fn neighbors(&mut self, node: usize, _: &u32, out: &mut Vec<usize>) {
        let safe = &self.safe;
        let cell = safe.cell_at(node);
        out.extend(
            safe.neighbors(cell, &ROUTE_OFFSETS)
                .filter(|&next| safe[next])
                .map(|next| safe.index_of(next)),
        );
    }

    fn visit(&mut self, node: usize, distance: &u32) -> ControlFlow<u32> {
        if self.safe.cell_at(node).col + 1 == self.safe.cols() {
            ControlFlow::Break(*distance)
        } else {
            ControlFlow::Continue(())
        }
    }

    fn discover(&mut self, _from: usize, distance: &u32, _to: usize) -> u32 {
        distance + 1
    }
}

impl Algorithm for SafeRoute {
    type Input = Grid<i64>;
    type Config = SafeRouteConfig;
    type Result = SafeRouteResult;

    fn name() -> &'static str {
        "safe_route"
    }

    fn run(field: &Grid<i64>, _config: Self::Config) -> Result<Self::Result> {
        if field.is_empty() {
            return Ok(SafeRouteResult { length: Some(0) });
        }

        let safe = safe_cells(field);
        let sources: Vec<(usize, u32)> = (0..safe.rows())
            .map(|row| Cell::new(row, 0))
            .filter(|&cell| safe[cell])
            .map(|cell| (safe.index_of(cell), 0))
            .collect();

        let mut visitor = RouteVisitor { safe };
        let length = breadth_first(field.len(), sources, &mut visitor).stopped();

        Ok(SafeRouteResult { length })
    }
}
