// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Shortest distance from every open cell to the nearest landmine.
//!
//! Multi-source BFS seeded with every mine at distance 0, expanding through
//! open cells only. Walls and open cells no mine can reach stay at `-1`.

use crate::algo::algorithms::Algorithm;
use crate::algo::traversal::{Visitor, breadth_first};
use std::convert::Infallible;
use traverse_common::{Grid, Result};

const MAZE_OFFSETS: [(isize, isize); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

pub struct MineDistance;

#[derive(Debug, Clone)]
pub struct MineDistanceConfig {
    pub mine: char,
    pub open: char,
}

impl Default for MineDistanceConfig {
    fn default() -> Self {
        Self {
            mine: 'M',
            open: 'O',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineDistanceResult {
    pub distances: Grid<i32>,
}

struct DistanceVisitor<'a> {
    maze: &'a Grid<char>,
    open: char,
    distances: Grid<i32>,
}

impl Visitor for DistanceVisitor<'_> {
    type Payload = i32;
    type Break = Infallible;

    fn neighbors(&mut self, node: usize, _: &i32, out: &mut Vec<usize>) {
        let (maze, open) = (self.maze, self.open);
        let cell = maze.cell_at(node);
        out.extend(
            maze.neighbors(cell, &MAZE_OFFSETS)
                .filter(|&next| maze[next] == open)
                .map(|next| maze.index_of(next)),
        );
    }

    fn discover(&mut self, _from: usize, distance: &i32, to: usize) -> i32 {
        let cell = self.maze.cell_at(to);
        self.distances[cell] = distance + 1;
        distance + 1
    }
}

impl Algorithm for MineDistance {
    type Input = Grid<char>;
    type Config = MineDistanceConfig;
    type Result = MineDistanceResult;

    fn name() -> &'static str {
        "mine_distance"
    }

    fn run(maze: &Grid<char>, config: Self::Config) -> Result<Self::Result> {
        let distances = maze.map(|&c| if c == config.mine { 0 } else { -1 });
        let mines: Vec<(usize, i32)> = maze
            .iter()
            .filter(|&(_, &c)| c == config.mine)
            .map(|(cell, _)| (maze.index_of(cell), 0))
            .collect();

        let mut visitor = DistanceVisitor {
            maze,
            open: config.open,
            distances,
        };
        let _ = breadth_first(maze.len(), mines, &mut visitor);

        Ok(MineDistanceResult {
            distances: visitor.distances,
        })
    }
}
