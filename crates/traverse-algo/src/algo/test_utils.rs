// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use traverse_common::{Graph, Grid};

pub fn build_test_graph(node_count: usize, edges: Vec<(u32, u32)>) -> Graph {
    Graph::directed(node_count, &edges).expect("test edge out of range")
}

pub fn build_undirected_test_graph(node_count: usize, edges: Vec<(u32, u32)>) -> Graph {
    Graph::undirected(node_count, &edges).expect("test edge out of range")
}

/// One string per row.
pub fn char_grid(rows: &[&str]) -> Grid<char> {
    Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).expect("ragged test grid")
}

pub fn int_grid<T: Copy, const C: usize>(rows: &[[T; C]]) -> Grid<T> {
    Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).expect("ragged test grid")
}
