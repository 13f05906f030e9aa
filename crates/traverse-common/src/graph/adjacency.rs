// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Adjacency-list graph in CSR form.
//!
//! Nodes are dense `u32` indices `0..n`. Each node's neighbors are stored
//! contiguously in insertion order, so every traversal over the same graph
//! sees the same neighbor sequence. Directed graphs also keep the reverse
//! (inbound) adjacency for algorithms that walk edges backwards.

use crate::api::error::{Result, TraversalError};
use tracing::debug;

/// Edge list for CSR construction: (source, destination, weight) triples.
type WeightedEdgeList = Vec<(u32, u32, i64)>;

/// Immutable adjacency-list graph.
#[derive(Debug, Clone)]
pub struct Graph {
    node_count: usize,
    directed: bool,

    /// Outbound edges: CSR format
    out_offsets: Vec<u32>, // [V+1] node -> edge start
    out_neighbors: Vec<u32>, // [E] neighbor ids

    /// Inbound edges: CSR format (directed graphs only)
    in_offsets: Vec<u32>, // [V+1]
    in_neighbors: Vec<u32>, // [E]

    /// Optional edge weights, parallel to `out_neighbors`
    out_weights: Option<Vec<i64>>,
}

impl Graph {
    /// Directed, unweighted graph from an edge list.
    pub fn directed(node_count: usize, edges: &[(u32, u32)]) -> Result<Self> {
        GraphBuilder::directed(node_count).edges(edges).build()
    }

    /// Undirected, unweighted graph from an edge list.
    pub fn undirected(node_count: usize, edges: &[(u32, u32)]) -> Result<Self> {
        GraphBuilder::undirected(node_count).edges(edges).build()
    }

    /// Undirected graph with integer edge weights.
    pub fn weighted_undirected(node_count: usize, edges: &[(u32, u32, i64)]) -> Result<Self> {
        let mut builder = GraphBuilder::undirected(node_count);
        for &(src, dst, weight) in edges {
            builder = builder.weighted_edge(src, dst, weight);
        }
        builder.build()
    }

    /// Number of nodes in the graph.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of stored adjacency entries. An undirected edge counts twice.
    #[inline]
    pub fn arc_count(&self) -> usize {
        self.out_neighbors.len()
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Outbound neighbors of a node, in insertion order.
    ///
    /// Panics if `node` is out of range; use [`Graph::check_node`] first for
    /// untrusted input.
    #[inline]
    pub fn neighbors(&self, node: u32) -> &[u32] {
        let start = self.out_offsets[node as usize] as usize;
        let end = self.out_offsets[node as usize + 1] as usize;
        &self.out_neighbors[start..end]
    }

    /// Outbound degree of a node.
    #[inline]
    pub fn degree(&self, node: u32) -> u32 {
        self.out_offsets[node as usize + 1] - self.out_offsets[node as usize]
    }

    /// Inbound neighbors of a node.
    ///
    /// For undirected graphs this is the same list as [`Graph::neighbors`].
    #[inline]
    pub fn in_neighbors(&self, node: u32) -> &[u32] {
        if !self.directed {
            return self.neighbors(node);
        }
        let start = self.in_offsets[node as usize] as usize;
        let end = self.in_offsets[node as usize + 1] as usize;
        &self.in_neighbors[start..end]
    }

    /// Outbound neighbors together with edge weights.
    ///
    /// Unweighted graphs report a weight of `1` for every edge.
    pub fn weighted_neighbors(&self, node: u32) -> impl Iterator<Item = (u32, i64)> + '_ {
        let start = self.out_offsets[node as usize] as usize;
        let end = self.out_offsets[node as usize + 1] as usize;
        (start..end).map(move |idx| {
            let weight = self.out_weights.as_ref().map_or(1, |w| w[idx]);
            (self.out_neighbors[idx], weight)
        })
    }

    #[inline]
    pub fn has_weights(&self) -> bool {
        self.out_weights.is_some()
    }

    /// Every stored arc as `(src, dst)`, grouped by source.
    pub fn arcs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.node_count as u32)
            .flat_map(move |src| self.neighbors(src).iter().map(move |&dst| (src, dst)))
    }

    /// Validates a node id supplied as a query parameter.
    pub fn check_node(&self, node: u32) -> Result<()> {
        if (node as usize) < self.node_count {
            Ok(())
        } else {
            Err(TraversalError::InvalidNode {
                node,
                node_count: self.node_count,
            })
        }
    }
}

/// Builder for a [`Graph`]. Edges are validated in [`GraphBuilder::build`].
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    node_count: usize,
    directed: bool,
    weighted: bool,
    edges: WeightedEdgeList,
}

impl GraphBuilder {
    pub fn directed(node_count: usize) -> Self {
        Self::new(node_count, true)
    }

    /// Each added edge is stored in both directions.
    pub fn undirected(node_count: usize) -> Self {
        Self::new(node_count, false)
    }

    fn new(node_count: usize, directed: bool) -> Self {
        Self {
            node_count,
            directed,
            weighted: false,
            edges: Vec::new(),
        }
    }

    /// Add an unweighted edge.
    pub fn edge(mut self, src: u32, dst: u32) -> Self {
        self.edges.push((src, dst, 1));
        self
    }

    /// Add several unweighted edges.
    pub fn edges(mut self, edges: &[(u32, u32)]) -> Self {
        self.edges
            .extend(edges.iter().map(|&(src, dst)| (src, dst, 1)));
        self
    }

    /// Add a weighted edge. Any weighted edge makes the whole graph weighted.
    pub fn weighted_edge(mut self, src: u32, dst: u32, weight: i64) -> Self {
        self.weighted = true;
        self.edges.push((src, dst, weight));
        self
    }

    /// Validate all edges and materialize the CSR arrays.
    pub fn build(self) -> Result<Graph> {
        for &(src, dst, _) in &self.edges {
            if src as usize >= self.node_count || dst as usize >= self.node_count {
                return Err(TraversalError::InvalidEdge {
                    src,
                    dst,
                    node_count: self.node_count,
                });
            }
        }

        let out_edges: WeightedEdgeList = if self.directed {
            self.edges.clone()
        } else {
            let mut both = Vec::with_capacity(self.edges.len() * 2);
            for &(src, dst, w) in &self.edges {
                both.push((src, dst, w));
                both.push((dst, src, w));
            }
            both
        };

        let (out_offsets, out_neighbors, out_weights) =
            build_csr(self.node_count, &out_edges, self.weighted);

        let (in_offsets, in_neighbors) = if self.directed {
            let reversed: WeightedEdgeList = self
                .edges
                .iter()
                .map(|&(src, dst, w)| (dst, src, w))
                .collect();
            let (offsets, neighbors, _) = build_csr(self.node_count, &reversed, false);
            (offsets, neighbors)
        } else {
            (vec![0; self.node_count + 1], Vec::new())
        };

        debug!(
            nodes = self.node_count,
            arcs = out_neighbors.len(),
            directed = self.directed,
            weighted = self.weighted,
            "built graph"
        );

        Ok(Graph {
            node_count: self.node_count,
            directed: self.directed,
            out_offsets,
            out_neighbors,
            in_offsets,
            in_neighbors,
            out_weights,
        })
    }
}

/// Counting-sort the edge list into CSR arrays. Stable: per-node neighbor
/// order matches the order edges appear in `edges`.
fn build_csr(
    node_count: usize,
    edges: &[(u32, u32, i64)],
    include_weights: bool,
) -> (Vec<u32>, Vec<u32>, Option<Vec<i64>>) {
    if node_count == 0 {
        return (vec![0], Vec::new(), include_weights.then(Vec::new));
    }

    // Count degrees
    let mut degrees = vec![0u32; node_count];
    for &(src, _, _) in edges {
        degrees[src as usize] += 1;
    }

    // Build offsets (prefix sum)
    let mut offsets = vec![0u32; node_count + 1];
    for i in 0..node_count {
        offsets[i + 1] = offsets[i] + degrees[i];
    }

    // Fill neighbors
    let mut neighbors = vec![0u32; edges.len()];
    let mut weights = include_weights.then(|| vec![0i64; edges.len()]);
    let mut current = offsets.clone();

    for &(src, dst, w) in edges {
        let idx = current[src as usize] as usize;
        neighbors[idx] = dst;
        if let Some(ws) = &mut weights {
            ws[idx] = w;
        }
        current[src as usize] += 1;
    }

    (offsets, neighbors, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let graph = Graph::directed(4, &[(0, 3), (0, 1), (2, 0), (0, 2)]).unwrap();
        assert_eq!(graph.neighbors(0), &[3, 1, 2]);
        assert_eq!(graph.neighbors(1), &[] as &[u32]);
        assert_eq!(graph.in_neighbors(0), &[2]);
        assert_eq!(graph.arc_count(), 4);
    }

    #[test]
    fn test_undirected_stores_both_directions() {
        let graph = Graph::undirected(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.in_neighbors(1), &[0, 2]);
        assert_eq!(graph.arc_count(), 4);
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_invalid_edge_is_rejected() {
        let err = Graph::directed(2, &[(0, 1), (1, 2)]).unwrap_err();
        assert_eq!(
            err,
            TraversalError::InvalidEdge {
                src: 1,
                dst: 2,
                node_count: 2
            }
        );
    }

    #[test]
    fn test_weights() {
        let graph = Graph::weighted_undirected(3, &[(0, 1, 5), (1, 2, -8)]).unwrap();
        let from_one: Vec<_> = graph.weighted_neighbors(1).collect();
        assert_eq!(from_one, vec![(0, 5), (2, -8)]);

        let unweighted = Graph::directed(2, &[(0, 1)]).unwrap();
        assert!(!unweighted.has_weights());
        assert_eq!(unweighted.weighted_neighbors(0).collect::<Vec<_>>(), vec![(1, 1)]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::directed(0, &[]).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.arcs().count(), 0);
        assert!(graph.check_node(0).is_err());
    }
}
