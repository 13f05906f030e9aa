// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Traversal engine shared by every policy.
//!
//! Nodes are dense `usize` indices. Graph nodes map directly; grid cells map
//! through `Grid::index_of`. Three drivers are provided:
//!
//! - [`Traversal`]: frontier-driven search with a [`Visitor`]. Breadth-first
//!   marks nodes when they are enqueued (first discoverer wins, visits come
//!   out in non-decreasing distance order). Depth-first uses a plain stack,
//!   marks nodes when they are popped and skips nodes popped a second time.
//! - [`DepthFirst`]: explicit-stack DFS reporting [`DfsEvent`]s with
//!   arrival/departure timestamps. Policies that need low-link values or
//!   departure order build them from these events.
//! - [`expand_layers`]: breadth-first expansion with no global visited set,
//!   for searches whose payload carries its own path-local state.
//!
//! None of the drivers recurse, so depth is bounded by heap memory only.

use std::collections::VecDeque;
use std::ops::ControlFlow;
use traverse_common::Graph;
use tracing::trace;

/// Per-node lifecycle during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    #[default]
    Unvisited,
    Discovered,
    /// On the active DFS path.
    Processing,
    /// DFS subtree fully explored.
    Finished,
}

/// Why a traversal returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination<B> {
    /// The frontier drained.
    Exhausted,
    /// A callback asked to stop early.
    Stopped(B),
}

impl<B> Termination<B> {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Termination::Exhausted)
    }

    pub fn stopped(self) -> Option<B> {
        match self {
            Termination::Stopped(value) => Some(value),
            Termination::Exhausted => None,
        }
    }
}

/// Pending-work container. Queue order gives breadth-first, stack order
/// depth-first.
pub trait Frontier<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Frontier<T> for VecDeque<T> {
    fn push(&mut self, item: T) {
        self.push_back(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Frontier<T> for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Discovery tracker over dense node indices.
#[derive(Debug, Clone)]
pub struct VisitState {
    states: Vec<NodeState>,
}

impl VisitState {
    pub fn new(node_count: usize) -> Self {
        Self {
            states: vec![NodeState::Unvisited; node_count],
        }
    }

    #[inline]
    pub fn state(&self, node: usize) -> NodeState {
        self.states[node]
    }

    #[inline]
    pub fn is_unvisited(&self, node: usize) -> bool {
        self.states[node] == NodeState::Unvisited
    }

    /// Marks `node` discovered. Returns `false` if it was already seen.
    #[inline]
    pub fn discover(&mut self, node: usize) -> bool {
        if self.states[node] == NodeState::Unvisited {
            self.states[node] = NodeState::Discovered;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn set(&mut self, node: usize, state: NodeState) {
        self.states[node] = state;
    }

    pub fn discovered_count(&self) -> usize {
        self.states
            .iter()
            .filter(|&&s| s != NodeState::Unvisited)
            .count()
    }

    pub fn all_discovered(&self) -> bool {
        self.states.iter().all(|&s| s != NodeState::Unvisited)
    }
}

/// Callbacks driven by [`Traversal`].
pub trait Visitor {
    /// State inherited from the node a neighbor was discovered through.
    type Payload;
    /// Value returned when the visitor stops the traversal early.
    type Break;

    /// Push the neighbors of `node` onto `out`, in the order they should be
    /// explored. Neighbor filtering (walls, unsafe cells) happens here.
    fn neighbors(&mut self, node: usize, payload: &Self::Payload, out: &mut Vec<usize>);

    /// Called once per node when it is taken off the frontier.
    fn visit(&mut self, _node: usize, _payload: &Self::Payload) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// Called for an edge to a node that has not been marked yet; returns the
    /// payload the target is queued with.
    ///
    /// Under the depth-first discipline a node can be pushed more than once,
    /// so this may run several times for the same target.
    fn discover(&mut self, from: usize, payload: &Self::Payload, to: usize) -> Self::Payload;

    /// Called for an edge whose target was already marked.
    fn revisit(
        &mut self,
        _from: usize,
        _payload: &Self::Payload,
        _to: usize,
    ) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
}

/// Frontier order used by a [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// FIFO frontier; marked on enqueue.
    BreadthFirst,
    /// LIFO frontier; marked on pop, duplicates skipped.
    DepthFirst,
}

/// Frontier-driven traversal. Discovery state persists across [`Traversal::run`]
/// calls, so a caller can sweep every component by re-seeding with the next
/// unvisited node.
#[derive(Debug, Clone)]
pub struct Traversal {
    discipline: Discipline,
    state: VisitState,
}

impl Traversal {
    pub fn breadth_first(node_count: usize) -> Self {
        Self {
            discipline: Discipline::BreadthFirst,
            state: VisitState::new(node_count),
        }
    }

    pub fn depth_first(node_count: usize) -> Self {
        Self {
            discipline: Discipline::DepthFirst,
            state: VisitState::new(node_count),
        }
    }

    pub fn state(&self) -> &VisitState {
        &self.state
    }

    /// Run from `sources`. Multiple sources start together at the same depth.
    pub fn run<V: Visitor>(
        &mut self,
        sources: impl IntoIterator<Item = (usize, V::Payload)>,
        visitor: &mut V,
    ) -> Termination<V::Break> {
        match self.discipline {
            Discipline::BreadthFirst => self.drive(VecDeque::new(), sources, visitor),
            Discipline::DepthFirst => self.drive(Vec::new(), sources, visitor),
        }
    }

    fn drive<F, V>(
        &mut self,
        mut frontier: F,
        sources: impl IntoIterator<Item = (usize, V::Payload)>,
        visitor: &mut V,
    ) -> Termination<V::Break>
    where
        F: Frontier<(usize, V::Payload)>,
        V: Visitor,
    {
        let stack_order = self.discipline == Discipline::DepthFirst;

        if stack_order {
            let mut seeds: Vec<_> = sources.into_iter().collect();
            while let Some(seed) = seeds.pop() {
                frontier.push(seed);
            }
        } else {
            for (node, payload) in sources {
                if self.state.discover(node) {
                    frontier.push((node, payload));
                }
            }
        }

        let mut neighbors = Vec::new();
        let mut visited = 0usize;

        let termination = 'search: loop {
            let Some((node, payload)) = frontier.pop() else {
                break Termination::Exhausted;
            };
            if stack_order && !self.state.discover(node) {
                continue;
            }
            visited += 1;

            if let ControlFlow::Break(value) = visitor.visit(node, &payload) {
                break Termination::Stopped(value);
            }

            neighbors.clear();
            visitor.neighbors(node, &payload, &mut neighbors);
            if stack_order {
                neighbors.reverse();
            }

            for &next in &neighbors {
                let unmarked = if stack_order {
                    self.state.is_unvisited(next)
                } else {
                    self.state.discover(next)
                };
                if unmarked {
                    let inherited = visitor.discover(node, &payload, next);
                    frontier.push((next, inherited));
                } else if let ControlFlow::Break(value) = visitor.revisit(node, &payload, next) {
                    break 'search Termination::Stopped(value);
                }
            }
        };

        trace!(
            discipline = ?self.discipline,
            visited,
            stopped = !termination.is_exhausted(),
            "traversal finished"
        );
        termination
    }
}

/// Breadth-first traversal from `sources` over `node_count` nodes.
pub fn breadth_first<V: Visitor>(
    node_count: usize,
    sources: impl IntoIterator<Item = (usize, V::Payload)>,
    visitor: &mut V,
) -> Termination<V::Break> {
    Traversal::breadth_first(node_count).run(sources, visitor)
}

/// Stack-driven depth-first traversal from `sources` over `node_count` nodes.
pub fn depth_first_stack<V: Visitor>(
    node_count: usize,
    sources: impl IntoIterator<Item = (usize, V::Payload)>,
    visitor: &mut V,
) -> Termination<V::Break> {
    Traversal::depth_first(node_count).run(sources, visitor)
}

/// Breadth-first expansion with no global visited set.
///
/// `expand` receives each dequeued item and pushes the items derived from it;
/// nothing is pruned by the engine, so the payload must carry whatever
/// path-local state keeps the search finite.
pub fn expand_layers<T, B>(
    seeds: impl IntoIterator<Item = T>,
    expand: impl FnMut(T, &mut Vec<T>) -> ControlFlow<B>,
) -> Termination<B> {
    expand_with(VecDeque::new(), false, seeds, expand)
}

/// Depth-first counterpart of [`expand_layers`].
///
/// Children are explored in the order `expand` pushes them, matching the
/// order a recursive search over the same children would take.
pub fn expand_depth_first<T, B>(
    seeds: impl IntoIterator<Item = T>,
    expand: impl FnMut(T, &mut Vec<T>) -> ControlFlow<B>,
) -> Termination<B> {
    expand_with(Vec::new(), true, seeds, expand)
}

fn expand_with<F, T, B>(
    mut frontier: F,
    stack_order: bool,
    seeds: impl IntoIterator<Item = T>,
    mut expand: impl FnMut(T, &mut Vec<T>) -> ControlFlow<B>,
) -> Termination<B>
where
    F: Frontier<T>,
{
    let mut pending: Vec<T> = seeds.into_iter().collect();
    if stack_order {
        pending.reverse();
    }
    for seed in pending {
        frontier.push(seed);
    }

    let mut children = Vec::new();
    let mut expanded = 0usize;
    while let Some(item) = frontier.pop() {
        expanded += 1;
        if let ControlFlow::Break(value) = expand(item, &mut children) {
            trace!(expanded, "expansion stopped");
            return Termination::Stopped(value);
        }
        if stack_order {
            children.reverse();
        }
        for child in children.drain(..) {
            frontier.push(child);
        }
    }

    trace!(expanded, "expansion finished");
    Termination::Exhausted
}

/// Events reported by [`DepthFirst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// `node` entered the active path; `time` is its arrival timestamp.
    Discover {
        node: usize,
        parent: Option<usize>,
        time: u32,
    },
    /// Edge to an unvisited node; a `Discover` for `to` follows.
    TreeEdge { from: usize, to: usize },
    /// Edge to a node already seen. `target` is `Processing` for a back edge
    /// and `Finished` for forward/cross edges. `to_parent` is set on the first
    /// occurrence of `from`'s own tree parent, i.e. the reverse of the tree
    /// edge in an undirected graph.
    NonTreeEdge {
        from: usize,
        to: usize,
        target: NodeState,
        to_parent: bool,
    },
    /// Every edge of `node` has been explored; `time` is its departure timestamp.
    Finish {
        node: usize,
        parent: Option<usize>,
        time: u32,
    },
}

struct Frame {
    node: usize,
    parent: Option<usize>,
    neighbors: Vec<usize>,
    cursor: usize,
    parent_skipped: bool,
}

/// Explicit-stack depth-first search.
///
/// A single clock advances on every discover and every finish. State carries
/// across [`DepthFirst::run`] calls so a sweep over all roots shares one clock.
#[derive(Debug, Clone)]
pub struct DepthFirst {
    state: VisitState,
    time: u32,
}

impl DepthFirst {
    pub fn new(node_count: usize) -> Self {
        Self {
            state: VisitState::new(node_count),
            time: 0,
        }
    }

    pub fn state(&self) -> &VisitState {
        &self.state
    }

    /// DFS from each unvisited root in turn.
    pub fn run<N, V, B>(
        &mut self,
        roots: impl IntoIterator<Item = usize>,
        mut neighbors: N,
        mut visit: V,
    ) -> Termination<B>
    where
        N: FnMut(usize, &mut Vec<usize>),
        V: FnMut(DfsEvent) -> ControlFlow<B>,
    {
        let mut stack: Vec<Frame> = Vec::new();

        for root in roots {
            if !self.state.is_unvisited(root) {
                continue;
            }
            if let ControlFlow::Break(value) =
                self.enter(root, None, &mut stack, &mut neighbors, &mut visit)
            {
                return Termination::Stopped(value);
            }

            while let Some(frame) = stack.last_mut() {
                let next = frame.neighbors.get(frame.cursor).copied();
                match next {
                    Some(to) => {
                        frame.cursor += 1;
                        let from = frame.node;
                        let target = self.state.state(to);

                        let event = if target == NodeState::Unvisited {
                            DfsEvent::TreeEdge { from, to }
                        } else {
                            let to_parent = !frame.parent_skipped && frame.parent == Some(to);
                            if to_parent {
                                frame.parent_skipped = true;
                            }
                            DfsEvent::NonTreeEdge {
                                from,
                                to,
                                target,
                                to_parent,
                            }
                        };

                        if let ControlFlow::Break(value) = visit(event) {
                            return Termination::Stopped(value);
                        }
                        if target == NodeState::Unvisited
                            && let ControlFlow::Break(value) =
                                self.enter(to, Some(from), &mut stack, &mut neighbors, &mut visit)
                        {
                            return Termination::Stopped(value);
                        }
                    }
                    None => {
                        let Some(done) = stack.pop() else { break };
                        self.state.set(done.node, NodeState::Finished);
                        let time = self.tick();
                        if let ControlFlow::Break(value) = visit(DfsEvent::Finish {
                            node: done.node,
                            parent: done.parent,
                            time,
                        }) {
                            return Termination::Stopped(value);
                        }
                    }
                }
            }
        }

        Termination::Exhausted
    }

    fn enter<N, V, B>(
        &mut self,
        node: usize,
        parent: Option<usize>,
        stack: &mut Vec<Frame>,
        neighbors: &mut N,
        visit: &mut V,
    ) -> ControlFlow<B>
    where
        N: FnMut(usize, &mut Vec<usize>),
        V: FnMut(DfsEvent) -> ControlFlow<B>,
    {
        self.state.set(node, NodeState::Processing);
        let time = self.tick();

        let mut list = Vec::new();
        neighbors(node, &mut list);
        stack.push(Frame {
            node,
            parent,
            neighbors: list,
            cursor: 0,
            parent_skipped: false,
        });

        visit(DfsEvent::Discover { node, parent, time })
    }

    fn tick(&mut self) -> u32 {
        let now = self.time;
        self.time += 1;
        now
    }
}

/// Depth-first search from `roots` over `node_count` nodes.
pub fn depth_first<N, V, B>(
    node_count: usize,
    roots: impl IntoIterator<Item = usize>,
    neighbors: N,
    visit: V,
) -> Termination<B>
where
    N: FnMut(usize, &mut Vec<usize>),
    V: FnMut(DfsEvent) -> ControlFlow<B>,
{
    DepthFirst::new(node_count).run(roots, neighbors, visit)
}

/// Neighbor generator over a graph's outbound adjacency.
pub fn out_neighbors(graph: &Graph) -> impl FnMut(usize, &mut Vec<usize>) + '_ {
    move |node, out| out.extend(graph.neighbors(node as u32).iter().map(|&v| v as usize))
}

/// Neighbor generator over a graph's inbound adjacency.
pub fn in_neighbors(graph: &Graph) -> impl FnMut(usize, &mut Vec<usize>) + '_ {
    move |node, out| out.extend(graph.in_neighbors(node as u32).iter().map(|&v| v as usize))
}

/// Neighbor generator over the underlying undirected graph: outbound arcs,
/// followed by inbound arcs when the graph is directed.
pub fn undirected_neighbors(graph: &Graph) -> impl FnMut(usize, &mut Vec<usize>) + '_ {
    move |node, out| {
        out.extend(graph.neighbors(node as u32).iter().map(|&v| v as usize));
        if graph.is_directed() {
            out.extend(graph.in_neighbors(node as u32).iter().map(|&v| v as usize));
        }
    }
}

/// Arrival and departure times of a DFS sweeping every node in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsTimestamps {
    pub arrival: Vec<u32>,
    pub departure: Vec<u32>,
    /// Nodes in the order they finished.
    pub finish_order: Vec<u32>,
}

pub fn depth_first_timestamps(graph: &Graph) -> DfsTimestamps {
    let n = graph.node_count();
    let mut arrival = vec![0u32; n];
    let mut departure = vec![0u32; n];
    let mut finish_order = Vec::with_capacity(n);

    let _ = depth_first::<_, _, ()>(n, 0..n, out_neighbors(graph), |event| {
        match event {
            DfsEvent::Discover { node, time, .. } => arrival[node] = time,
            DfsEvent::Finish { node, time, .. } => {
                departure[node] = time;
                finish_order.push(node as u32);
            }
            _ => {}
        }
        ControlFlow::Continue(())
    });

    DfsTimestamps {
        arrival,
        departure,
        finish_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::test_utils::{build_test_graph, build_undirected_test_graph};

    /// Records BFS levels over a graph.
    struct Levels<'a> {
        graph: &'a Graph,
        order: Vec<(usize, u32)>,
    }

    impl Visitor for Levels<'_> {
        type Payload = u32;
        type Break = ();

        fn neighbors(&mut self, node: usize, _level: &u32, out: &mut Vec<usize>) {
            out.extend(self.graph.neighbors(node as u32).iter().map(|&v| v as usize));
        }

        fn visit(&mut self, node: usize, level: &u32) -> ControlFlow<()> {
            self.order.push((node, *level));
            ControlFlow::Continue(())
        }

        fn discover(&mut self, _from: usize, level: &u32, _to: usize) -> u32 {
            level + 1
        }
    }

    #[test]
    fn test_breadth_first_levels_are_monotone() {
        // 0 -> 1 -> 3, 0 -> 2 -> 3 -> 4
        let graph = build_test_graph(5, vec![(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
        let mut levels = Levels {
            graph: &graph,
            order: Vec::new(),
        };

        let termination = breadth_first(5, [(0, 0)], &mut levels);
        assert!(termination.is_exhausted());
        assert_eq!(levels.order, vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 3)]);
    }

    #[test]
    fn test_multi_source_first_discoverer_wins() {
        // 0 - 1 - 2 - 3 - 4, sources 0 and 4
        let graph = build_undirected_test_graph(5, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
        let mut levels = Levels {
            graph: &graph,
            order: Vec::new(),
        };

        breadth_first(5, [(0, 0), (4, 0)], &mut levels);
        let mut by_node = levels.order.clone();
        by_node.sort();
        assert_eq!(by_node, vec![(0, 0), (1, 1), (2, 2), (3, 1), (4, 0)]);
    }

    #[test]
    fn test_depth_first_stack_matches_recursive_order() {
        // 0 -> 1 -> 3, 0 -> 2, 1 -> 2
        let graph = build_test_graph(4, vec![(0, 1), (0, 2), (1, 3), (1, 2)]);
        let mut levels = Levels {
            graph: &graph,
            order: Vec::new(),
        };

        let mut traversal = Traversal::depth_first(4);
        traversal.run([(0, 0)], &mut levels);
        let order: Vec<usize> = levels.order.iter().map(|&(n, _)| n).collect();
        // node 2 is pushed twice (from 0 and from 1) but processed once
        assert_eq!(order, vec![0, 1, 3, 2]);
        assert!(traversal.state().all_discovered());
    }

    #[test]
    fn test_stop_is_reported() {
        struct StopAt(usize);
        impl Visitor for StopAt {
            type Payload = ();
            type Break = usize;
            fn neighbors(&mut self, node: usize, _: &(), out: &mut Vec<usize>) {
                if node < 9 {
                    out.push(node + 1);
                }
            }
            fn visit(&mut self, node: usize, _: &()) -> ControlFlow<usize> {
                if node == self.0 {
                    ControlFlow::Break(node)
                } else {
                    ControlFlow::Continue(())
                }
            }
            fn discover(&mut self, _: usize, _: &(), _: usize) {}
        }

        let result = breadth_first(10, [(0, ())], &mut StopAt(6));
        assert_eq!(result, Termination::Stopped(6));
    }

    #[test]
    fn test_depth_first_events_and_timestamps() {
        // 0 -> 1 -> 2 -> 0 (back edge), 0 -> 3
        let graph = build_test_graph(4, vec![(0, 1), (1, 2), (2, 0), (0, 3)]);
        let mut events = Vec::new();
        let result = depth_first::<_, _, ()>(4, [0], out_neighbors(&graph), |event| {
            events.push(event);
            ControlFlow::Continue(())
        });
        assert!(result.is_exhausted());

        assert!(events.contains(&DfsEvent::NonTreeEdge {
            from: 2,
            to: 0,
            target: NodeState::Processing,
            to_parent: false,
        }));
        assert_eq!(
            events.last(),
            Some(&DfsEvent::Finish {
                node: 0,
                parent: None,
                time: 7
            })
        );

        let stamps = depth_first_timestamps(&graph);
        assert_eq!(stamps.arrival, vec![0, 1, 2, 5]);
        assert_eq!(stamps.departure, vec![7, 4, 3, 6]);
        assert_eq!(stamps.finish_order, vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_reverse_tree_edge_is_flagged_once() {
        // Two parallel edges between 0 and 1.
        let graph = build_undirected_test_graph(2, vec![(0, 1), (0, 1)]);
        let mut flags = Vec::new();
        depth_first::<_, _, ()>(2, [0], out_neighbors(&graph), |event| {
            if let DfsEvent::NonTreeEdge {
                from, to_parent, ..
            } = event
            {
                flags.push((from, to_parent));
            }
            ControlFlow::Continue(())
        });
        // At node 1: first edge back to 0 is the tree edge, the second is a real cycle.
        assert_eq!(flags[0], (1, true));
        assert_eq!(flags[1], (1, false));
    }

    #[test]
    fn test_expand_depth_first_keeps_push_order() {
        // binary tree over 1..=7 labelled in heap order
        let mut order = Vec::new();
        let result = expand_depth_first::<_, ()>([1u32], |node, out| {
            order.push(node);
            if node < 4 {
                out.push(node * 2);
                out.push(node * 2 + 1);
            }
            ControlFlow::Continue(())
        });
        assert!(result.is_exhausted());
        assert_eq!(order, vec![1, 2, 4, 5, 3, 6, 7]);
    }

    #[test]
    fn test_expand_layers_does_not_prune() {
        // Count every walk of length <= 2 from node 0 on a triangle.
        let graph = build_undirected_test_graph(3, vec![(0, 1), (1, 2), (2, 0)]);
        let mut seen = 0;
        let result = expand_layers::<_, ()>([(0u32, 0u32)], |(node, depth), out| {
            seen += 1;
            if depth < 2 {
                out.extend(graph.neighbors(node).iter().map(|&v| (v, depth + 1)));
            }
            ControlFlow::Continue(())
        });
        assert!(result.is_exhausted());
        assert_eq!(seen, 1 + 2 + 4);
    }
}
