// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Core algorithm trait and the traversal policies built on it.

/// Core trait for all traversal policies.
pub trait Algorithm: Send + Sync {
    /// What the policy runs over: a [`traverse_common::Graph`] or a grid.
    type Input;
    /// Algorithm parameters.
    type Config: Default + Clone + Send + 'static;
    /// Result type.
    type Result: Send + 'static;

    /// Algorithm identifier.
    fn name() -> &'static str;

    /// Execute the policy.
    ///
    /// Only out-of-range queries and opt-in limits fail; a missing path or
    /// property is reported through `Self::Result`.
    fn run(input: &Self::Input, config: Self::Config) -> traverse_common::Result<Self::Result>;
}

mod bipartite_check;
pub use bipartite_check::{BipartiteCheck, BipartiteCheckConfig, BipartiteCheckResult};

mod cycle_detection;
pub use cycle_detection::{BfsCycleCheck, CycleCheckConfig, CycleCheckResult, DfsCycleCheck};

mod min_passes;
pub use min_passes::{MinPasses, MinPassesConfig, MinPassesResult};

mod mine_distance;
pub use mine_distance::{MineDistance, MineDistanceConfig, MineDistanceResult};

mod jump_path;
pub use jump_path::{JumpPath, JumpPathConfig, JumpPathResult};

mod safe_route;
pub use safe_route::{SafeRoute, SafeRouteConfig, SafeRouteResult};

mod max_cost_path;
pub use max_cost_path::{MaxCostPath, MaxCostPathConfig, MaxCostPathResult};

mod transitive_closure;
pub use transitive_closure::{TransitiveClosure, TransitiveClosureConfig, TransitiveClosureResult};

mod bridges;
pub use bridges::{Bridges, BridgesConfig, BridgesResult};

mod strong_connectivity;
pub use strong_connectivity::{
    StrongConnectivity, StrongConnectivityConfig, StrongConnectivityOnePass,
    StrongConnectivityResult,
};

mod dag_check;
pub use dag_check::{DagCheck, DagCheckConfig, DagCheckResult};

mod topological_sort;
pub use topological_sort::{TopologicalSort, TopologicalSortConfig, TopologicalSortResult};

mod tree_check;
pub use tree_check::{TreeCheck, TreeCheckConfig, TreeCheckResult};

mod iterative_dfs;
pub use iterative_dfs::{IterativeDfs, IterativeDfsConfig, IterativeDfsResult};

mod word_search;
pub use word_search::{WordSearch, WordSearchConfig, WordSearchResult};

mod reachable_path;
pub use reachable_path::{ReachablePath, ReachablePathConfig, ReachablePathResult};

mod boggle;
pub use boggle::{Boggle, BoggleConfig, BoggleResult};

mod replace_border_zeros;
pub use replace_border_zeros::{
    ReplaceBorderZeros, ReplaceBorderZerosConfig, ReplaceBorderZerosResult, replace_border_zeros,
};
