// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Procedure adapters exposing each policy as `traverse.<name>`.

mod bipartite_check;
pub use bipartite_check::BipartiteCheckProcedure;

mod cycle_detection;
pub use cycle_detection::{BfsCycleCheckProcedure, DfsCycleCheckProcedure};

mod min_passes;
pub use min_passes::MinPassesProcedure;

mod mine_distance;
pub use mine_distance::MineDistanceProcedure;

mod jump_path;
pub use jump_path::JumpPathProcedure;

mod safe_route;
pub use safe_route::SafeRouteProcedure;

mod max_cost_path;
pub use max_cost_path::MaxCostPathProcedure;

mod transitive_closure;
pub use transitive_closure::TransitiveClosureProcedure;

mod bridges;
pub use bridges::BridgesProcedure;

mod strong_connectivity;
pub use strong_connectivity::{StrongConnectivityOnePassProcedure, StrongConnectivityProcedure};

mod dag_check;
pub use dag_check::DagCheckProcedure;

mod topological_sort;
pub use topological_sort::TopologicalSortProcedure;

mod tree_check;
pub use tree_check::TreeCheckProcedure;

mod iterative_dfs;
pub use iterative_dfs::IterativeDfsProcedure;

mod word_search;
pub use word_search::WordSearchProcedure;

mod reachable_path;
pub use reachable_path::ReachablePathProcedure;

mod boggle;
pub use boggle::BoggleProcedure;

mod replace_border_zeros;
pub use replace_border_zeros::ReplaceBorderZerosProcedure;
