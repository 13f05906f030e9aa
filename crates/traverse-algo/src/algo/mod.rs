// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Traversal Engine and Policies
//!
//! # Architecture
//!
//! - **traversal**: the shared BFS/DFS engine. Breadth-first and stack
//!   depth-first runs are driven through a [`traversal::Visitor`]; the
//!   event-emitting [`traversal::DepthFirst`] reports discover, edge and
//!   finish events for timestamp and low-link policies.
//! - **algorithms**: one [`algorithms::Algorithm`] per problem, each a thin
//!   policy over the engine.
//! - **procedures**: named, JSON-argument entry points dispatched through
//!   [`AlgorithmRegistry`].
//!
//! # Example
//!
//! ```
//! use traverse_algo::algo::algorithms::{Algorithm, Bridges, BridgesConfig};
//! use traverse_common::Graph;
//!
//! let graph = Graph::undirected(3, &[(0, 1), (1, 2)]).unwrap();
//! let result = Bridges::run(&graph, BridgesConfig::default()).unwrap();
//! assert_eq!(result.bridges, vec![(0, 1), (1, 2)]);
//! ```

pub mod algorithms;
mod catalog;
pub mod procedure_template;
pub mod procedures;
pub mod traversal;

#[cfg(test)]
pub mod test_utils;

use std::collections::HashMap;
use std::sync::Arc;

/// Algorithm registry for procedure dispatch
pub struct AlgorithmRegistry {
    procedures: HashMap<String, Arc<dyn procedures::AlgoProcedure>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            procedures: HashMap::default(),
        };

        // Register built-in policies
        registry.register(catalog::BipartiteCheckProcedure::default());
        registry.register(catalog::BfsCycleCheckProcedure::default());
        registry.register(catalog::DfsCycleCheckProcedure::default());
        registry.register(catalog::MinPassesProcedure::default());
        registry.register(catalog::MineDistanceProcedure::default());
        registry.register(catalog::JumpPathProcedure::default());
        registry.register(catalog::SafeRouteProcedure::default());
        registry.register(catalog::MaxCostPathProcedure::default());
        registry.register(catalog::TransitiveClosureProcedure::default());
        registry.register(catalog::BridgesProcedure::default());
        registry.register(catalog::StrongConnectivityProcedure::default());
        registry.register(catalog::StrongConnectivityOnePassProcedure::default());
        registry.register(catalog::DagCheckProcedure::default());
        registry.register(catalog::TopologicalSortProcedure::default());
        registry.register(catalog::TreeCheckProcedure::default());
        registry.register(catalog::IterativeDfsProcedure::default());
        registry.register(catalog::WordSearchProcedure::default());
        registry.register(catalog::ReachablePathProcedure::default());
        registry.register(catalog::BoggleProcedure::default());
        registry.register(catalog::ReplaceBorderZerosProcedure::default());

        registry
    }

    pub fn register<P: procedures::AlgoProcedure + 'static>(&mut self, proc: P) {
        self.procedures
            .insert(proc.name().to_string(), Arc::new(proc));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn procedures::AlgoProcedure>> {
        self.procedures.get(name).cloned()
    }

    /// Registered procedure names, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.procedures.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Look up `name` and execute it with `args`.
    pub fn call(
        &self,
        ctx: &procedures::AlgoContext,
        name: &str,
        args: Vec<serde_json::Value>,
    ) -> anyhow::Result<Vec<procedures::AlgoResultRow>> {
        let procedure = self
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Procedure '{}' not found", name))?;
        procedure.execute(ctx, args)
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Limits applied when procedures materialize their input literals.
#[derive(Debug, Clone)]
pub struct AlgorithmConfig {
    /// Maximum nodes in a graph argument
    pub max_vertices: usize,
    /// Maximum cells in a grid argument
    pub max_grid_cells: usize,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            max_vertices: 1_000_000,
            max_grid_cells: 1_000_000,
        }
    }
}
