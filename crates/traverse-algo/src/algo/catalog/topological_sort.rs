// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.topological_sort procedure implementation.

use crate::algo::algorithms::{Algorithm, TopologicalSort};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use anyhow::{Result, anyhow};
use serde_json::json;

pub struct TopologicalSortAdapter;

impl AlgoAdapter for TopologicalSortAdapter {
    const NAME: &'static str = "traverse.topological_sort";
    type Algo = TopologicalSort;

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("nodeId", ValueType::Int), ("order", ValueType::Int)]
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        if result.has_cycle {
            return Err(anyhow!(
                "Graph has a cycle, topological sort is not possible"
            ));
        }

        Ok(result
            .sorted_nodes
            .into_iter()
            .enumerate()
            .map(|(i, node)| AlgoResultRow {
                values: vec![json!(node), json!(i)],
            })
            .collect())
    }
}

pub type TopologicalSortProcedure = GenericAlgoProcedure<TopologicalSortAdapter>;
