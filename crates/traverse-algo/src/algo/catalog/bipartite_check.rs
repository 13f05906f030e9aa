// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.bipartite_check procedure implementation.

use crate::algo::algorithms::{Algorithm, BipartiteCheck};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use anyhow::Result;
use serde_json::{Value, json};

pub struct BipartiteCheckAdapter;

impl AlgoAdapter for BipartiteCheckAdapter {
    const NAME: &'static str = "traverse.bipartite_check";
    type Algo = BipartiteCheck;

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![
            ("isBipartite", ValueType::Bool),
            ("partition", ValueType::Map),
        ]
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        let partition: serde_json::Map<String, Value> = result
            .partition
            .into_iter()
            .map(|(node, color)| (node.to_string(), json!(color)))
            .collect();

        Ok(vec![AlgoResultRow {
            values: vec![json!(result.is_bipartite), Value::Object(partition)],
        }])
    }
}

pub type BipartiteCheckProcedure = GenericAlgoProcedure<BipartiteCheckAdapter>;
