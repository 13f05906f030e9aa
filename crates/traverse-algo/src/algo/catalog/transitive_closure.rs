// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.transitive_closure procedure implementation.

use crate::algo::algorithms::{Algorithm, TransitiveClosure};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use anyhow::Result;
use serde_json::json;

pub struct TransitiveClosureAdapter;

impl AlgoAdapter for TransitiveClosureAdapter {
    const NAME: &'static str = "traverse.transitive_closure";
    type Algo = TransitiveClosure;

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("nodeId", ValueType::Int), ("reachable", ValueType::List)]
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(result
            .reachable
            .into_iter()
            .enumerate()
            .map(|(node, row)| {
                let targets: Vec<usize> = row
                    .iter()
                    .enumerate()
                    .filter_map(|(target, &reached)| reached.then_some(target))
                    .collect();
                AlgoResultRow {
                    values: vec![json!(node), json!(targets)],
                }
            })
            .collect())
    }
}

pub type TransitiveClosureProcedure = GenericAlgoProcedure<TransitiveClosureAdapter>;
