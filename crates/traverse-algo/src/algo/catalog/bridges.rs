// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.bridges procedure implementation.

use crate::algo::algorithms::{Algorithm, Bridges};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use anyhow::Result;
use serde_json::json;

pub struct BridgesAdapter;

impl AlgoAdapter for BridgesAdapter {
    const NAME: &'static str = "traverse.bridges";
    type Algo = Bridges;

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("source", ValueType::Int), ("target", ValueType::Int)]
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(result
            .bridges
            .into_iter()
            .map(|(src, dst)| AlgoResultRow {
                values: vec![json!(src), json!(dst)],
            })
            .collect())
    }
}

pub type BridgesProcedure = GenericAlgoProcedure<BridgesAdapter>;
