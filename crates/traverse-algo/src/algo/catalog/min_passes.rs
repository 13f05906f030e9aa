// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.min_passes procedure implementation.

use crate::algo::algorithms::{Algorithm, MinPasses};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use anyhow::Result;
use serde_json::json;

pub struct MinPassesAdapter;

impl AlgoAdapter for MinPassesAdapter {
    const NAME: &'static str = "traverse.min_passes";
    type Algo = MinPasses;

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("passes", ValueType::Int), ("grid", ValueType::Grid)]
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(vec![AlgoResultRow {
            values: vec![json!(result.passes), json!(result.converted.to_rows())],
        }])
    }
}

pub type MinPassesProcedure = GenericAlgoProcedure<MinPassesAdapter>;
