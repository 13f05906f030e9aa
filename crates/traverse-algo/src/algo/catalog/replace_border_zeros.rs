// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.replace_border_zeros procedure implementation.

use crate::algo::algorithms::{Algorithm, ReplaceBorderZeros};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use anyhow::Result;
use serde_json::json;

pub struct ReplaceBorderZerosAdapter;

impl AlgoAdapter for ReplaceBorderZerosAdapter {
    const NAME: &'static str = "traverse.replace_border_zeros";
    type Algo = ReplaceBorderZeros;

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("grid", ValueType::Grid), ("replaced", ValueType::Int)]
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(vec![AlgoResultRow {
            values: vec![json!(result.grid.to_rows()), json!(result.replaced)],
        }])
    }
}

pub type ReplaceBorderZerosProcedure = GenericAlgoProcedure<ReplaceBorderZerosAdapter>;
