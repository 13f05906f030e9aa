// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.mine_distance procedure implementation.

use crate::algo::algorithms::{Algorithm, MineDistance, MineDistanceConfig};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType, char_arg};
use anyhow::Result;
use serde_json::{Value, json};

pub struct MineDistanceAdapter;

impl AlgoAdapter for MineDistanceAdapter {
    const NAME: &'static str = "traverse.mine_distance";
    type Algo = MineDistance;

    fn specific_args() -> Vec<(&'static str, ValueType, Option<Value>)> {
        vec![
            ("mine", ValueType::String, Some(json!("M"))),
            ("open", ValueType::String, Some(json!("O"))),
        ]
    }

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("distances", ValueType::Grid)]
    }

    fn to_config(args: &[Value]) -> Result<MineDistanceConfig> {
        Ok(MineDistanceConfig {
            mine: char_arg(&args[0], "mine")?,
            open: char_arg(&args[1], "open")?,
        })
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(vec![AlgoResultRow {
            values: vec![json!(result.distances.to_rows())],
        }])
    }
}

pub type MineDistanceProcedure = GenericAlgoProcedure<MineDistanceAdapter>;
