// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.jump_path procedure implementation.

use crate::algo::algorithms::{Algorithm, JumpPath, JumpPathConfig};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType, cell_value, optional_cell_arg};
use anyhow::Result;
use serde_json::{Value, json};

pub struct JumpPathAdapter;

impl AlgoAdapter for JumpPathAdapter {
    const NAME: &'static str = "traverse.jump_path";
    type Algo = JumpPath;

    fn specific_args() -> Vec<(&'static str, ValueType, Option<Value>)> {
        vec![
            ("source", ValueType::Cell, Some(json!([0, 0]))),
            // null means the bottom-right cell
            ("target", ValueType::Cell, Some(Value::Null)),
        ]
    }

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("path", ValueType::List), ("length", ValueType::Int)]
    }

    fn to_config(args: &[Value]) -> Result<JumpPathConfig> {
        Ok(JumpPathConfig {
            source: optional_cell_arg(&args[0], "source")?.unwrap_or_default(),
            target: optional_cell_arg(&args[1], "target")?,
        })
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        let moves = result.path.len().saturating_sub(1);
        let path: Vec<Value> = result.path.into_iter().map(cell_value).collect();
        Ok(vec![AlgoResultRow {
            values: vec![Value::Array(path), json!(moves)],
        }])
    }
}

pub type JumpPathProcedure = GenericAlgoProcedure<JumpPathAdapter>;
