// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.reachable_path procedure implementation.

use crate::algo::algorithms::{Algorithm, ReachablePath, ReachablePathConfig};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType, u32_arg};
use anyhow::Result;
use serde_json::{Value, json};

pub struct ReachablePathAdapter;

impl AlgoAdapter for ReachablePathAdapter {
    const NAME: &'static str = "traverse.reachable_path";
    type Algo = ReachablePath;

    fn specific_args() -> Vec<(&'static str, ValueType, Option<Value>)> {
        vec![
            ("source", ValueType::Int, None),
            ("target", ValueType::Int, None),
        ]
    }

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("found", ValueType::Bool), ("path", ValueType::List)]
    }

    fn to_config(args: &[Value]) -> Result<ReachablePathConfig> {
        Ok(ReachablePathConfig {
            source: u32_arg(&args[0], "source")?,
            target: u32_arg(&args[1], "target")?,
        })
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(vec![AlgoResultRow {
            values: vec![json!(result.path.is_some()), json!(result.path)],
        }])
    }
}

pub type ReachablePathProcedure = GenericAlgoProcedure<ReachablePathAdapter>;
