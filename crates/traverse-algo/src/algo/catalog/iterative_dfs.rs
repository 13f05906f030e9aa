// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.iterative_dfs procedure implementation.

use crate::algo::algorithms::{Algorithm, IterativeDfs, IterativeDfsConfig};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType, optional_u32_arg};
use anyhow::Result;
use serde_json::{Value, json};

pub struct IterativeDfsAdapter;

impl AlgoAdapter for IterativeDfsAdapter {
    const NAME: &'static str = "traverse.iterative_dfs";
    type Algo = IterativeDfs;

    fn specific_args() -> Vec<(&'static str, ValueType, Option<Value>)> {
        // null sweeps every component
        vec![("source", ValueType::Int, Some(Value::Null))]
    }

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("nodeId", ValueType::Int), ("order", ValueType::Int)]
    }

    fn to_config(args: &[Value]) -> Result<IterativeDfsConfig> {
        Ok(IterativeDfsConfig {
            source: optional_u32_arg(&args[0], "source")?,
        })
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(result
            .order
            .into_iter()
            .enumerate()
            .map(|(i, node)| AlgoResultRow {
                values: vec![json!(node), json!(i)],
            })
            .collect())
    }
}

pub type IterativeDfsProcedure = GenericAlgoProcedure<IterativeDfsAdapter>;
