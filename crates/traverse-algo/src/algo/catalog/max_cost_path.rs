// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.max_cost_path procedure implementation.

use crate::algo::algorithms::{Algorithm, MaxCostPath, MaxCostPathConfig};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType, i64_arg, u32_arg};
use anyhow::{Result, anyhow};
use serde_json::{Value, json};

pub struct MaxCostPathAdapter;

impl AlgoAdapter for MaxCostPathAdapter {
    const NAME: &'static str = "traverse.max_cost_path";
    type Algo = MaxCostPath;

    fn specific_args() -> Vec<(&'static str, ValueType, Option<Value>)> {
        vec![
            ("source", ValueType::Int, None),
            ("threshold", ValueType::Int, None),
            ("expansionLimit", ValueType::Int, Some(Value::Null)),
        ]
    }

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("maxCost", ValueType::Int)]
    }

    fn to_config(args: &[Value]) -> Result<MaxCostPathConfig> {
        let expansion_limit = match &args[2] {
            Value::Null => None,
            limit => Some(
                limit
                    .as_u64()
                    .and_then(|l| usize::try_from(l).ok())
                    .ok_or_else(|| anyhow!("expansionLimit must be a non-negative integer"))?,
            ),
        };
        Ok(MaxCostPathConfig {
            source: u32_arg(&args[0], "source")?,
            threshold: i64_arg(&args[1], "threshold")?,
            expansion_limit,
        })
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(vec![AlgoResultRow {
            values: vec![json!(result.max_cost)],
        }])
    }
}

pub type MaxCostPathProcedure = GenericAlgoProcedure<MaxCostPathAdapter>;
