// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.dag_check procedure implementation.

use crate::algo::algorithms::{Algorithm, DagCheck};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use anyhow::Result;
use serde_json::json;

pub struct DagCheckAdapter;

impl AlgoAdapter for DagCheckAdapter {
    const NAME: &'static str = "traverse.dag_check";
    type Algo = DagCheck;

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("isDag", ValueType::Bool), ("backEdge", ValueType::List)]
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(vec![AlgoResultRow {
            values: vec![json!(result.is_dag), json!(result.back_edge)],
        }])
    }
}

pub type DagCheckProcedure = GenericAlgoProcedure<DagCheckAdapter>;
