// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.bfs_cycle_check and traverse.dfs_cycle_check procedures.

use crate::algo::algorithms::{BfsCycleCheck, CycleCheckResult, DfsCycleCheck};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use anyhow::Result;
use serde_json::json;

fn cycle_yields() -> Vec<(&'static str, ValueType)> {
    vec![
        ("hasCycle", ValueType::Bool),
        ("closingEdge", ValueType::List),
    ]
}

fn cycle_rows(result: CycleCheckResult) -> Result<Vec<AlgoResultRow>> {
    Ok(vec![AlgoResultRow {
        values: vec![json!(result.has_cycle), json!(result.closing_edge)],
    }])
}

pub struct BfsCycleCheckAdapter;

impl AlgoAdapter for BfsCycleCheckAdapter {
    const NAME: &'static str = "traverse.bfs_cycle_check";
    type Algo = BfsCycleCheck;

    fn yields() -> Vec<(&'static str, ValueType)> {
        cycle_yields()
    }

    fn map_result(result: CycleCheckResult) -> Result<Vec<AlgoResultRow>> {
        cycle_rows(result)
    }
}

pub struct DfsCycleCheckAdapter;

impl AlgoAdapter for DfsCycleCheckAdapter {
    const NAME: &'static str = "traverse.dfs_cycle_check";
    type Algo = DfsCycleCheck;

    fn yields() -> Vec<(&'static str, ValueType)> {
        cycle_yields()
    }

    fn map_result(result: CycleCheckResult) -> Result<Vec<AlgoResultRow>> {
        cycle_rows(result)
    }
}

pub type BfsCycleCheckProcedure = GenericAlgoProcedure<BfsCycleCheckAdapter>;
pub type DfsCycleCheckProcedure = GenericAlgoProcedure<DfsCycleCheckAdapter>;
