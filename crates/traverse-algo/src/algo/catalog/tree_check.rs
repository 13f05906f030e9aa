// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.tree_check procedure implementation.

use crate::algo::algorithms::{Algorithm, TreeCheck};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use anyhow::Result;
use serde_json::json;

pub struct TreeCheckAdapter;

impl AlgoAdapter for TreeCheckAdapter {
    const NAME: &'static str = "traverse.tree_check";
    type Algo = TreeCheck;

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("isTree", ValueType::Bool)]
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(vec![AlgoResultRow {
            values: vec![json!(result.is_tree)],
        }])
    }
}

pub type TreeCheckProcedure = GenericAlgoProcedure<TreeCheckAdapter>;
