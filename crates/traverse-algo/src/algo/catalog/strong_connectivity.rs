// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.strong_connectivity and traverse.strong_connectivity_one_pass
//! procedures.

use crate::algo::algorithms::{
    StrongConnectivity, StrongConnectivityOnePass, StrongConnectivityResult,
};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use anyhow::Result;
use serde_json::json;

fn connectivity_row(result: StrongConnectivityResult) -> Result<Vec<AlgoResultRow>> {
    Ok(vec![AlgoResultRow {
        values: vec![json!(result.is_strongly_connected)],
    }])
}

pub struct StrongConnectivityAdapter;

impl AlgoAdapter for StrongConnectivityAdapter {
    const NAME: &'static str = "traverse.strong_connectivity";
    type Algo = StrongConnectivity;

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("isStronglyConnected", ValueType::Bool)]
    }

    fn map_result(result: StrongConnectivityResult) -> Result<Vec<AlgoResultRow>> {
        connectivity_row(result)
    }
}

pub struct StrongConnectivityOnePassAdapter;

impl AlgoAdapter for StrongConnectivityOnePassAdapter {
    const NAME: &'static str = "traverse.strong_connectivity_one_pass";
    type Algo = StrongConnectivityOnePass;

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("isStronglyConnected", ValueType::Bool)]
    }

    fn map_result(result: StrongConnectivityResult) -> Result<Vec<AlgoResultRow>> {
        connectivity_row(result)
    }
}

pub type StrongConnectivityProcedure = GenericAlgoProcedure<StrongConnectivityAdapter>;
pub type StrongConnectivityOnePassProcedure =
    GenericAlgoProcedure<StrongConnectivityOnePassAdapter>;
