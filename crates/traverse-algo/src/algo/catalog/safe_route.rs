// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.safe_route procedure implementation.

use crate::algo::algorithms::{Algorithm, SafeRoute};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType};
use anyhow::Result;
use serde_json::json;

pub struct SafeRouteAdapter;

impl AlgoAdapter for SafeRouteAdapter {
    const NAME: &'static str = "traverse.safe_route";
    type Algo = SafeRoute;

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("length", ValueType::Int)]
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(vec![AlgoResultRow {
            values: vec![json!(result.length)],
        }])
    }
}

pub type SafeRouteProcedure = GenericAlgoProcedure<SafeRouteAdapter>;
