// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.boggle procedure implementation.

use crate::algo::algorithms::{Algorithm, Boggle, BoggleConfig};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType, string_list_arg};
use anyhow::Result;
use serde_json::{Value, json};

pub struct BoggleAdapter;

impl AlgoAdapter for BoggleAdapter {
    const NAME: &'static str = "traverse.boggle";
    type Algo = Boggle;

    fn specific_args() -> Vec<(&'static str, ValueType, Option<Value>)> {
        vec![("dictionary", ValueType::List, None)]
    }

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("word", ValueType::String)]
    }

    fn to_config(args: &[Value]) -> Result<BoggleConfig> {
        Ok(BoggleConfig {
            dictionary: string_list_arg(&args[0], "dictionary")?,
        })
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(result
            .words
            .into_iter()
            .map(|word| AlgoResultRow {
                values: vec![json!(word)],
            })
            .collect())
    }
}

pub type BoggleProcedure = GenericAlgoProcedure<BoggleAdapter>;
