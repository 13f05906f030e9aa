// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! traverse.word_search procedure implementation.

use crate::algo::algorithms::{Algorithm, WordSearch, WordSearchConfig};
use crate::algo::procedure_template::{AlgoAdapter, GenericAlgoProcedure};
use crate::algo::procedures::{AlgoResultRow, ValueType, cell_value, string_arg};
use anyhow::Result;
use serde_json::Value;

pub struct WordSearchAdapter;

impl AlgoAdapter for WordSearchAdapter {
    const NAME: &'static str = "traverse.word_search";
    type Algo = WordSearch;

    fn specific_args() -> Vec<(&'static str, ValueType, Option<Value>)> {
        vec![("word", ValueType::String, None)]
    }

    fn yields() -> Vec<(&'static str, ValueType)> {
        vec![("path", ValueType::List)]
    }

    fn to_config(args: &[Value]) -> Result<WordSearchConfig> {
        Ok(WordSearchConfig {
            word: string_arg(&args[0], "word")?,
        })
    }

    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>> {
        Ok(result
            .occurrences
            .into_iter()
            .map(|path| AlgoResultRow {
                values: vec![Value::Array(path.into_iter().map(cell_value).collect())],
            })
            .collect())
    }
}

pub type WordSearchProcedure = GenericAlgoProcedure<WordSearchAdapter>;
