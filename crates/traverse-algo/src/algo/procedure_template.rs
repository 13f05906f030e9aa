// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Template for traversal procedures to reduce boilerplate.

use crate::algo::algorithms::Algorithm;
use crate::algo::procedures::{
    AlgoContext, AlgoProcedure, AlgoResultRow, ProcedureInput, ProcedureSignature, ValueType,
};
use anyhow::{Context, Result};
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Adapter trait for specific traversal policies.
pub trait AlgoAdapter: Send + Sync + 'static {
    /// Name of the procedure (e.g., "traverse.bridges").
    const NAME: &'static str;

    /// The underlying algorithm.
    type Algo: Algorithm<Input: ProcedureInput>;

    /// Define policy-specific arguments (after the input literal).
    /// Returns: (name, type, default_value_if_optional)
    /// If default_value is None, it's required.
    fn specific_args() -> Vec<(&'static str, ValueType, Option<Value>)> {
        vec![]
    }

    /// Define output columns.
    fn yields() -> Vec<(&'static str, ValueType)>;

    /// Convert parsed specific arguments to the algorithm config.
    /// `args` contains only the policy-specific arguments, defaults filled.
    fn to_config(_args: &[Value]) -> Result<<Self::Algo as Algorithm>::Config> {
        Ok(Default::default())
    }

    /// Convert algorithm result to output rows.
    fn map_result(result: <Self::Algo as Algorithm>::Result) -> Result<Vec<AlgoResultRow>>;
}

/// Generic implementation of `AlgoProcedure` for any `AlgoAdapter`.
pub struct GenericAlgoProcedure<A: AlgoAdapter> {
    _marker: PhantomData<A>,
}

impl<A: AlgoAdapter> GenericAlgoProcedure<A> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A: AlgoAdapter> Default for GenericAlgoProcedure<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AlgoAdapter> AlgoProcedure for GenericAlgoProcedure<A> {
    fn name(&self) -> &str {
        A::NAME
    }

    fn signature(&self) -> ProcedureSignature {
        let mut args = vec![(
            <<A::Algo as Algorithm>::Input as ProcedureInput>::ARG_NAME,
            <<A::Algo as Algorithm>::Input as ProcedureInput>::VALUE_TYPE,
        )];
        let mut optional_args = Vec::new();

        for (name, ty, default) in A::specific_args() {
            if let Some(def) = default {
                optional_args.push((name, ty, def));
            } else {
                args.push((name, ty));
            }
        }

        ProcedureSignature {
            args,
            optional_args,
            yields: A::yields(),
        }
    }

    #[instrument(skip_all, fields(procedure = A::NAME))]
    fn execute(&self, ctx: &AlgoContext, args: Vec<Value>) -> Result<Vec<AlgoResultRow>> {
        let args = self.signature().validate_args(args)?;
        let Some((input, specific_args)) = args.split_first() else {
            return Ok(Vec::new());
        };

        // 1. Materialize the input literal
        let input = <<A::Algo as Algorithm>::Input as ProcedureInput>::from_arg(input, &ctx.config)
            .with_context(|| format!("{}: invalid input", A::NAME))?;

        // 2. Run algorithm
        let config = A::to_config(specific_args)?;
        let result = A::Algo::run(&input, config).with_context(|| format!("{} failed", A::NAME))?;

        // 3. Collect rows
        let rows = A::map_result(result)?;
        debug!(rows = rows.len(), "procedure finished");
        Ok(rows)
    }
}
