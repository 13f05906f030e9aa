// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Replays the reference fixtures through the procedure registry.

mod fixtures;

use serde_json::Value;
use std::io::{self, Write};
use tracing::{error, info};
use traverse_algo::{AlgoContext, AlgoResultRow, AlgorithmRegistry};

pub use fixtures::{Fixture, fixtures};

/// `name: column=value, ...`
pub fn format_row(name: &str, columns: &[&str], row: &AlgoResultRow) -> String {
    let cells: Vec<String> = columns
        .iter()
        .zip(&row.values)
        .map(|(column, value)| format!("{column}={}", render(value)))
        .collect();
    format!("{name}: {}", cells.join(", "))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Run one fixture and return its output lines.
pub fn run_fixture(
    registry: &AlgorithmRegistry,
    ctx: &AlgoContext,
    fixture: &Fixture,
) -> anyhow::Result<Vec<String>> {
    let procedure = registry
        .get(fixture.procedure)
        .ok_or_else(|| anyhow::anyhow!("Procedure '{}' not found", fixture.procedure))?;
    let signature = procedure.signature();
    let columns: Vec<&str> = signature.columns().collect();

    let rows = procedure.execute(ctx, fixture.args.clone())?;
    if rows.is_empty() {
        return Ok(vec![format!("{}: (no rows)", fixture.procedure)]);
    }
    Ok(rows
        .iter()
        .map(|row| format_row(fixture.procedure, &columns, row))
        .collect())
}

/// Run every fixture, printing result lines to stdout. Returns the number of
/// fixtures that failed.
pub fn run_all(registry: &AlgorithmRegistry, ctx: &AlgoContext) -> usize {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0;

    for fixture in fixtures() {
        match run_fixture(registry, ctx, &fixture) {
            Ok(lines) => {
                for line in lines {
                    // a closed pipe is not a fixture failure
                    let _ = writeln!(out, "{line}");
                }
            }
            Err(e) => {
                error!(procedure = fixture.procedure, error = %e, "fixture failed");
                failed += 1;
            }
        }
    }

    info!(failed, "demo finished");
    failed
}
