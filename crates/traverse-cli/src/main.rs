// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use anyhow::{Result, bail};
use traverse_algo::{AlgoContext, AlgorithmRegistry};

pub mod demo;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = AlgorithmRegistry::new();
    let ctx = AlgoContext::default();

    let failed = demo::run_all(&registry, &ctx);
    if failed > 0 {
        bail!("{} fixture(s) failed", failed);
    }
    Ok(())
}
