// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations for the mem.ld generator.

use std::path::Path;

use anyhow::{Context, Result};

use dialog_build::{collect_sdk_sources, generate_mem_ld, BuildCtx};

/// Assemble the mem.ld rule and run the preprocessor.
pub fn generate(ctx: &mut BuildCtx, config_header: &Path) -> Result<()> {
    let mem_ld = generate_mem_ld(ctx, config_header)
        .context("Failed to assemble the mem.ld rule")?;

    for rule in ctx.rules() {
        println!(
            "Preprocess {} -> {}",
            rule.source.abspath().display(),
            rule.target.abspath().display()
        );
    }

    ctx.execute()
        .with_context(|| format!("Preprocessing with {} failed", ctx.preprocessor().program()))?;

    println!("Wrote {}", mem_ld.abspath().display());
    Ok(())
}

/// Print the assembled preprocessor flags, one per line.
pub fn flags(ctx: &mut BuildCtx, config_header: &Path) -> Result<()> {
    generate_mem_ld(ctx, config_header).context("Failed to assemble the mem.ld rule")?;

    for rule in ctx.rules() {
        for flag in &rule.cflags {
            println!("{}", flag);
        }
    }
    Ok(())
}

/// Resolve source files under the vendor SDK and print their absolute
/// paths, in input order.
pub fn sources(ctx: &BuildCtx, names: &[String]) -> Result<()> {
    let nodes = collect_sdk_sources(ctx, names).context("Failed to resolve SDK sources")?;
    for node in &nodes {
        println!("{}", node.abspath().display());
    }
    Ok(())
}
