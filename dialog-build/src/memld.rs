// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Linker memory-map script generation.
//!
//! `ldscripts/mem.ld.h` is a C header that turns into linker-script text
//! once the preprocessor has expanded the memory-map constants. The
//! expansion pulls in the config header (`-include`), the SDK BSP config
//! directory and the shared include directory (`-I`), and the IC-step
//! define (`-D`). The config header, the memory-map header and the
//! IC-step define are also recorded as manual dependencies: the build
//! system cannot see them as inputs of the preprocessing rule on its own.

use std::path::Path;

use crate::ctx::{BuildCtx, Dep, PreprocRule};
use crate::error::Result;
use crate::layout::MEM_LD_NAME;
use crate::node::Node;
use crate::sdk;

/// Assemble and register the `mem.ld` generation rule.
///
/// `config_h_path` is resolved against the build-script directory. All
/// inputs are resolved before anything is registered, so a missing path
/// leaves the context untouched. Returns the `mem.ld` output node for the
/// link step.
pub fn generate_mem_ld(ctx: &mut BuildCtx, config_h_path: impl AsRef<Path>) -> Result<Node> {
    let mem_ld_node = ctx.bld_make_node(MEM_LD_NAME);
    let mem_ld_h_node = ctx.find_node(&ctx.layout().ldscript_template)?;
    let mem_map_dir = ctx.find_node(&ctx.layout().include_dir)?;
    let mem_map_node = mem_map_dir.find_node(&ctx.layout().mem_map_header)?;

    let include_node = ctx.find_node(config_h_path)?;
    let sdk_config_node = sdk::sdk_node(ctx)?.find_node(&ctx.layout().sdk_config_dir)?;
    let dialog_ic_step_define = ctx.ic_step_define().to_string();

    let mut cflags = Vec::new();
    cflags.push(format!("-include{}", include_node.abspath().display()));
    cflags.push(format!("-I{}", sdk_config_node.abspath().display()));
    cflags.push(format!("-I{}", mem_map_dir.abspath().display()));
    cflags.push(format!("-D{}", dialog_ic_step_define));

    ctx.register_rule(PreprocRule {
        source: mem_ld_h_node,
        target: mem_ld_node.clone(),
        cflags,
    });

    ctx.add_manual_dependency(&mem_ld_node, Dep::Node(include_node));
    ctx.add_manual_dependency(&mem_ld_node, Dep::Node(mem_map_node));
    ctx.add_manual_dependency(&mem_ld_node, Dep::Value(dialog_ic_step_define));

    Ok(mem_ld_node)
}
