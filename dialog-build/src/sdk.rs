// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Vendor SDK path resolution.

use crate::ctx::BuildCtx;
use crate::error::Result;
use crate::node::Node;

/// Resolve the vendor SDK root for this context.
pub fn sdk_node(ctx: &BuildCtx) -> Result<Node> {
    ctx.find_node(&ctx.layout().sdk_root)
}

/// Resolve source files under the SDK root.
///
/// Order is preserved and nothing is deduplicated: one node per name,
/// in input order. The first missing file aborts with its full path.
pub fn collect_sdk_sources<S: AsRef<str>>(ctx: &BuildCtx, sources: &[S]) -> Result<Vec<Node>> {
    let sdk = sdk_node(ctx)?;
    sources.iter().map(|s| sdk.find_node(s.as_ref())).collect()
}
