// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Filesystem node handles.
//!
//! A [`Node`] is a handle to one location in the build tree: source-tree
//! nodes come from existence-checked lookups, build-output nodes are
//! derived with [`Node::make_node`] and may not exist until a rule runs.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A handle to a resolved location in the source or build-output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    path: PathBuf,
}

impl Node {
    /// Wrap an absolute path without checking existence.
    pub(crate) fn from_abs(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolve `rel` beneath this node, requiring that it exists.
    pub fn find_node(&self, rel: impl AsRef<Path>) -> Result<Node> {
        let path = self.path.join(rel);
        if path.exists() {
            Ok(Node { path })
        } else {
            Err(Error::NotFound { path })
        }
    }

    /// Derive a child node without requiring that it exists yet.
    pub fn make_node(&self, name: impl AsRef<Path>) -> Node {
        Node {
            path: self.path.join(name),
        }
    }

    /// Absolute path of this node. Relative hops (`..`) taken during
    /// resolution are preserved, not normalized away.
    pub fn abspath(&self) -> &Path {
        &self.path
    }

    /// Final path component.
    pub fn name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}
