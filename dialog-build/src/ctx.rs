// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! The build context: explicit state for one build-configuration pass.
//!
//! The context is always passed as a parameter, never held in a global.
//! It carries the build-script directory, the build-output directory, the
//! IC-step define, the SDK layout, and the registration state: the
//! preprocessing rules to run and the manual dependency edges that must
//! re-trigger them. Registration appends in call order and never mutates
//! earlier entries.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::layout::SdkLayout;
use crate::node::Node;
use crate::preproc::Preprocessor;

/// Environment variable carrying the IC step letter.
pub const IC_STEP_ENV: &str = "DIALOG_IC_STEP";

/// Macro name of the IC-step define.
pub const IC_STEP_MACRO: &str = "DIALOG_IC_STEP";

/// Build the IC-step define string for a step letter, e.g. `"C"` becomes
/// `DIALOG_IC_STEP=C`.
pub fn ic_step_define(step: &str) -> String {
    format!("{}={}", IC_STEP_MACRO, step)
}

/// A registered preprocessing rule: expand `source` into `target` with
/// the given compiler flags.
#[derive(Debug, Clone)]
pub struct PreprocRule {
    pub source: Node,
    pub target: Node,
    pub cflags: Vec<String>,
}

/// What a manual dependency edge points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dep {
    /// A file: re-run when its contents change.
    Node(Node),
    /// A raw value such as a `NAME=VALUE` define: re-run when it changes.
    Value(String),
}

/// A rebuild-trigger edge the preprocessor cannot discover on its own.
#[derive(Debug, Clone)]
pub struct ManualDependency {
    pub target: Node,
    pub dep: Dep,
}

/// Build context for one configuration pass.
#[derive(Debug)]
pub struct BuildCtx {
    path: Node,
    bld: Node,
    ic_step_define: String,
    layout: SdkLayout,
    tool: Preprocessor,
    rules: Vec<PreprocRule>,
    manual_deps: Vec<ManualDependency>,
}

impl BuildCtx {
    /// Create a context rooted at `script_dir` (which must exist) with
    /// build output going to `out_dir` (created on demand).
    ///
    /// `ic_step_define` is the full `NAME=VALUE` macro string; see
    /// [`ic_step_define`] for the conventional form.
    pub fn new(
        script_dir: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
        ic_step_define: impl Into<String>,
    ) -> Result<Self> {
        let script_dir = absolutize(script_dir.into())?;
        if !script_dir.is_dir() {
            return Err(Error::NotFound { path: script_dir });
        }
        Ok(Self {
            path: Node::from_abs(script_dir),
            bld: Node::from_abs(absolutize(out_dir.into())?),
            ic_step_define: ic_step_define.into(),
            layout: SdkLayout::default(),
            tool: Preprocessor::from_env(),
            rules: Vec::new(),
            manual_deps: Vec::new(),
        })
    }

    /// Create a context from the Cargo build-script environment:
    /// `CARGO_MANIFEST_DIR` as the script directory, `OUT_DIR` as the
    /// build-output directory, and `DIALOG_IC_STEP` as the step letter.
    pub fn from_cargo_env() -> Result<Self> {
        let manifest_dir = build_env("CARGO_MANIFEST_DIR")?;
        let out_dir = build_env("OUT_DIR")?;
        let step = build_env(IC_STEP_ENV)?;
        Self::new(manifest_dir, out_dir, ic_step_define(&step))
    }

    /// Replace the default SDK layout.
    pub fn with_layout(mut self, layout: SdkLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the preprocessor discovered from the environment.
    pub fn with_preprocessor(mut self, tool: Preprocessor) -> Self {
        self.tool = tool;
        self
    }

    /// The build-script directory node.
    pub fn path(&self) -> &Node {
        &self.path
    }

    /// The build-output directory node.
    pub fn bld(&self) -> &Node {
        &self.bld
    }

    pub fn layout(&self) -> &SdkLayout {
        &self.layout
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.tool
    }

    /// The IC-step define, used both as a `-D` flag and as a dependency
    /// key.
    pub fn ic_step_define(&self) -> &str {
        &self.ic_step_define
    }

    /// Resolve `rel` against the build-script directory. Missing paths
    /// error immediately with [`Error::NotFound`].
    pub fn find_node(&self, rel: impl AsRef<Path>) -> Result<Node> {
        self.path.find_node(rel)
    }

    /// Derive a named node in the build-output directory.
    pub fn bld_make_node(&self, name: impl AsRef<Path>) -> Node {
        self.bld.make_node(name)
    }

    /// Record a preprocessing rule to be run by [`BuildCtx::execute`].
    pub fn register_rule(&mut self, rule: PreprocRule) {
        self.rules.push(rule);
    }

    /// Record a rebuild-trigger edge from `target` onto `dep`.
    pub fn add_manual_dependency(&mut self, target: &Node, dep: Dep) {
        self.manual_deps.push(ManualDependency {
            target: target.clone(),
            dep,
        });
    }

    /// Registered rules, in registration order.
    pub fn rules(&self) -> &[PreprocRule] {
        &self.rules
    }

    /// Registered manual dependency edges, in registration order.
    pub fn manual_deps(&self) -> &[ManualDependency] {
        &self.manual_deps
    }

    /// Run every registered rule, creating the build-output directory
    /// first.
    pub fn execute(&self) -> Result<()> {
        fs::create_dir_all(self.bld.abspath()).map_err(|source| Error::Io {
            path: self.bld.abspath().to_path_buf(),
            source,
        })?;
        for rule in &self.rules {
            self.tool.run(rule)?;
        }
        Ok(())
    }

    /// Write the `cargo:` directives for the registered state.
    ///
    /// Rule sources and file dependencies become `rerun-if-changed`;
    /// value dependencies become `rerun-if-env-changed` on the macro
    /// name, as does `CC` because tool discovery reads it. The
    /// build-output directory goes on the linker search path so the link
    /// step finds the generated script.
    pub fn emit_cargo_directives(&self, out: &mut impl Write) -> io::Result<()> {
        for rule in &self.rules {
            writeln!(out, "cargo:rerun-if-changed={}", rule.source.abspath().display())?;
        }
        for md in &self.manual_deps {
            match &md.dep {
                Dep::Node(node) => {
                    writeln!(out, "cargo:rerun-if-changed={}", node.abspath().display())?;
                }
                Dep::Value(value) => {
                    writeln!(out, "cargo:rerun-if-env-changed={}", env_name(value))?;
                }
            }
        }
        writeln!(out, "cargo:rerun-if-env-changed=CC")?;
        writeln!(out, "cargo:rustc-link-search={}", self.bld.abspath().display())?;
        Ok(())
    }

    /// Build-script convenience: execute all rules, then emit the
    /// directives to stdout.
    pub fn run(&self) -> Result<()> {
        self.execute()?;
        let mut out = Vec::new();
        self.emit_cargo_directives(&mut out)
            .expect("writes to a Vec cannot fail");
        print!("{}", String::from_utf8_lossy(&out));
        Ok(())
    }
}

/// Environment-variable name a value dependency is tracked under: the
/// text before `=`, or the whole value if there is no `=`.
fn env_name(value: &str) -> &str {
    match value.split_once('=') {
        Some((name, _)) => name,
        None => value,
    }
}

fn build_env(name: &'static str) -> Result<String> {
    env::var(name).map_err(|source| Error::Env { name, source })
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir().map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Ok(cwd.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ic_step_define_format() {
        assert_eq!(ic_step_define("C"), "DIALOG_IC_STEP=C");
        assert_eq!(ic_step_define("E"), "DIALOG_IC_STEP=E");
    }

    #[test]
    fn test_env_name_splits_at_equals() {
        assert_eq!(env_name("DIALOG_IC_STEP=C"), "DIALOG_IC_STEP");
        assert_eq!(env_name("NDEBUG"), "NDEBUG");
    }

    #[test]
    fn test_new_rejects_missing_script_dir() {
        let err = BuildCtx::new(
            concat!(env!("CARGO_MANIFEST_DIR"), "/no/such/dir"),
            env!("CARGO_MANIFEST_DIR"),
            "DIALOG_IC_STEP=A",
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_relative_script_dir_is_absolutized() {
        // "." always exists; the stored node must come out absolute.
        let ctx = BuildCtx::new(".", "build", "DIALOG_IC_STEP=A").unwrap();
        assert!(ctx.path().abspath().is_absolute());
        assert!(ctx.bld().abspath().is_absolute());
    }

    #[test]
    fn test_with_layout_overrides_default() {
        let layout = SdkLayout {
            sdk_root: PathBuf::from("../sdk"),
            ..SdkLayout::default()
        };
        let ctx = BuildCtx::new(".", "build", "DIALOG_IC_STEP=A")
            .unwrap()
            .with_layout(layout.clone());
        assert_eq!(ctx.layout(), &layout);
    }

    #[test]
    fn test_from_cargo_env_needs_build_script_vars() {
        // Test binaries do not get OUT_DIR or DIALOG_IC_STEP.
        let err = BuildCtx::from_cargo_env().unwrap_err();
        assert!(matches!(err, Error::Env { .. }));
    }
}
