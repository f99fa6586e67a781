// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! External C-preprocessor invocation.
//!
//! The memory-map template is ordinary preprocessor input; expansion is
//! delegated to the cross compiler in `-E` mode. Argument assembly is
//! kept separate from the spawn.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::ctx::PreprocRule;
use crate::error::{Error, Result};

/// Cross compiler used when neither an override nor `CC` is given.
pub const DEFAULT_CC: &str = "arm-none-eabi-gcc";

/// The external preprocessor tool.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    program: String,
}

impl Preprocessor {
    /// Use an explicit program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use `$CC` if set and non-empty, the default cross compiler
    /// otherwise.
    pub fn from_env() -> Self {
        match env::var("CC") {
            Ok(cc) if !cc.is_empty() => Self::new(cc),
            _ => Self::new(DEFAULT_CC),
        }
    }

    /// Program that will be spawned.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for one rule: `-E -P -x c <cflags> <source> -o <target>`.
    ///
    /// `-P` keeps linemarkers out of the output (they are not valid
    /// linker-script syntax) and `-x c` makes the compiler treat the `.h`
    /// template as an ordinary translation unit.
    pub fn args(&self, rule: &PreprocRule) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-E".into(), "-P".into(), "-x".into(), "c".into()];
        args.extend(rule.cflags.iter().map(OsString::from));
        args.push(rule.source.abspath().into());
        args.push("-o".into());
        args.push(rule.target.abspath().into());
        args
    }

    /// Run the preprocessor for one rule, capturing stderr for the error
    /// report.
    pub fn run(&self, rule: &PreprocRule) -> Result<()> {
        let output = Command::new(&self.program)
            .args(self.args(rule))
            .output()
            .map_err(|source| Error::Io {
                path: PathBuf::from(&self.program),
                source,
            })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(Error::Preprocess {
                program: self.program.clone(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
