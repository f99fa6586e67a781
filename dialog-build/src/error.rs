// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Typed errors for build-support operations.
//!
//! Resolution failures carry the offending path and surface at lookup
//! time, not when the generated script is first consumed.

use std::env;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by path resolution, context construction, and
/// preprocessor runs.
#[derive(Debug)]
pub enum Error {
    /// A source-tree lookup found nothing at the given path.
    NotFound { path: PathBuf },
    /// A required environment variable is missing or not unicode.
    Env {
        name: &'static str,
        source: env::VarError,
    },
    /// The external preprocessor ran but exited unsuccessfully.
    Preprocess {
        program: String,
        status: Option<i32>,
        stderr: String,
    },
    /// An I/O failure while spawning the preprocessor or preparing the
    /// build-output directory. `path` is the program or directory involved.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { path } => {
                write!(f, "no such file or directory: {}", path.display())
            }
            Error::Env { name, source } => {
                write!(f, "environment variable {}: {}", name, source)
            }
            Error::Preprocess {
                program,
                status,
                stderr,
            } => {
                match status {
                    Some(code) => write!(f, "{} exited with status {}", program, code)?,
                    None => write!(f, "{} terminated by signal", program)?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr.trim_end())?;
                }
                Ok(())
            }
            Error::Io { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_path() {
        let err = Error::NotFound {
            path: PathBuf::from("/proj/ldscripts/mem.ld.h"),
        };
        assert_eq!(
            err.to_string(),
            "no such file or directory: /proj/ldscripts/mem.ld.h"
        );
    }

    #[test]
    fn test_preprocess_includes_status_and_stderr() {
        let err = Error::Preprocess {
            program: "arm-none-eabi-gcc".to_string(),
            status: Some(1),
            stderr: "mem.ld.h:3: error\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "arm-none-eabi-gcc exited with status 1: mem.ld.h:3: error"
        );
    }

    #[test]
    fn test_preprocess_without_stderr() {
        let err = Error::Preprocess {
            program: "cpp".to_string(),
            status: Some(2),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "cpp exited with status 2");
    }

    #[test]
    fn test_env_names_the_variable() {
        let err = Error::Env {
            name: "OUT_DIR",
            source: env::VarError::NotPresent,
        };
        assert!(err.to_string().contains("OUT_DIR"));
    }
}
