// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use dialog_build::ctx::IC_STEP_ENV;
use dialog_build::{ic_step_define, BuildCtx, Preprocessor};

use crate::commands;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "dialog-memld")]
#[command(about = "mem.ld generator for DA1468x controller builds")]
pub struct Cli {
    /// Build-script directory (e.g., controller/boot)
    #[arg(short, long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Output directory for the generated script
    #[arg(short, long, default_value = "build")]
    pub out_dir: PathBuf,

    /// IC step letter (falls back to $DIALOG_IC_STEP)
    #[arg(long)]
    pub ic_step: Option<String>,

    /// Preprocessing compiler (falls back to $CC, then arm-none-eabi-gcc)
    #[arg(long)]
    pub cc: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate mem.ld from the linker-script template
    Generate {
        /// Config header, relative to the project directory
        #[arg(value_name = "CONFIG_HEADER")]
        config_header: PathBuf,
    },

    /// Print the assembled preprocessor flags without running anything
    Flags {
        /// Config header, relative to the project directory
        #[arg(value_name = "CONFIG_HEADER")]
        config_header: PathBuf,
    },

    /// Resolve source files under the vendor SDK and print their paths
    Sources {
        /// File names relative to the SDK root
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    let step = match cli.ic_step {
        Some(step) => step,
        None => std::env::var(IC_STEP_ENV)
            .with_context(|| format!("no --ic-step given and {} is not set", IC_STEP_ENV))?,
    };

    let mut ctx = BuildCtx::new(&cli.project_dir, &cli.out_dir, ic_step_define(&step))
        .with_context(|| {
            format!(
                "Failed to open project directory {}",
                cli.project_dir.display()
            )
        })?;
    if let Some(cc) = cli.cc {
        ctx = ctx.with_preprocessor(Preprocessor::new(cc));
    }

    match cli.command {
        Commands::Generate { config_header } => commands::generate(&mut ctx, &config_header),
        Commands::Flags { config_header } => commands::flags(&mut ctx, &config_header),
        Commands::Sources { names } => commands::sources(&ctx, &names),
    }
}
