// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Standalone mem.ld generator for DA1468x controller builds.
//!
//! Usage:
//!   dialog-memld --project-dir controller/boot --ic-step D generate config/custom_config.h
//!   dialog-memld --project-dir controller/boot --ic-step D flags config/custom_config.h
//!   dialog-memld --project-dir controller/main --ic-step D sources sdk/bsp/peripherals/src/hw_gpio.c

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
