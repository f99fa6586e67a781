// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Fixed locations inside the DA1468x firmware tree.
//!
//! The controller build scripts sit at `controller/boot` and
//! `controller/main`; the vendor SDK and the shared include directory are
//! reached from there with the same relative hops in either case.

use std::path::PathBuf;

/// Name of the generated linker script. The link step refers to it by
/// this exact name, so it is not configurable.
pub const MEM_LD_NAME: &str = "mem.ld";

/// Relative locations resolved during generation.
///
/// Defaults match the firmware tree; a context can swap in a different
/// table for trees shaped otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkLayout {
    /// Vendor SDK root, relative to the build-script directory.
    pub sdk_root: PathBuf,
    /// BSP configuration directory, relative to the SDK root.
    pub sdk_config_dir: PathBuf,
    /// Shared include directory, relative to the build-script directory.
    pub include_dir: PathBuf,
    /// Memory-map header, relative to the include directory.
    pub mem_map_header: PathBuf,
    /// Linker-script template, relative to the build-script directory.
    pub ldscript_template: PathBuf,
}

impl Default for SdkLayout {
    fn default() -> Self {
        Self {
            sdk_root: PathBuf::from("../../vendor/bt-dialog-sdk"),
            sdk_config_dir: PathBuf::from("sdk/bsp/config"),
            include_dir: PathBuf::from("../../include/"),
            mem_map_header: PathBuf::from("da1468x_mem_map.h"),
            ldscript_template: PathBuf::from("ldscripts/mem.ld.h"),
        }
    }
}
