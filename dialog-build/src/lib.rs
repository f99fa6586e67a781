// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Build support for DA1468x Bluetooth controller firmware.
//!
//! Two jobs, both driven by an explicit [`BuildCtx`]:
//! - resolving source files inside the vendor SDK tree ([`sdk_node`],
//!   [`collect_sdk_sources`]),
//! - generating the `mem.ld` linker memory-map script from its template
//!   header via the C preprocessor ([`generate_mem_ld`]), including the
//!   rebuild edges Cargo needs to re-run generation when the config
//!   header, the memory-map header or the IC step changes.
//!
//! From a build script:
//!
//! ```no_run
//! use dialog_build::{generate_mem_ld, BuildCtx};
//!
//! fn main() -> Result<(), dialog_build::Error> {
//!     let mut ctx = BuildCtx::from_cargo_env()?;
//!     generate_mem_ld(&mut ctx, "config/custom_config.h")?;
//!     ctx.run()
//! }
//! ```

pub mod ctx;
pub mod error;
pub mod layout;
pub mod memld;
pub mod node;
pub mod preproc;
pub mod sdk;

// Re-export the operational surface.
pub use ctx::{ic_step_define, BuildCtx, Dep, ManualDependency, PreprocRule};
pub use error::{Error, Result};
pub use layout::{SdkLayout, MEM_LD_NAME};
pub use memld::generate_mem_ld;
pub use node::Node;
pub use preproc::Preprocessor;
pub use sdk::{collect_sdk_sources, sdk_node};
