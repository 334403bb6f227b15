/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! [![Rust](https://img.shields.io/badge/rust-1.82.0+-orchid?logo=rust)](https://www.rust-lang.org/)
//! [![License](https://img.shields.io/crates/l/tss2-rc-rs)](https://opensource.org/licenses/BSD-3-Clause)
//!
//! # TSS 2.0 Response Code Decoder
//!
//! The **`tss2-rc-rs`** Rust crate decodes the layered response codes (`TSS2_RC`) produced by
//! a [TPM 2.0 software stack](https://trustedcomputinggroup.org/work-groups/software-stack/)
//! into human-readable diagnostic strings, classifies them into stable tool outcomes, and
//! translates command-line hierarchy identifiers into protocol handle values.
//!
//! ### Getting started
//!
//! The following example illustrates how to decode and classify a response code:
//!
//! ```rust
//! use tss2_rc_rs::{LayerRegistry, Outcome};
//!
//! fn main() {
//!     let registry = LayerRegistry::new();
//!
//!     // TPM layer, format-one error: bad handle
//!     assert_eq!(registry.decode(0x0000018B), "tpm:handle(1):the handle is not correct for the use");
//!
//!     // TCTI layer: connection failure
//!     assert_eq!(registry.decode(0x000A0008), "tcti:Fails to connect to next lower layer");
//!
//!     // Unknown layer: generic fallback rendering
//!     assert_eq!(registry.decode(0x00050003), "5:0x3");
//!
//!     // Stable outcome ordinals, suitable as process exit codes
//!     assert_eq!(Outcome::from_rc(0x000A0008), Outcome::TctiError);
//!     assert_eq!(Outcome::from_rc(0x00000000), Outcome::Success);
//! }
//! ```
//!
//! Every decode is *total*: any 32-bit value yields a non-empty string, falling back to the
//! decimal layer number and the hexadecimal error bits when nothing better is known. Error
//! bits of zero always render as `"success"`, regardless of the layer.
//!
//! #### Custom layers
//!
//! Applications that stack their own layers on top of the TSS can register a friendly name
//! and a decode callback for any non-reserved layer number:
//!
//! ```rust
//! use std::{borrow::Cow, sync::Arc};
//! use tss2_rc_rs::LayerRegistry;
//!
//! fn main() {
//!     let registry = LayerRegistry::new();
//!     registry
//!         .register(0x22, "app", Arc::new(|error_bits| {
//!             (error_bits == 0x1).then_some(Cow::from("database unavailable"))
//!         }))
//!         .expect("Failed to register layer handler!");
//!
//!     assert_eq!(registry.decode(0x00220001), "app:database unavailable");
//!     assert_eq!(registry.decode(0x00220002), "app:0x2");
//! }
//! ```
//!
//! The TPM (0), SAPI (8), MU (9) and TCTI (10) layers are
//! [reserved](crate::RESERVED_LAYERS); their built-in decoders cannot be replaced.
//!
//! ### Usage instructions
//!
//! In order to use the **`tss2-rc-rs`** library in your Rust project, simply add it to your
//! `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! tss2-rc-rs = "0.2"
//! ```
//!
//! ### Examples
//!
//! Runnable examples, including a small decoder command-line tool that exits with the
//! classified [`Outcome`] ordinal, are provided in the **`demos`** sub-directory:
//!
//! ```sh
//! $ cargo run --example 1_decode_rc -- 0x000A000A
//! ```
//!
//! ### Testing
//!
//! Integration tests are provided in the **`tests`** sub-directory. They can be executed by
//! running the following command in the project root directory:
//!
//! ```sh
//! $ cargo test
//! ```
//!
//! The environment variable `TSS2_RC_TEST_ITERATIONS` controls the number of iterations of the
//! randomized decoder tests.
//!
//! ### License
//!
//! Copyright &copy; 2024-2026 [Fraunhofer SIT](https://www.sit.fraunhofer.de/en/), sponsored by
//! the [ELISA and ProSeCA](https://novomotive.de/) research projects.
//! All rights reserved.
//!
//! This work is released under the [**3-Clause BSD License**](https://opensource.org/license/bsd-3-clause) (SPDX short identifier: `BSD-3-Clause`).

#![doc(html_no_source)]

mod algorithm_id;
mod error;
mod esys;
mod hierarchy;
mod memory;
mod outcome;
mod registry;
mod types;
mod util;
mod version;

pub mod constants;

pub use algorithm_id::HashAlgorithm;
pub use error::{BaseErrorCode, Fmt1Subject, TpmErrFmt0, TpmErrFmt1, TpmRc, TpmWarning, rc_error_bits, rc_layer_number};
pub use esys::{AuthSession, EsysBackend};
pub use hierarchy::{HierarchyFlags, create_primary, hierarchy_from_arg, hierarchy_to_esys_tr};
pub use memory::AuthValue;
pub use outcome::Outcome;
pub use registry::{LayerEntry, LayerRegistry, RESERVED_LAYERS, RcHandler, RcHandlerFn, RegistryError};
pub use types::{KeyType, PrimaryObject, PrimaryTemplate, TemplateError};
pub use util::{string_to_u16, string_to_u32};
pub use version::{VersionInfo, get_version};

// Re-export JSON module
pub use ::json;
