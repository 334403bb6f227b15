/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use env_logger::Builder as EnvLogger;
use log::{LevelFilter, error, info};
use std::{env, process};
use tss2_rc_rs::{LayerRegistry, Outcome, string_to_u32};

/// # tss2-rc-rs example #1 - decode_rc
///
/// This example decodes the response codes given on the command line and prints the diagnostic
/// string for each of them. The process exits with the [`Outcome`] ordinal of the *last*
/// decoded response code, the way a `tpm2_*` command-line tool reports its TPM errors.
///
/// ### Usage
///
/// ```sh
/// $ cargo run --example 1_decode_rc -- 0x000A000A 0x98E 0x80280400
/// ```
fn main() {
    // Initialize the logger
    EnvLogger::new().filter_level(LevelFilter::Info).init();

    // Print logo
    info!("TSS2 RC Decoder - Example #1");

    // Print library version
    info!("Using tss2-rc-rs package version: {}", tss2_rc_rs::get_version());

    // Check command-line arguments
    let args: Vec<String> = env::args().skip(1usize).collect();
    if args.is_empty() {
        error!("Usage: 1_decode_rc <rc> [<rc> ...]");
        process::exit(Outcome::OptionError.exit_code());
    }

    // Create the registry with the built-in layer handlers
    let registry = LayerRegistry::new();

    // Decode all given response codes
    let mut outcome = Outcome::Success;
    for arg in &args {
        let rc = match string_to_u32(arg) {
            Some(number) => number,
            None => {
                error!("Could not convert rc to number, got: \"{}\"", arg);
                process::exit(Outcome::OptionError.exit_code());
            }
        };
        println!("{}", registry.decode(rc));
        outcome = Outcome::from_rc(rc);
    }

    // Exit with the outcome of the last code
    process::exit(outcome.exit_code());
}
