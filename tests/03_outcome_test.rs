/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

pub mod common;

use common::{random::create_seed, setup::TestConfiguration};
use function_name::named;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tss2_rc_rs::Outcome;

// ==========================================================================
// Test cases
// ==========================================================================

/// The outcome ordinals double as process exit codes and must never change
#[test]
#[named]
fn test_outcome_ordinals() {
    let _configuration = TestConfiguration::new();
    debug!("Running: {}", function_name!());

    assert_eq!(Outcome::Success.exit_code(), 0);
    assert_eq!(Outcome::GeneralError.exit_code(), 1);
    assert_eq!(Outcome::OptionError.exit_code(), 2);
    assert_eq!(Outcome::AuthError.exit_code(), 3);
    assert_eq!(Outcome::TctiError.exit_code(), 4);
    assert_eq!(Outcome::Unsupported.exit_code(), 5);
}

/// Success bits classify as the success ordinal for every layer
#[test]
#[named]
fn test_classify_success() {
    let _configuration = TestConfiguration::new();
    debug!("Running: {}", function_name!());

    for layer in u8::MIN..=u8::MAX {
        let rc = u32::from(layer) << 16;
        assert_eq!(Outcome::from_rc(rc), Outcome::Success);
        assert_eq!(Outcome::from_rc(rc).exit_code(), 0);
    }
}

/// The fixed classification rules for the known error classes
#[test]
#[named]
fn test_classify_categories() {
    let _configuration = TestConfiguration::new();
    debug!("Running: {}", function_name!());

    /* authorization failures: format-one auth codes for sessions 1..=3, and the ESAPI
     * response-HMAC failure */
    for session in 1u32..=3u32 {
        assert_eq!(Outcome::from_rc(0x0000_088E + (session << 8)), Outcome::AuthError);
        assert_eq!(Outcome::from_rc(0x0000_08A2 + (session << 8)), Outcome::AuthError);
    }
    assert_eq!(Outcome::from_rc(0x0007_001B), Outcome::AuthError);

    /* option/usage errors */
    assert_eq!(Outcome::from_rc(0x0008_000B), Outcome::OptionError);
    assert_eq!(Outcome::from_rc(0x0006_000B), Outcome::OptionError);

    /* transport failures */
    assert_eq!(Outcome::from_rc(0x000A_0008), Outcome::TctiError);
    assert_eq!(Outcome::from_rc(0x000A_0009), Outcome::TctiError);
    assert_eq!(Outcome::from_rc(0x000A_000A), Outcome::TctiError);
    assert_eq!(Outcome::from_rc(0x000A_0014), Outcome::TctiError);
    assert_eq!(Outcome::from_rc(0x000A_0016), Outcome::TctiError);

    /* unsupported functionality */
    assert_eq!(Outcome::from_rc(0x0008_0002), Outcome::Unsupported);
    assert_eq!(Outcome::from_rc(0x0008_0015), Outcome::Unsupported);

    /* everything else is a general error */
    assert_eq!(Outcome::from_rc(0x0000_0101), Outcome::GeneralError);
    assert_eq!(Outcome::from_rc(0x0000_0902), Outcome::GeneralError);
    assert_eq!(Outcome::from_rc(0x0000_018B), Outcome::GeneralError);
    assert_eq!(Outcome::from_rc(0x0008_0001), Outcome::GeneralError);
    assert_eq!(Outcome::from_rc(0x0006_FFFF), Outcome::GeneralError);
}

/// Classification is total and deterministic over arbitrary response codes
#[test]
#[named]
fn test_classify_is_deterministic() {
    let configuration = TestConfiguration::new();

    let mut rand_gen = ChaChaRng::from_seed(create_seed(3u64));

    for _i in 0..configuration.iterations() {
        let rc = rand_gen.random::<u32>();
        let outcome = Outcome::from_rc(rc);
        assert_eq!(outcome, Outcome::from_rc(rc));
        assert!((0..=5).contains(&outcome.exit_code()), "Ordinal out of range for rc 0x{:08X}!", rc);
    }

    debug!("{}: verified {} random codes", function_name!(), configuration.iterations());
}
