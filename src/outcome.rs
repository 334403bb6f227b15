/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! Mapping of response codes to the small closed set of tool outcomes.

use crate::constants::*;
use crate::error::{BaseErrorCode, rc_error_bits};

// ==========================================================================
// Outcome
// ==========================================================================

/// The externally visible result category of an operation, derived from a [`TSS2_RC`].
///
/// The discriminant values are used as process exit codes by command-line callers and are part
/// of the external contract: they must never be reordered or renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Outcome {
    /// The operation succeeded.
    Success = 0,
    /// The operation failed for a reason not covered by the other categories.
    GeneralError = 1,
    /// An option or argument had a bad value.
    OptionError = 2,
    /// An authorization check failed.
    AuthError = 3,
    /// Communication with the TPM failed at the transport (TCTI) layer.
    TctiError = 4,
    /// The requested functionality is not implemented or not supported.
    Unsupported = 5,
}

impl Outcome {
    /// Flattens a response code into its error bits and classifies them into an `Outcome`.
    ///
    /// Total and deterministic over all 32-bit inputs; anything not recognized by the fixed
    /// rule set maps to [`GeneralError`](Outcome::GeneralError).
    pub fn from_rc(rc: TSS2_RC) -> Self {
        let error_bits = rc_error_bits(rc);
        if error_bits == 0u16 {
            return Self::Success;
        }

        /* format-one auth failures classify as auth errors for every subject index */
        if error_bits & TPM2_RC_FMT1 != 0 {
            return match error_bits & 0x3F {
                TPM_RC_AUTH_FAIL | TPM_RC_BAD_AUTH => Self::AuthError,
                _ => Self::GeneralError,
            };
        }

        /* remaining TPM codes (format-zero errors and warnings) have no special mapping */
        if error_bits & TPM2_RC_VER1 != 0 {
            return Self::GeneralError;
        }

        match BaseErrorCode::from_raw(error_bits) {
            BaseErrorCode::NotImplemented | BaseErrorCode::NotSupported => Self::Unsupported,
            BaseErrorCode::BadValue => Self::OptionError,
            BaseErrorCode::NoConnection
            | BaseErrorCode::TryAgain
            | BaseErrorCode::IoError
            | BaseErrorCode::IncompatibleTcti
            | BaseErrorCode::BadTctiStructure => Self::TctiError,
            BaseErrorCode::RspAuthFailed => Self::AuthError,
            _ => Self::GeneralError,
        }
    }

    /// The process exit code represented by this outcome.
    pub fn exit_code(self) -> i32 {
        self as i32
    }
}

// ==========================================================================
// Unit tests
// ==========================================================================

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn test_ordinals_are_frozen() {
        assert_eq!(Outcome::Success.exit_code(), 0);
        assert_eq!(Outcome::GeneralError.exit_code(), 1);
        assert_eq!(Outcome::OptionError.exit_code(), 2);
        assert_eq!(Outcome::AuthError.exit_code(), 3);
        assert_eq!(Outcome::TctiError.exit_code(), 4);
        assert_eq!(Outcome::Unsupported.exit_code(), 5);
    }

    #[test]
    fn test_success_bits() {
        for layer in [0x00_u32, 0x06, 0x08, 0x09, 0x0A, 0x2A, 0xFF] {
            assert_eq!(Outcome::from_rc(layer << 16), Outcome::Success);
        }
    }

    #[test]
    fn test_auth_failures() {
        /* session 1 and 2 auth failures, as produced by the TPM for a bad authValue */
        assert_eq!(Outcome::from_rc(0x0000_098E), Outcome::AuthError);
        assert_eq!(Outcome::from_rc(0x0000_0A8E), Outcome::AuthError);
        assert_eq!(Outcome::from_rc(0x0000_09A2), Outcome::AuthError);
        assert_eq!(Outcome::from_rc(0x0000_008E), Outcome::AuthError);
        /* response HMAC verification failure reported by the ESAPI layer */
        assert_eq!(Outcome::from_rc(0x0007_001B), Outcome::AuthError);
    }

    #[test]
    fn test_category_rules() {
        assert_eq!(Outcome::from_rc(0x0008_0002), Outcome::Unsupported);
        assert_eq!(Outcome::from_rc(0x0008_0015), Outcome::Unsupported);
        assert_eq!(Outcome::from_rc(0x0008_000B), Outcome::OptionError);
        assert_eq!(Outcome::from_rc(0x000A_0008), Outcome::TctiError);
        assert_eq!(Outcome::from_rc(0x000A_000A), Outcome::TctiError);
        assert_eq!(Outcome::from_rc(0x000A_0014), Outcome::TctiError);
        assert_eq!(Outcome::from_rc(0x000A_0016), Outcome::TctiError);
        assert_eq!(Outcome::from_rc(0x0000_0101), Outcome::GeneralError);
        assert_eq!(Outcome::from_rc(0x0000_0901), Outcome::GeneralError);
        assert_eq!(Outcome::from_rc(0x0006_FFFF), Outcome::GeneralError);
    }
}
