/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! Typed decomposition of the layer-local error bits of a [`TSS2_RC`].
//!
//! The TPM device layer uses the two response-code formats documented in section 6.6 of the
//! *TPM 2.0 Library Specification, Part 2 (Structures)*, while the SAPI, MU and TCTI layers
//! share the flat TSS base error codes. Both families are decomposed into enums here; the
//! per-layer rendering that builds the final diagnostic string lives in
//! [`LayerRegistry::decode`](crate::LayerRegistry::decode).

use crate::constants::*;
use std::borrow::Cow;

/// Retrieves the layer number from a [`TSS2_RC`], i.e. the subsystem that produced the code.
pub fn rc_layer_number(rc: TSS2_RC) -> u8 {
    ((rc & TSS2_RC_LAYER_MASK) >> TSS2_RC_LAYER_SHIFT) as u8
}

/// Retrieves the layer-local error bits from a [`TSS2_RC`]. A value of zero always indicates
/// success, regardless of the layer.
pub fn rc_error_bits(rc: TSS2_RC) -> u16 {
    (rc & TSS2_RC_ERROR_MASK) as u16
}

/* Highest format-zero code number covered by the error and warning description tables */
const FMT0_ERR_CODE_MAX: u16 = TPM_RC_SENSITIVE;
const FMT0_WARN_CODE_MAX: u16 = TPM_RC_NV_UNAVAILABLE;

// ==========================================================================
// TSS base error codes
// ==========================================================================

/// Generic TSS2 error codes, as used by the SAPI, MU and TCTI layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseErrorCode {
    GeneralFailure,
    NotImplemented,
    BadContext,
    AbiMismatch,
    BadReference,
    InsufficientBuffer,
    BadSequence,
    NoConnection,
    TryAgain,
    IoError,
    BadValue,
    NotPermitted,
    InvalidSessions,
    NoDecryptParam,
    NoEncryptParam,
    BadSize,
    MalformedResponse,
    InsufficientContext,
    InsufficientResponse,
    IncompatibleTcti,
    NotSupported,
    BadTctiStructure,
    Memory,
    BadTr,
    MultipleDecryptSessions,
    MultipleEncryptSessions,
    RspAuthFailed,
    Unknown(u16),
}

impl BaseErrorCode {
    /// Decomposes the error bits of a SAPI/MU/TCTI-layer response code.
    pub fn from_raw(error_bits: u16) -> Self {
        match error_bits {
            TSS2_BASE_RC_GENERAL_FAILURE => Self::GeneralFailure,
            TSS2_BASE_RC_NOT_IMPLEMENTED => Self::NotImplemented,
            TSS2_BASE_RC_BAD_CONTEXT => Self::BadContext,
            TSS2_BASE_RC_ABI_MISMATCH => Self::AbiMismatch,
            TSS2_BASE_RC_BAD_REFERENCE => Self::BadReference,
            TSS2_BASE_RC_INSUFFICIENT_BUFFER => Self::InsufficientBuffer,
            TSS2_BASE_RC_BAD_SEQUENCE => Self::BadSequence,
            TSS2_BASE_RC_NO_CONNECTION => Self::NoConnection,
            TSS2_BASE_RC_TRY_AGAIN => Self::TryAgain,
            TSS2_BASE_RC_IO_ERROR => Self::IoError,
            TSS2_BASE_RC_BAD_VALUE => Self::BadValue,
            TSS2_BASE_RC_NOT_PERMITTED => Self::NotPermitted,
            TSS2_BASE_RC_INVALID_SESSIONS => Self::InvalidSessions,
            TSS2_BASE_RC_NO_DECRYPT_PARAM => Self::NoDecryptParam,
            TSS2_BASE_RC_NO_ENCRYPT_PARAM => Self::NoEncryptParam,
            TSS2_BASE_RC_BAD_SIZE => Self::BadSize,
            TSS2_BASE_RC_MALFORMED_RESPONSE => Self::MalformedResponse,
            TSS2_BASE_RC_INSUFFICIENT_CONTEXT => Self::InsufficientContext,
            TSS2_BASE_RC_INSUFFICIENT_RESPONSE => Self::InsufficientResponse,
            TSS2_BASE_RC_INCOMPATIBLE_TCTI => Self::IncompatibleTcti,
            TSS2_BASE_RC_NOT_SUPPORTED => Self::NotSupported,
            TSS2_BASE_RC_BAD_TCTI_STRUCTURE => Self::BadTctiStructure,
            TSS2_BASE_RC_MEMORY => Self::Memory,
            TSS2_BASE_RC_BAD_TR => Self::BadTr,
            TSS2_BASE_RC_MULTIPLE_DECRYPT_SESSIONS => Self::MultipleDecryptSessions,
            TSS2_BASE_RC_MULTIPLE_ENCRYPT_SESSIONS => Self::MultipleEncryptSessions,
            TSS2_BASE_RC_RSP_AUTH_FAILED => Self::RspAuthFailed,
            _ => Self::Unknown(error_bits),
        }
    }

    /// The `strerror(3)`-style description of this error code, or `None` for unknown codes.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            Self::GeneralFailure => Some("Catch all for all errors not otherwise specified"),
            Self::NotImplemented => Some("If called functionality isn't implemented"),
            Self::BadContext => Some("A context structure is bad"),
            Self::AbiMismatch => Some("Passed in ABI version doesn't match called module's ABI version"),
            Self::BadReference => Some("A pointer is NULL that isn't allowed to be NULL."),
            Self::InsufficientBuffer => Some("A buffer isn't large enough"),
            Self::BadSequence => Some("Function called in the wrong order"),
            Self::NoConnection => Some("Fails to connect to next lower layer"),
            Self::TryAgain => Some("Operation timed out; function must be called again to be completed"),
            Self::IoError => Some("IO failure"),
            Self::BadValue => Some("A parameter has a bad value"),
            Self::NotPermitted => Some("Operation not permitted."),
            Self::InvalidSessions => Some("Session structures were sent, but command doesn't use them or doesn't use the specified number of them"),
            Self::NoDecryptParam => Some("If function called that uses decrypt parameter, but command doesn't support decrypt parameter."),
            Self::NoEncryptParam => Some("If function called that uses encrypt parameter, but command doesn't support decrypt parameter."),
            Self::BadSize => Some("If size of a parameter is incorrect"),
            Self::MalformedResponse => Some("Response is malformed"),
            Self::InsufficientContext => Some("Context not large enough"),
            Self::InsufficientResponse => Some("Response is not long enough"),
            Self::IncompatibleTcti => Some("Unknown or unusable TCTI version"),
            Self::NotSupported => Some("Functionality not supported"),
            Self::BadTctiStructure => Some("TCTI context is bad"),
            Self::Memory => Some("Failed to allocate memory"),
            Self::BadTr => Some("The ESYS_TR resource object is bad"),
            Self::MultipleDecryptSessions => Some("Multiple sessions were marked with attribute decrypt"),
            Self::MultipleEncryptSessions => Some("Multiple sessions were marked with attribute encrypt"),
            Self::RspAuthFailed => Some("Authorizing the TPM response failed"),
            Self::Unknown(_) => None,
        }
    }
}

// ==========================================================================
// TPM layer: format-zero errors
// ==========================================================================

/// TPM 2.0 "format zero" error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TpmErrFmt0 {
    Initialize,
    Failure,
    Sequence,
    Private,
    Hmac,
    Disabled,
    Exclusive,
    AuthType,
    AuthMissing,
    Policy,
    Pcr,
    PcrChanged,
    Upgrade,
    TooManyContexts,
    AuthUnavailable,
    Reboot,
    Unbalanced,
    CommandSize,
    CommandCode,
    AuthSize,
    AuthContext,
    NvRange,
    NvSize,
    NvLocked,
    NvAuthorization,
    NvUninitialized,
    NvSpace,
    NvDefined,
    BadContext,
    CpHash,
    Parent,
    NeedsTest,
    NoResult,
    Sensitive,
    Unknown(u16),
}

impl TpmErrFmt0 {
    pub fn from_raw(error_bits: u16) -> Self {
        match error_bits & 0x7F {
            TPM_RC_INITIALIZE => Self::Initialize,
            TPM_RC_FAILURE => Self::Failure,
            TPM_RC_SEQUENCE => Self::Sequence,
            TPM_RC_PRIVATE => Self::Private,
            TPM_RC_HMAC => Self::Hmac,
            TPM_RC_DISABLED => Self::Disabled,
            TPM_RC_EXCLUSIVE => Self::Exclusive,
            TPM_RC_AUTH_TYPE => Self::AuthType,
            TPM_RC_AUTH_MISSING => Self::AuthMissing,
            TPM_RC_POLICY => Self::Policy,
            TPM_RC_PCR => Self::Pcr,
            TPM_RC_PCR_CHANGED => Self::PcrChanged,
            TPM_RC_UPGRADE => Self::Upgrade,
            TPM_RC_TOO_MANY_CONTEXTS => Self::TooManyContexts,
            TPM_RC_AUTH_UNAVAILABLE => Self::AuthUnavailable,
            TPM_RC_REBOOT => Self::Reboot,
            TPM_RC_UNBALANCED => Self::Unbalanced,
            TPM_RC_COMMAND_SIZE => Self::CommandSize,
            TPM_RC_COMMAND_CODE => Self::CommandCode,
            TPM_RC_AUTHSIZE => Self::AuthSize,
            TPM_RC_AUTH_CONTEXT => Self::AuthContext,
            TPM_RC_NV_RANGE => Self::NvRange,
            TPM_RC_NV_SIZE => Self::NvSize,
            TPM_RC_NV_LOCKED => Self::NvLocked,
            TPM_RC_NV_AUTHORIZATION => Self::NvAuthorization,
            TPM_RC_NV_UNINITIALIZED => Self::NvUninitialized,
            TPM_RC_NV_SPACE => Self::NvSpace,
            TPM_RC_NV_DEFINED => Self::NvDefined,
            TPM_RC_BAD_CONTEXT => Self::BadContext,
            TPM_RC_CPHASH => Self::CpHash,
            TPM_RC_PARENT => Self::Parent,
            TPM_RC_NEEDS_TEST => Self::NeedsTest,
            TPM_RC_NO_RESULT => Self::NoResult,
            TPM_RC_SENSITIVE => Self::Sensitive,
            unknown => Self::Unknown(unknown),
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        match self {
            Self::Initialize => Some("TPM not initialized by TPM2_Startup or already initialized"),
            Self::Failure => Some("commands not being accepted because of a TPM failure"),
            Self::Sequence => Some("improper use of a sequence handle"),
            Self::Private => Some("not currently used"),
            Self::Hmac => Some("not currently used"),
            Self::Disabled => Some("the command is disabled"),
            Self::Exclusive => Some("command failed because audit sequence required exclusivity"),
            Self::AuthType => Some("authorization handle is not correct for command"),
            Self::AuthMissing => Some("command requires an authorization session for handle and it is not present"),
            Self::Policy => Some("policy failure in math operation or an invalid authPolicy value"),
            Self::Pcr => Some("PCR check fail"),
            Self::PcrChanged => Some("PCR have changed since checked"),
            Self::Upgrade => Some("indicates that the TPM is in field upgrade mode, except for TPM2_FieldUpgradeData(), where it indicates that the TPM is not in field upgrade mode"),
            Self::TooManyContexts => Some("context ID counter is at maximum"),
            Self::AuthUnavailable => Some("authValue or authPolicy is not available for selected entity"),
            Self::Reboot => Some("a _TPM_Init and Startup(CLEAR) is required before the TPM can resume operation"),
            Self::Unbalanced => Some("the protection algorithms (hash and symmetric) are not reasonably balanced; the digest size of the hash must be larger than the key size of the symmetric algorithm"),
            Self::CommandSize => Some("command commandSize value is inconsistent with contents of the command buffer; either the size is not the same as the octets loaded by the hardware interface layer or the value is not large enough to hold a command header"),
            Self::CommandCode => Some("command code not supported"),
            Self::AuthSize => Some("the value of authorizationSize is out of range or the number of octets in the Authorization Area is greater than required"),
            Self::AuthContext => Some("use of an authorization session with a context command or another command that cannot have an authorization session"),
            Self::NvRange => Some("NV offset+size is out of range"),
            Self::NvSize => Some("Requested allocation size is larger than allowed"),
            Self::NvLocked => Some("NV access locked"),
            Self::NvAuthorization => Some("NV access authorization fails in command actions"),
            Self::NvUninitialized => Some("an NV Index is used before being initialized or the state saved by TPM2_Shutdown(STATE) could not be restored"),
            Self::NvSpace => Some("insufficient space for NV allocation"),
            Self::NvDefined => Some("NV Index or persistent object already defined"),
            Self::BadContext => Some("context in TPM2_ContextLoad() is not valid"),
            Self::CpHash => Some("cpHash value already set or not correct for use"),
            Self::Parent => Some("handle for parent is not a valid parent"),
            Self::NeedsTest => Some("some function needs testing"),
            Self::NoResult => Some("returned when an internal function cannot process a request due to an unspecified problem, mostly related to invalid parameters that are not properly filtered by the input unmarshaling code"),
            Self::Sensitive => Some("the sensitive area did not unmarshal correctly after decryption"),
            Self::Unknown(_) => None,
        }
    }
}

// ==========================================================================
// TPM layer: format-zero warnings
// ==========================================================================

/// TPM 2.0 "format zero" warning codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TpmWarning {
    ContextGap,
    ObjectMemory,
    SessionMemory,
    Memory,
    SessionHandles,
    ObjectHandles,
    Locality,
    Yielded,
    Cancelled,
    Testing,
    ReferenceH0,
    ReferenceH1,
    ReferenceH2,
    ReferenceH3,
    ReferenceH4,
    ReferenceH5,
    ReferenceH6,
    ReferenceS0,
    ReferenceS1,
    ReferenceS2,
    ReferenceS3,
    ReferenceS4,
    ReferenceS5,
    ReferenceS6,
    NvRate,
    Lockout,
    Retry,
    NvUnavailable,
    Unknown(u16),
}

impl TpmWarning {
    pub fn from_raw(error_bits: u16) -> Self {
        match error_bits & 0x7F {
            TPM_RC_CONTEXT_GAP => Self::ContextGap,
            TPM_RC_OBJECT_MEMORY => Self::ObjectMemory,
            TPM_RC_SESSION_MEMORY => Self::SessionMemory,
            TPM_RC_MEMORY => Self::Memory,
            TPM_RC_SESSION_HANDLES => Self::SessionHandles,
            TPM_RC_OBJECT_HANDLES => Self::ObjectHandles,
            TPM_RC_LOCALITY => Self::Locality,
            TPM_RC_YIELDED => Self::Yielded,
            TPM_RC_CANCELED => Self::Cancelled,
            TPM_RC_TESTING => Self::Testing,
            TPM_RC_REFERENCE_H0 => Self::ReferenceH0,
            TPM_RC_REFERENCE_H1 => Self::ReferenceH1,
            TPM_RC_REFERENCE_H2 => Self::ReferenceH2,
            TPM_RC_REFERENCE_H3 => Self::ReferenceH3,
            TPM_RC_REFERENCE_H4 => Self::ReferenceH4,
            TPM_RC_REFERENCE_H5 => Self::ReferenceH5,
            TPM_RC_REFERENCE_H6 => Self::ReferenceH6,
            TPM_RC_REFERENCE_S0 => Self::ReferenceS0,
            TPM_RC_REFERENCE_S1 => Self::ReferenceS1,
            TPM_RC_REFERENCE_S2 => Self::ReferenceS2,
            TPM_RC_REFERENCE_S3 => Self::ReferenceS3,
            TPM_RC_REFERENCE_S4 => Self::ReferenceS4,
            TPM_RC_REFERENCE_S5 => Self::ReferenceS5,
            TPM_RC_REFERENCE_S6 => Self::ReferenceS6,
            TPM_RC_NV_RATE => Self::NvRate,
            TPM_RC_LOCKOUT => Self::Lockout,
            TPM_RC_RETRY => Self::Retry,
            TPM_RC_NV_UNAVAILABLE => Self::NvUnavailable,
            unknown => Self::Unknown(unknown),
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        match self {
            Self::ContextGap => Some("gap for context ID is too large"),
            Self::ObjectMemory => Some("out of memory for object contexts"),
            Self::SessionMemory => Some("out of memory for session contexts"),
            Self::Memory => Some("out of shared object/session memory or need space for internal operations"),
            Self::SessionHandles => Some("out of session handles; a session must be flushed before a new session may be created"),
            Self::ObjectHandles => Some("out of object handles; the handle space for objects is depleted and a reboot is required"),
            Self::Locality => Some("bad locality"),
            Self::Yielded => Some("the TPM has suspended operation on the command; forward progress was made and the command may be retried"),
            Self::Cancelled => Some("the command was canceled"),
            Self::Testing => Some("TPM is performing self-tests"),
            Self::ReferenceH0 => Some("the 1st handle in the handle area references a transient object or session that is not loaded"),
            Self::ReferenceH1 => Some("the 2nd handle in the handle area references a transient object or session that is not loaded"),
            Self::ReferenceH2 => Some("the 3rd handle in the handle area references a transient object or session that is not loaded"),
            Self::ReferenceH3 => Some("the 4th handle in the handle area references a transient object or session that is not loaded"),
            Self::ReferenceH4 => Some("the 5th handle in the handle area references a transient object or session that is not loaded"),
            Self::ReferenceH5 => Some("the 6th handle in the handle area references a transient object or session that is not loaded"),
            Self::ReferenceH6 => Some("the 7th handle in the handle area references a transient object or session that is not loaded"),
            Self::ReferenceS0 => Some("the 1st authorization session handle references a session that is not loaded"),
            Self::ReferenceS1 => Some("the 2nd authorization session handle references a session that is not loaded"),
            Self::ReferenceS2 => Some("the 3rd authorization session handle references a session that is not loaded"),
            Self::ReferenceS3 => Some("the 4th authorization session handle references a session that is not loaded"),
            Self::ReferenceS4 => Some("the 5th authorization session handle references a session that is not loaded"),
            Self::ReferenceS5 => Some("the 6th authorization session handle references a session that is not loaded"),
            Self::ReferenceS6 => Some("the 7th authorization session handle references a session that is not loaded"),
            Self::NvRate => Some("the TPM is rate-limiting accesses to prevent wearout of NV"),
            Self::Lockout => Some("authorizations for objects subject to DA protection are not allowed at this time because the TPM is in DA lockout mode"),
            Self::Retry => Some("the TPM was not able to start the command"),
            Self::NvUnavailable => Some("the command may require writing of NV and NV is not current accessible"),
            Self::Unknown(_) => None,
        }
    }
}

// ==========================================================================
// TPM layer: format-one errors
// ==========================================================================

/// TPM 2.0 "format one" error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TpmErrFmt1 {
    Asymmetric,
    Attributes,
    Hash,
    Value,
    Hierarchy,
    KeySize,
    Mgf,
    Mode,
    Type,
    Handle,
    Kdf,
    Range,
    AuthFail,
    Nonce,
    PP,
    Scheme,
    Size,
    Symmetric,
    Tag,
    Selector,
    Insufficient,
    Signature,
    Key,
    PolicyFail,
    Integrity,
    Ticket,
    ReservedBits,
    BadAuth,
    Expired,
    PolicyCC,
    Binding,
    Curve,
    EccPoint,
    Unknown(u16),
}

impl TpmErrFmt1 {
    pub fn from_raw(error_bits: u16) -> Self {
        match error_bits & 0x3F {
            TPM_RC_ASYMMETRIC => Self::Asymmetric,
            TPM_RC_ATTRIBUTES => Self::Attributes,
            TPM_RC_HASH => Self::Hash,
            TPM_RC_VALUE => Self::Value,
            TPM_RC_HIERARCHY => Self::Hierarchy,
            TPM_RC_KEY_SIZE => Self::KeySize,
            TPM_RC_MGF => Self::Mgf,
            TPM_RC_MODE => Self::Mode,
            TPM_RC_TYPE => Self::Type,
            TPM_RC_HANDLE => Self::Handle,
            TPM_RC_KDF => Self::Kdf,
            TPM_RC_RANGE => Self::Range,
            TPM_RC_AUTH_FAIL => Self::AuthFail,
            TPM_RC_NONCE => Self::Nonce,
            TPM_RC_PP => Self::PP,
            TPM_RC_SCHEME => Self::Scheme,
            TPM_RC_SIZE => Self::Size,
            TPM_RC_SYMMETRIC => Self::Symmetric,
            TPM_RC_TAG => Self::Tag,
            TPM_RC_SELECTOR => Self::Selector,
            TPM_RC_INSUFFICIENT => Self::Insufficient,
            TPM_RC_SIGNATURE => Self::Signature,
            TPM_RC_KEY => Self::Key,
            TPM_RC_POLICY_FAIL => Self::PolicyFail,
            TPM_RC_INTEGRITY => Self::Integrity,
            TPM_RC_TICKET => Self::Ticket,
            TPM_RC_RESERVED_BITS => Self::ReservedBits,
            TPM_RC_BAD_AUTH => Self::BadAuth,
            TPM_RC_EXPIRED => Self::Expired,
            TPM_RC_POLICY_CC => Self::PolicyCC,
            TPM_RC_BINDING => Self::Binding,
            TPM_RC_CURVE => Self::Curve,
            TPM_RC_ECC_POINT => Self::EccPoint,
            unknown => Self::Unknown(unknown),
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        match self {
            Self::Asymmetric => Some("asymmetric algorithm not supported or not correct"),
            Self::Attributes => Some("inconsistent attributes"),
            Self::Hash => Some("hash algorithm not supported or not appropriate"),
            Self::Value => Some("value is out of range or is not correct for the context"),
            Self::Hierarchy => Some("hierarchy is not enabled or is not correct for the use"),
            Self::KeySize => Some("key size is not supported"),
            Self::Mgf => Some("mask generation function or symmetric alg mismatch"),
            Self::Mode => Some("mode of operation not supported for the key"),
            Self::Type => Some("the type of the value is not appropriate for the use"),
            Self::Handle => Some("the handle is not correct for the use"),
            Self::Kdf => Some("unsupported key derivation function or function not appropriate for use"),
            Self::Range => Some("value was out of allowed range"),
            Self::AuthFail => Some("the authorization HMAC check failed and DA counter incremented"),
            Self::Nonce => Some("invalid nonce size or nonce value mismatch"),
            Self::PP => Some("authorization requires assertion of PP"),
            Self::Scheme => Some("unsupported or incompatible scheme"),
            Self::Size => Some("structure is the wrong size"),
            Self::Symmetric => Some("unsupported symmetric algorithm or key size, or not appropriate for instance"),
            Self::Tag => Some("incorrect structure tag"),
            Self::Selector => Some("union selector is incorrect"),
            Self::Insufficient => Some("the TPM was unable to unmarshal a value because there were not enough octets in the input buffer"),
            Self::Signature => Some("the signature is not valid"),
            Self::Key => Some("key fields are not compatible with the selected use"),
            Self::PolicyFail => Some("a policy check failed"),
            Self::Integrity => Some("integrity check failed"),
            Self::Ticket => Some("invalid ticket"),
            Self::ReservedBits => Some("reserved bits not set to zero as required"),
            Self::BadAuth => Some("authorization failure without DA implications"),
            Self::Expired => Some("the policy has expired"),
            Self::PolicyCC => Some("the commandCode in the policy is not the commandCode of the command or the command code in a policy command references a command that is not implemented"),
            Self::Binding => Some("public and sensitive portions of an object are not cryptographically bound"),
            Self::Curve => Some("curve not supported"),
            Self::EccPoint => Some("point is not on the required curve"),
            Self::Unknown(_) => None,
        }
    }
}

// ==========================================================================
// TPM layer: format-one subject field
// ==========================================================================

/// Identifies the handle, session or parameter a "format one" error code refers to.
/// An index of zero means the subject was not specified by the TPM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fmt1Subject {
    Handle(u8),
    Session(u8),
    Parameter(u8),
}

impl Fmt1Subject {
    pub fn from_raw(error_bits: u16) -> Self {
        let number = ((error_bits >> 8) & 0xF) as u8;
        if error_bits & TPM2_RC_P != 0 {
            Self::Parameter(number & 0x7)
        } else if number & 0x8 != 0 {
            Self::Session(number & 0x7)
        } else {
            Self::Handle(number & 0x7)
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Self::Handle(index) | Self::Session(index) | Self::Parameter(index) => *index,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Handle(_index) => "handle",
            Self::Session(_index) => "session",
            Self::Parameter(_index) => "parameter",
        }
    }
}

// ==========================================================================
// TPM layer: response code wrapper
// ==========================================================================

/// A decomposed TPM device-layer response code, covering both documented formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TpmRc {
    /// TPM 2.0 "format zero" error.
    Fmt0(TpmErrFmt0),
    /// TPM 2.0 "format one" error with the handle/session/parameter it refers to.
    Fmt1(TpmErrFmt1, Fmt1Subject),
    /// TPM 2.0 "format zero" warning.
    Warning(TpmWarning),
    /// Vendor-defined "format zero" code.
    Vendor { warning: bool, code: u16 },
    /// TPM 1.2 backward-compatible code.
    Legacy { warning: bool, code: u16 },
}

impl TpmRc {
    /// Decomposes the error bits of a TPM device-layer response code.
    pub fn from_raw(error_bits: u16) -> Self {
        if error_bits & TPM2_RC_FMT1 != 0 {
            Self::Fmt1(TpmErrFmt1::from_raw(error_bits), Fmt1Subject::from_raw(error_bits))
        } else if error_bits & TPM2_RC_VER1 == 0 {
            Self::Legacy {
                warning: error_bits & TPM2_RC_S != 0,
                code: error_bits & 0x7F,
            }
        } else if error_bits & TPM2_RC_VEND != 0 {
            Self::Vendor {
                warning: error_bits & TPM2_RC_S != 0,
                code: error_bits & 0x7F,
            }
        } else if error_bits & TPM2_RC_S != 0 {
            Self::Warning(TpmWarning::from_raw(error_bits))
        } else {
            Self::Fmt0(TpmErrFmt0::from_raw(error_bits))
        }
    }

    /// Renders the diagnostic message for this response code, in the documented
    /// `"<error|warn>(<version>): <description>"` or `"<subject>(<index>):<description>"`
    /// format. Returns `None` when the code number lies beyond the description tables, in
    /// which case the caller falls back to the generic hexadecimal rendering.
    pub(crate) fn render(&self) -> Option<Cow<'static, str>> {
        match self {
            Self::Fmt0(error) => match error.description() {
                Some(description) => Some(Cow::Owned(format!("error(2.0): {}", description))),
                None => match error {
                    TpmErrFmt0::Unknown(code) if *code <= FMT0_ERR_CODE_MAX => {
                        Some(Cow::Owned(format!("error(2.0): unknown error number: 0x{:X}", code)))
                    }
                    _ => None,
                },
            },
            Self::Warning(warning) => match warning.description() {
                Some(description) => Some(Cow::Owned(format!("warn(2.0): {}", description))),
                None => match warning {
                    TpmWarning::Unknown(code) if *code <= FMT0_WARN_CODE_MAX => {
                        Some(Cow::Owned(format!("warn(2.0): unknown error number: 0x{:X}", code)))
                    }
                    _ => None,
                },
            },
            Self::Fmt1(error, subject) => {
                /* unknown format-one codes render the table's own out-of-range entry */
                let description = error.description().unwrap_or("value is out of range or is not correct for the context");
                Some(Cow::Owned(match subject.index() {
                    0u8 => format!("{}(unk):{}", subject.label(), description),
                    index => format!("{}({}):{}", subject.label(), index, description),
                }))
            }
            Self::Vendor { warning, code } => Some(Cow::Owned(format!(
                "{}(2.0): vendor specific error: 0x{:X}",
                if *warning { "warn" } else { "error" },
                code
            ))),
            Self::Legacy { warning, code: _code } => Some(Cow::Owned(format!(
                "{}(1.2): unknown version 1.2 error code",
                if *warning { "warn" } else { "error" }
            ))),
        }
    }
}

// ==========================================================================
// Unit tests
// ==========================================================================
