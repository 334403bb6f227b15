/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! Constants of the TSS 2.0 layered response-code format, as defined by the
//! *TCG TSS 2.0 Overview and Common Structures* specification, plus the TPM 2.0
//! response-code and handle constants referenced by this crate.

#![allow(non_camel_case_types)]

/// A TSS 2.0 response code, as returned by any layer of the TPM software stack.
pub type TSS2_RC = u32;

/// A TPM 2.0 handle value.
pub type TPM2_HANDLE = u32;

/// An ESAPI object/session resource handle.
pub type ESYS_TR = u32;

/// A TPM 2.0 algorithm identifier.
pub type TPM2_ALG_ID = u16;

/// The all-layers success response code.
pub const TSS2_RC_SUCCESS: TSS2_RC = 0x0000;

// ==========================================================================
// Response code layout
// ==========================================================================

/// Number of bits the layer field is shifted by within a [`TSS2_RC`].
pub const TSS2_RC_LAYER_SHIFT: u32 = 16;

/// Mask selecting the layer field of a [`TSS2_RC`].
pub const TSS2_RC_LAYER_MASK: TSS2_RC = 0xFF << TSS2_RC_LAYER_SHIFT;

/// Mask selecting the layer-local error bits of a [`TSS2_RC`].
pub const TSS2_RC_ERROR_MASK: TSS2_RC = 0xFFFF;

/// Layer number of the TPM device itself.
pub const TSS2_TPM_RC_LAYER_NUM: u8 = 0;
/// Layer number of the Feature API (FAPI).
pub const TSS2_FEATURE_RC_LAYER_NUM: u8 = 6;
/// Layer number of the Enhanced System API (ESAPI).
pub const TSS2_ESAPI_RC_LAYER_NUM: u8 = 7;
/// Layer number of the System API (SAPI).
pub const TSS2_SYS_RC_LAYER_NUM: u8 = 8;
/// Layer number of the marshaling/unmarshaling (MU) layer.
pub const TSS2_MU_RC_LAYER_NUM: u8 = 9;
/// Layer number of the TPM Command Transmission Interface (TCTI).
pub const TSS2_TCTI_RC_LAYER_NUM: u8 = 10;
/// Layer number of the resource manager.
pub const TSS2_RESMGR_RC_LAYER_NUM: u8 = 11;
/// Layer number of the TPM layer, as reported through a resource manager.
pub const TSS2_RESMGR_TPM_RC_LAYER_NUM: u8 = 12;

// ==========================================================================
// TPM layer: response code structure bits
// ==========================================================================

/// Format selector: set for "format one" response codes.
pub const TPM2_RC_FMT1: u16 = 0x080;
/// Version flag of "format zero" codes: set for TPM 2.0 codes, clear for TPM 1.2 codes.
pub const TPM2_RC_VER1: u16 = 0x100;
/// Vendor-defined code flag (the "T" bit) of "format zero" codes.
pub const TPM2_RC_VEND: u16 = 0x400;
/// Base value of "format zero" warning codes, i.e. version and severity bits set.
pub const TPM2_RC_WARN: u16 = 0x900;
/// Severity flag (the "S" bit) of "format zero" codes; also the session flag of the format-one subject field.
pub const TPM2_RC_S: u16 = 0x800;
/// Parameter flag (the "P" bit) of "format one" codes.
pub const TPM2_RC_P: u16 = 0x040;

// ==========================================================================
// TPM layer: format-zero error code numbers (bits 6:0)
// ==========================================================================

pub const TPM_RC_INITIALIZE: u16 = 0x00;
pub const TPM_RC_FAILURE: u16 = 0x01;
pub const TPM_RC_SEQUENCE: u16 = 0x03;
pub const TPM_RC_PRIVATE: u16 = 0x0B;
pub const TPM_RC_HMAC: u16 = 0x19;
pub const TPM_RC_DISABLED: u16 = 0x20;
pub const TPM_RC_EXCLUSIVE: u16 = 0x21;
pub const TPM_RC_AUTH_TYPE: u16 = 0x24;
pub const TPM_RC_AUTH_MISSING: u16 = 0x25;
pub const TPM_RC_POLICY: u16 = 0x26;
pub const TPM_RC_PCR: u16 = 0x27;
pub const TPM_RC_PCR_CHANGED: u16 = 0x28;
pub const TPM_RC_UPGRADE: u16 = 0x2D;
pub const TPM_RC_TOO_MANY_CONTEXTS: u16 = 0x2E;
pub const TPM_RC_AUTH_UNAVAILABLE: u16 = 0x2F;
pub const TPM_RC_REBOOT: u16 = 0x30;
pub const TPM_RC_UNBALANCED: u16 = 0x31;
pub const TPM_RC_COMMAND_SIZE: u16 = 0x42;
pub const TPM_RC_COMMAND_CODE: u16 = 0x43;
pub const TPM_RC_AUTHSIZE: u16 = 0x44;
pub const TPM_RC_AUTH_CONTEXT: u16 = 0x45;
pub const TPM_RC_NV_RANGE: u16 = 0x46;
pub const TPM_RC_NV_SIZE: u16 = 0x47;
pub const TPM_RC_NV_LOCKED: u16 = 0x48;
pub const TPM_RC_NV_AUTHORIZATION: u16 = 0x49;
pub const TPM_RC_NV_UNINITIALIZED: u16 = 0x4A;
pub const TPM_RC_NV_SPACE: u16 = 0x4B;
pub const TPM_RC_NV_DEFINED: u16 = 0x4C;
pub const TPM_RC_BAD_CONTEXT: u16 = 0x50;
pub const TPM_RC_CPHASH: u16 = 0x51;
pub const TPM_RC_PARENT: u16 = 0x52;
pub const TPM_RC_NEEDS_TEST: u16 = 0x53;
pub const TPM_RC_NO_RESULT: u16 = 0x54;
pub const TPM_RC_SENSITIVE: u16 = 0x55;

// ==========================================================================
// TPM layer: format-one error code numbers (bits 5:0)
// ==========================================================================

pub const TPM_RC_ASYMMETRIC: u16 = 0x01;
pub const TPM_RC_ATTRIBUTES: u16 = 0x02;
pub const TPM_RC_HASH: u16 = 0x03;
pub const TPM_RC_VALUE: u16 = 0x04;
pub const TPM_RC_HIERARCHY: u16 = 0x05;
pub const TPM_RC_KEY_SIZE: u16 = 0x07;
pub const TPM_RC_MGF: u16 = 0x08;
pub const TPM_RC_MODE: u16 = 0x09;
pub const TPM_RC_TYPE: u16 = 0x0A;
pub const TPM_RC_HANDLE: u16 = 0x0B;
pub const TPM_RC_KDF: u16 = 0x0C;
pub const TPM_RC_RANGE: u16 = 0x0D;
pub const TPM_RC_AUTH_FAIL: u16 = 0x0E;
pub const TPM_RC_NONCE: u16 = 0x0F;
pub const TPM_RC_PP: u16 = 0x10;
pub const TPM_RC_SCHEME: u16 = 0x12;
pub const TPM_RC_SIZE: u16 = 0x15;
pub const TPM_RC_SYMMETRIC: u16 = 0x16;
pub const TPM_RC_TAG: u16 = 0x17;
pub const TPM_RC_SELECTOR: u16 = 0x18;
pub const TPM_RC_INSUFFICIENT: u16 = 0x1A;
pub const TPM_RC_SIGNATURE: u16 = 0x1B;
pub const TPM_RC_KEY: u16 = 0x1C;
pub const TPM_RC_POLICY_FAIL: u16 = 0x1D;
pub const TPM_RC_INTEGRITY: u16 = 0x1F;
pub const TPM_RC_TICKET: u16 = 0x20;
pub const TPM_RC_RESERVED_BITS: u16 = 0x21;
pub const TPM_RC_BAD_AUTH: u16 = 0x22;
pub const TPM_RC_EXPIRED: u16 = 0x23;
pub const TPM_RC_POLICY_CC: u16 = 0x24;
pub const TPM_RC_BINDING: u16 = 0x25;
pub const TPM_RC_CURVE: u16 = 0x26;
pub const TPM_RC_ECC_POINT: u16 = 0x27;

// ==========================================================================
// TPM layer: format-zero warning code numbers (bits 6:0)
// ==========================================================================

pub const TPM_RC_CONTEXT_GAP: u16 = 0x01;
pub const TPM_RC_OBJECT_MEMORY: u16 = 0x02;
pub const TPM_RC_SESSION_MEMORY: u16 = 0x03;
pub const TPM_RC_MEMORY: u16 = 0x04;
pub const TPM_RC_SESSION_HANDLES: u16 = 0x05;
pub const TPM_RC_OBJECT_HANDLES: u16 = 0x06;
pub const TPM_RC_LOCALITY: u16 = 0x07;
pub const TPM_RC_YIELDED: u16 = 0x08;
pub const TPM_RC_CANCELED: u16 = 0x09;
pub const TPM_RC_TESTING: u16 = 0x0A;
pub const TPM_RC_REFERENCE_H0: u16 = 0x10;
pub const TPM_RC_REFERENCE_H1: u16 = 0x11;
pub const TPM_RC_REFERENCE_H2: u16 = 0x12;
pub const TPM_RC_REFERENCE_H3: u16 = 0x13;
pub const TPM_RC_REFERENCE_H4: u16 = 0x14;
pub const TPM_RC_REFERENCE_H5: u16 = 0x15;
pub const TPM_RC_REFERENCE_H6: u16 = 0x16;
pub const TPM_RC_REFERENCE_S0: u16 = 0x18;
pub const TPM_RC_REFERENCE_S1: u16 = 0x19;
pub const TPM_RC_REFERENCE_S2: u16 = 0x1A;
pub const TPM_RC_REFERENCE_S3: u16 = 0x1B;
pub const TPM_RC_REFERENCE_S4: u16 = 0x1C;
pub const TPM_RC_REFERENCE_S5: u16 = 0x1D;
pub const TPM_RC_REFERENCE_S6: u16 = 0x1E;
pub const TPM_RC_NV_RATE: u16 = 0x20;
pub const TPM_RC_LOCKOUT: u16 = 0x21;
pub const TPM_RC_RETRY: u16 = 0x22;
pub const TPM_RC_NV_UNAVAILABLE: u16 = 0x23;

// ==========================================================================
// TSS base error codes, shared by the SAPI, MU and TCTI layers
// ==========================================================================

pub const TSS2_BASE_RC_GENERAL_FAILURE: u16 = 1;
pub const TSS2_BASE_RC_NOT_IMPLEMENTED: u16 = 2;
pub const TSS2_BASE_RC_BAD_CONTEXT: u16 = 3;
pub const TSS2_BASE_RC_ABI_MISMATCH: u16 = 4;
pub const TSS2_BASE_RC_BAD_REFERENCE: u16 = 5;
pub const TSS2_BASE_RC_INSUFFICIENT_BUFFER: u16 = 6;
pub const TSS2_BASE_RC_BAD_SEQUENCE: u16 = 7;
pub const TSS2_BASE_RC_NO_CONNECTION: u16 = 8;
pub const TSS2_BASE_RC_TRY_AGAIN: u16 = 9;
pub const TSS2_BASE_RC_IO_ERROR: u16 = 10;
pub const TSS2_BASE_RC_BAD_VALUE: u16 = 11;
pub const TSS2_BASE_RC_NOT_PERMITTED: u16 = 12;
pub const TSS2_BASE_RC_INVALID_SESSIONS: u16 = 13;
pub const TSS2_BASE_RC_NO_DECRYPT_PARAM: u16 = 14;
pub const TSS2_BASE_RC_NO_ENCRYPT_PARAM: u16 = 15;
pub const TSS2_BASE_RC_BAD_SIZE: u16 = 16;
pub const TSS2_BASE_RC_MALFORMED_RESPONSE: u16 = 17;
pub const TSS2_BASE_RC_INSUFFICIENT_CONTEXT: u16 = 18;
pub const TSS2_BASE_RC_INSUFFICIENT_RESPONSE: u16 = 19;
pub const TSS2_BASE_RC_INCOMPATIBLE_TCTI: u16 = 20;
pub const TSS2_BASE_RC_NOT_SUPPORTED: u16 = 21;
pub const TSS2_BASE_RC_BAD_TCTI_STRUCTURE: u16 = 22;
pub const TSS2_BASE_RC_MEMORY: u16 = 23;
pub const TSS2_BASE_RC_BAD_TR: u16 = 24;
pub const TSS2_BASE_RC_MULTIPLE_DECRYPT_SESSIONS: u16 = 25;
pub const TSS2_BASE_RC_MULTIPLE_ENCRYPT_SESSIONS: u16 = 26;
pub const TSS2_BASE_RC_RSP_AUTH_FAILED: u16 = 27;

// ==========================================================================
// Permanent handles and their ESAPI counterparts
// ==========================================================================

pub const TPM2_RH_OWNER: TPM2_HANDLE = 0x4000_0001;
pub const TPM2_RH_NULL: TPM2_HANDLE = 0x4000_0007;
pub const TPM2_RH_LOCKOUT: TPM2_HANDLE = 0x4000_000A;
pub const TPM2_RH_ENDORSEMENT: TPM2_HANDLE = 0x4000_000B;
pub const TPM2_RH_PLATFORM: TPM2_HANDLE = 0x4000_000C;

pub const ESYS_TR_NONE: ESYS_TR = 0xFFF;
pub const ESYS_TR_PASSWORD: ESYS_TR = 0x0FF;
pub const ESYS_TR_RH_OWNER: ESYS_TR = 0x101;
pub const ESYS_TR_RH_NULL: ESYS_TR = 0x107;
pub const ESYS_TR_RH_LOCKOUT: ESYS_TR = 0x10A;
pub const ESYS_TR_RH_ENDORSEMENT: ESYS_TR = 0x10B;
pub const ESYS_TR_RH_PLATFORM: ESYS_TR = 0x10C;

// ==========================================================================
// Algorithm identifiers
// ==========================================================================

pub const TPM2_ALG_RSA: TPM2_ALG_ID = 0x0001;
pub const TPM2_ALG_SHA1: TPM2_ALG_ID = 0x0004;
pub const TPM2_ALG_KEYEDHASH: TPM2_ALG_ID = 0x0008;
pub const TPM2_ALG_SHA256: TPM2_ALG_ID = 0x000B;
pub const TPM2_ALG_SHA384: TPM2_ALG_ID = 0x000C;
pub const TPM2_ALG_SHA512: TPM2_ALG_ID = 0x000D;
pub const TPM2_ALG_NULL: TPM2_ALG_ID = 0x0010;
pub const TPM2_ALG_SM3_256: TPM2_ALG_ID = 0x0012;
pub const TPM2_ALG_ECC: TPM2_ALG_ID = 0x0023;
pub const TPM2_ALG_SYMCIPHER: TPM2_ALG_ID = 0x0025;
pub const TPM2_ALG_SHA3_256: TPM2_ALG_ID = 0x0027;
pub const TPM2_ALG_SHA3_384: TPM2_ALG_ID = 0x0028;
pub const TPM2_ALG_SHA3_512: TPM2_ALG_ID = 0x0029;
