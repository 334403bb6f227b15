/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use std::fmt::Debug;

#[cfg(unix)]
use libc::explicit_bzero;
#[cfg(unix)]
use std::ffi::c_void;

// ==========================================================================
// AuthValue
// ==========================================================================

/// Wrapper class that holds an authorization secret on its way to the TPM stack.
///
/// The wrapped memory is wiped when the `AuthValue` instance is dropped, and the `Debug`
/// representation never reveals the secret.
pub struct AuthValue {
    auth_data: Vec<u8>,
}

impl AuthValue {
    /// Creates a new `AuthValue` from the given secret bytes.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self { auth_data: secret.into() }
    }

    /// Creates a new `AuthValue` representing the empty authorization value.
    pub fn empty() -> Self {
        Self { auth_data: Vec::new() }
    }

    /// Returns the wrapped secret, which remains valid until the `AuthValue` is dropped.
    pub fn as_bytes(&self) -> &[u8] {
        &self.auth_data[..]
    }

    pub fn is_empty(&self) -> bool {
        self.auth_data.is_empty()
    }
}

impl From<&str> for AuthValue {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes().to_vec())
    }
}

impl Drop for AuthValue {
    fn drop(&mut self) {
        erase_memory(&mut self.auth_data[..]);
    }
}

impl Debug for AuthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthValue({} bytes)", self.auth_data.len())
    }
}

// ==========================================================================
// Utilities
// ==========================================================================

fn erase_memory(buffer: &mut [u8]) {
    if buffer.is_empty() {
        return;
    }
    #[cfg(unix)]
    unsafe {
        explicit_bzero(buffer.as_mut_ptr() as *mut c_void, buffer.len());
    }
    #[cfg(not(unix))]
    unsafe {
        std::ptr::write_bytes(buffer.as_mut_ptr(), 0u8, buffer.len());
    }
}

// ==========================================================================
// Unit tests
// ==========================================================================
