/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! Seam to the ESAPI layer of an external TPM 2.0 software stack.
//!
//! This crate never talks to a TPM itself; the embedding application supplies an
//! [`EsysBackend`] implementation that forwards to its stack. The response codes returned from
//! the backend are the ones this crate decodes and classifies.

use crate::constants::{ESYS_TR, ESYS_TR_PASSWORD, TSS2_RC};
use crate::memory::AuthValue;
use crate::types::{PrimaryObject, PrimaryTemplate};

// ==========================================================================
// Authorization sessions
// ==========================================================================

/// An authorization session, either a started HMAC/policy session identified by its ESAPI
/// handle, or the built-in password session.
#[derive(Debug)]
pub struct AuthSession {
    handle: ESYS_TR,
    auth_value: Option<AuthValue>,
}

impl AuthSession {
    /// Creates the built-in password session with the given (possibly empty) authorization value.
    pub fn password(auth_value: Option<AuthValue>) -> Self {
        Self {
            handle: ESYS_TR_PASSWORD,
            auth_value,
        }
    }

    /// Wraps a session that was started through the backend, identified by its ESAPI handle.
    pub fn from_handle(handle: ESYS_TR, auth_value: Option<AuthValue>) -> Self {
        Self { handle, auth_value }
    }

    pub fn handle(&self) -> ESYS_TR {
        self.handle
    }

    pub fn auth_value(&self) -> Option<&AuthValue> {
        self.auth_value.as_ref()
    }
}

// ==========================================================================
// Backend interface
// ==========================================================================

/// Interface to the ESAPI layer of the external TPM software stack.
///
/// Implementations forward the calls to their stack and return its [`TSS2_RC`] unmodified on
/// failure, so that the caller can decode and classify it.
pub trait EsysBackend {
    /// Returns the handle to authorize commands against the given hierarchy: the handle of
    /// `session` if one is given, the password session otherwise.
    fn auth_session_handle(&mut self, hierarchy: ESYS_TR, session: Option<&AuthSession>) -> Result<ESYS_TR, TSS2_RC>;

    /// Executes `TPM2_CreatePrimary` for the given hierarchy and template.
    ///
    /// On success, ownership of all outputs transfers to the caller as a single
    /// [`PrimaryObject`]; on failure nothing is allocated.
    fn create_primary(
        &mut self,
        hierarchy: ESYS_TR,
        session_handle: ESYS_TR,
        auth_value: Option<&AuthValue>,
        template: &PrimaryTemplate,
    ) -> Result<PrimaryObject, TSS2_RC>;
}
