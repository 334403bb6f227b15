/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! Translation of command-line hierarchy identifiers into protocol handle values, and the
//! create-primary orchestration on top of the [`EsysBackend`](crate::EsysBackend) seam.

use crate::constants::*;
use crate::esys::{AuthSession, EsysBackend};
use crate::memory::AuthValue;
use crate::types::{PrimaryObject, PrimaryTemplate};
use crate::util::string_to_u32;
use log::error;
use std::ops::BitOr;

// ==========================================================================
// Hierarchy flags
// ==========================================================================

/// Selects which hierarchies a command accepts from its option arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchyFlags(u8);

impl HierarchyFlags {
    pub const NONE: Self = Self(0);
    pub const OWNER: Self = Self(1 << 0);
    pub const PLATFORM: Self = Self(1 << 1);
    pub const ENDORSEMENT: Self = Self(1 << 2);
    pub const NULL: Self = Self(1 << 3);
    pub const LOCKOUT: Self = Self(1 << 4);
    pub const ALL: Self = Self(0x1F);

    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for HierarchyFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// ==========================================================================
// Option argument parsing
// ==========================================================================

/// Parses a hierarchy value from an option argument.
///
/// The value can be a numerical string, as understood by [`string_to_u32`], or any prefix of
/// `"owner"`, `"platform"`, `"endorsement"`, `"null"` or `"lockout"` (so the usual one-letter
/// forms `o`, `p`, `e`, `n` and `l` all work). Values resolving to a hierarchy that is not
/// permitted by `allowed` are rejected. Returns `None`, after logging the reason, if the value
/// cannot be parsed or is not permitted.
pub fn hierarchy_from_arg(value: &str, allowed: HierarchyFlags) -> Option<TPM2_HANDLE> {
    if value.is_empty() {
        return None;
    }

    let mut hierarchy: TPM2_HANDLE = 0;

    if "owner".starts_with(value) {
        hierarchy = TPM2_RH_OWNER;
    }
    if "platform".starts_with(value) {
        hierarchy = TPM2_RH_PLATFORM;
    }
    if "endorsement".starts_with(value) {
        hierarchy = TPM2_RH_ENDORSEMENT;
    }
    if "null".starts_with(value) {
        hierarchy = TPM2_RH_NULL;
    }
    if "lockout".starts_with(value) {
        hierarchy = TPM2_RH_LOCKOUT;
    }

    if hierarchy == 0 {
        /* The raw value may also be a generic (non hierarchy) TPM2_HANDLE. */
        match string_to_u32(value) {
            Some(handle) => hierarchy = handle,
            None => {
                error!("Incorrect handle value, got: \"{}\", expected [o|p|e|n|l] or a handle number", value);
                return None;
            }
        }
    }

    /* Hierarchies given as string or hex handle are additionally filtered here. */
    if (hierarchy == TPM2_RH_OWNER) && !allowed.contains(HierarchyFlags::OWNER) {
        error!("Owner hierarchy not supported by this command.");
        return None;
    }
    if (hierarchy == TPM2_RH_PLATFORM) && !allowed.contains(HierarchyFlags::PLATFORM) {
        error!("Platform hierarchy not supported by this command.");
        return None;
    }
    if (hierarchy == TPM2_RH_ENDORSEMENT) && !allowed.contains(HierarchyFlags::ENDORSEMENT) {
        error!("Endorsement hierarchy not supported by this command.");
        return None;
    }
    if (hierarchy == TPM2_RH_NULL) && !allowed.contains(HierarchyFlags::NULL) {
        error!("NULL hierarchy not supported by this command.");
        return None;
    }
    if (hierarchy == TPM2_RH_LOCKOUT) && !allowed.contains(HierarchyFlags::LOCKOUT) {
        error!("Permanent handle lockout not supported by this command.");
        return None;
    }

    Some(hierarchy)
}

/// Maps a hierarchy handle to the corresponding ESAPI resource handle. Handles that do not
/// name a hierarchy map to [`ESYS_TR_NONE`].
pub fn hierarchy_to_esys_tr(hierarchy: TPM2_HANDLE) -> ESYS_TR {
    match hierarchy {
        TPM2_RH_OWNER => ESYS_TR_RH_OWNER,
        TPM2_RH_PLATFORM => ESYS_TR_RH_PLATFORM,
        TPM2_RH_ENDORSEMENT => ESYS_TR_RH_ENDORSEMENT,
        TPM2_RH_NULL => ESYS_TR_RH_NULL,
        TPM2_RH_LOCKOUT => ESYS_TR_RH_LOCKOUT,
        _other => ESYS_TR_NONE,
    }
}

// ==========================================================================
// Create-primary orchestration
// ==========================================================================

/// Creates a primary key under the given hierarchy.
///
/// Acquires the authorization session handle for the hierarchy and then issues the
/// create-primary call through the backend. On success, the caller owns the returned
/// [`PrimaryObject`]; its resources are released when it is dropped. On failure, the backend's
/// response code is returned unmodified, ready to be decoded and classified.
pub fn create_primary(
    backend: &mut impl EsysBackend,
    session: Option<&AuthSession>,
    hierarchy: TPM2_HANDLE,
    template: &PrimaryTemplate,
    auth_value: Option<&AuthValue>,
) -> Result<PrimaryObject, TSS2_RC> {
    let hierarchy_tr = hierarchy_to_esys_tr(hierarchy);

    let session_handle = match backend.auth_session_handle(hierarchy_tr, session) {
        Ok(handle) => handle,
        Err(rc) => {
            error!("Couldn't get shandle for hierarchy");
            return Err(rc);
        }
    };

    backend.create_primary(hierarchy_tr, session_handle, auth_value, template)
}

// ==========================================================================
// Unit tests
// ==========================================================================

#[cfg(test)]
mod tests {
    use super::{HierarchyFlags, hierarchy_from_arg, hierarchy_to_esys_tr};
    use crate::constants::*;

    #[test]
    fn test_hierarchy_prefixes() {
        for value in ["o", "ow", "owner"] {
            assert_eq!(hierarchy_from_arg(value, HierarchyFlags::ALL), Some(TPM2_RH_OWNER));
        }
        assert_eq!(hierarchy_from_arg("p", HierarchyFlags::ALL), Some(TPM2_RH_PLATFORM));
        assert_eq!(hierarchy_from_arg("e", HierarchyFlags::ALL), Some(TPM2_RH_ENDORSEMENT));
        assert_eq!(hierarchy_from_arg("n", HierarchyFlags::ALL), Some(TPM2_RH_NULL));
        assert_eq!(hierarchy_from_arg("l", HierarchyFlags::ALL), Some(TPM2_RH_LOCKOUT));
        assert_eq!(hierarchy_from_arg("ownerx", HierarchyFlags::ALL), None);
        assert_eq!(hierarchy_from_arg("", HierarchyFlags::ALL), None);
    }

    #[test]
    fn test_hierarchy_numeric() {
        assert_eq!(hierarchy_from_arg("0x40000001", HierarchyFlags::ALL), Some(TPM2_RH_OWNER));
        assert_eq!(hierarchy_from_arg("0x81000001", HierarchyFlags::NONE), Some(0x8100_0001));
    }

    #[test]
    fn test_hierarchy_filter() {
        let allowed = HierarchyFlags::OWNER | HierarchyFlags::ENDORSEMENT;
        assert_eq!(hierarchy_from_arg("o", allowed), Some(TPM2_RH_OWNER));
        assert_eq!(hierarchy_from_arg("p", allowed), None);
        assert_eq!(hierarchy_from_arg("0x4000000C", allowed), None);
    }

    #[test]
    fn test_esys_tr_mapping() {
        assert_eq!(hierarchy_to_esys_tr(TPM2_RH_OWNER), ESYS_TR_RH_OWNER);
        assert_eq!(hierarchy_to_esys_tr(TPM2_RH_PLATFORM), ESYS_TR_RH_PLATFORM);
        assert_eq!(hierarchy_to_esys_tr(TPM2_RH_ENDORSEMENT), ESYS_TR_RH_ENDORSEMENT);
        assert_eq!(hierarchy_to_esys_tr(TPM2_RH_NULL), ESYS_TR_RH_NULL);
        assert_eq!(hierarchy_to_esys_tr(TPM2_RH_LOCKOUT), ESYS_TR_RH_LOCKOUT);
        assert_eq!(hierarchy_to_esys_tr(0x8100_0001), ESYS_TR_NONE);
    }
}
