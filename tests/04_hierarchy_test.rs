/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

pub mod common;

use common::setup::TestConfiguration;
use function_name::named;
use log::debug;
use tss2_rc_rs::{
    AuthSession, AuthValue, EsysBackend, HierarchyFlags, Outcome, PrimaryObject, PrimaryTemplate, constants::*, create_primary,
    hierarchy_from_arg, json::object,
};

// ==========================================================================
// Mock backend
// ==========================================================================

/// Plays the role of the external ESAPI stack: hands out session handles and fabricates
/// create-primary outputs, or fails with a configurable response code.
#[derive(Default)]
struct MockEsys {
    fail_shandle: Option<TSS2_RC>,
    fail_create: Option<TSS2_RC>,
    create_calls: usize,
}

impl EsysBackend for MockEsys {
    fn auth_session_handle(&mut self, _hierarchy: ESYS_TR, session: Option<&AuthSession>) -> Result<ESYS_TR, TSS2_RC> {
        match self.fail_shandle {
            Some(rc) => Err(rc),
            None => Ok(session.map_or(ESYS_TR_PASSWORD, AuthSession::handle)),
        }
    }

    fn create_primary(
        &mut self,
        _hierarchy: ESYS_TR,
        _session_handle: ESYS_TR,
        _auth_value: Option<&AuthValue>,
        template: &PrimaryTemplate,
    ) -> Result<PrimaryObject, TSS2_RC> {
        self.create_calls += 1;
        match self.fail_create {
            Some(rc) => Err(rc),
            None => Ok(PrimaryObject::from(
                0x8000_0000,
                vec![template.key_type.id() as u8, template.name_alg.id() as u8],
                vec![0xC0_u8; 16],
                vec![0xDA_u8; 32],
                vec![0x71_u8; 8],
            )),
        }
    }
}

// ==========================================================================
// Test cases
// ==========================================================================

/// Hierarchy tokens parse by prefix, numeric handles parse with strtoul semantics
#[test]
#[named]
fn test_hierarchy_parsing() {
    let _configuration = TestConfiguration::new();
    debug!("Running: {}", function_name!());

    for (value, expected) in [
        ("o", TPM2_RH_OWNER),
        ("owner", TPM2_RH_OWNER),
        ("p", TPM2_RH_PLATFORM),
        ("e", TPM2_RH_ENDORSEMENT),
        ("n", TPM2_RH_NULL),
        ("l", TPM2_RH_LOCKOUT),
        ("0x40000001", TPM2_RH_OWNER),
        ("1073741831", 0x4000_0007),
    ] {
        assert_eq!(hierarchy_from_arg(value, HierarchyFlags::ALL), Some(expected), "Failed for {:?}", value);
    }

    assert_eq!(hierarchy_from_arg("", HierarchyFlags::ALL), None);
    assert_eq!(hierarchy_from_arg("bogus", HierarchyFlags::ALL), None);
    assert_eq!(hierarchy_from_arg("0xZZ", HierarchyFlags::ALL), None);
}

/// The allow-mask filters hierarchies given as word or as raw handle
#[test]
#[named]
fn test_hierarchy_allow_mask() {
    let _configuration = TestConfiguration::new();
    debug!("Running: {}", function_name!());

    let allowed = HierarchyFlags::OWNER | HierarchyFlags::PLATFORM;
    assert_eq!(hierarchy_from_arg("o", allowed), Some(TPM2_RH_OWNER));
    assert_eq!(hierarchy_from_arg("p", allowed), Some(TPM2_RH_PLATFORM));
    assert_eq!(hierarchy_from_arg("e", allowed), None);
    assert_eq!(hierarchy_from_arg("n", allowed), None);
    assert_eq!(hierarchy_from_arg("l", allowed), None);
    assert_eq!(hierarchy_from_arg("0x4000000B", allowed), None);

    /* non-hierarchy handles pass through the filter */
    assert_eq!(hierarchy_from_arg("0x81000001", HierarchyFlags::NONE), Some(0x8100_0001));
}

/// Successful create-primary transfers ownership of all outputs to the caller
#[test]
#[named]
fn test_create_primary() {
    let _configuration = TestConfiguration::new();
    debug!("Running: {}", function_name!());

    let template = PrimaryTemplate::from_json(&object! { "type": "rsa2048", "nameAlg": "sha256" }).unwrap();
    let auth_value = AuthValue::from("my_password");

    let mut backend = MockEsys::default();
    let primary = create_primary(&mut backend, None, TPM2_RH_OWNER, &template, Some(&auth_value)).unwrap();

    assert_eq!(primary.handle, 0x8000_0000);
    assert!(!primary.public_area.is_empty());
    assert_eq!(primary.creation_data.len(), 16usize);
    assert_eq!(primary.creation_hash.len(), 32usize);
    assert_eq!(primary.creation_ticket.len(), 8usize);
    assert_eq!(backend.create_calls, 1usize);
}

/// A started session's handle is used for the authorization
#[test]
#[named]
fn test_create_primary_with_session() {
    let _configuration = TestConfiguration::new();
    debug!("Running: {}", function_name!());

    let session = AuthSession::from_handle(0x0100_0001, None);
    let mut backend = MockEsys::default();
    let primary = create_primary(&mut backend, Some(&session), TPM2_RH_ENDORSEMENT, &PrimaryTemplate::default(), None);
    assert!(primary.is_ok());
}

/// Backend failures propagate unmodified and classify into the expected outcomes
#[test]
#[named]
fn test_create_primary_failures() {
    let _configuration = TestConfiguration::new();
    debug!("Running: {}", function_name!());

    /* session-handle acquisition fails with a TCTI error, create is never reached */
    let mut backend = MockEsys {
        fail_shandle: Some(0x000A_000A),
        ..MockEsys::default()
    };
    let rc = create_primary(&mut backend, None, TPM2_RH_OWNER, &PrimaryTemplate::default(), None).unwrap_err();
    assert_eq!(rc, 0x000A_000A);
    assert_eq!(Outcome::from_rc(rc), Outcome::TctiError);
    assert_eq!(backend.create_calls, 0usize);

    /* the TPM rejects the authorization value */
    let mut backend = MockEsys {
        fail_create: Some(0x0000_098E),
        ..MockEsys::default()
    };
    let rc = create_primary(&mut backend, None, TPM2_RH_OWNER, &PrimaryTemplate::default(), None).unwrap_err();
    assert_eq!(Outcome::from_rc(rc), Outcome::AuthError);
    assert_eq!(backend.create_calls, 1usize);
}
