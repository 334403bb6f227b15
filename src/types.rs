/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use crate::algorithm_id::HashAlgorithm;
use crate::constants::{self, ESYS_TR, TPM2_ALG_ID};
use json::JsonValue;

/// The error type of the template parsing functions.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateError {
    /// The given JSON value is empty or is missing a required attribute.
    InvalidTemplate,
    /// The given key type or algorithm name is not known.
    UnknownAlgorithm,
}

// ==========================================================================
// Key types
// ==========================================================================

/// The public type of a primary object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Rsa,
    Ecc,
    KeyedHash,
    SymCipher,
}

impl KeyType {
    /// Resolves a key-type name, as used in JSON key templates, into a `KeyType`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rsa" | "rsa2048" | "rsa3072" | "rsa4096" => Some(Self::Rsa),
            "ecc" | "ecc_nist_p256" | "ecc_nist_p384" => Some(Self::Ecc),
            "keyedhash" => Some(Self::KeyedHash),
            "symcipher" => Some(Self::SymCipher),
            _ => None,
        }
    }

    /// The TPM 2.0 algorithm identifier of this key type.
    pub fn id(&self) -> TPM2_ALG_ID {
        match self {
            Self::Rsa => constants::TPM2_ALG_RSA,
            Self::Ecc => constants::TPM2_ALG_ECC,
            Self::KeyedHash => constants::TPM2_ALG_KEYEDHASH,
            Self::SymCipher => constants::TPM2_ALG_SYMCIPHER,
        }
    }
}

// ==========================================================================
// Primary key template
// ==========================================================================

/// Template for the public area of a primary key.
///
/// Instances of this struct are consumed by the
/// [`create_primary()`](crate::create_primary) function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryTemplate {
    pub key_type: KeyType,
    pub name_alg: HashAlgorithm,
}

impl PrimaryTemplate {
    pub fn new(key_type: KeyType, name_alg: HashAlgorithm) -> Self {
        Self { key_type, name_alg }
    }

    /// Attempts to create a new `PrimaryTemplate` from the given JSON description, e.g.
    /// `{ "type": "rsa2048", "nameAlg": "sha256" }`.
    ///
    /// This function fails if the JSON value is *empty*, if the `"type"` attribute is missing
    /// or unknown, or if the `"nameAlg"` attribute names an unknown algorithm. A missing
    /// `"nameAlg"` attribute defaults to SHA-256.
    pub fn from_json(json_value: &JsonValue) -> Result<Self, TemplateError> {
        if json_value.is_empty() {
            return Err(TemplateError::InvalidTemplate);
        }

        let key_type = match json_value["type"].as_str() {
            Some(name) => KeyType::from_name(name).ok_or(TemplateError::UnknownAlgorithm)?,
            None => return Err(TemplateError::InvalidTemplate),
        };

        let name_alg = match json_value["nameAlg"].as_str() {
            Some(name) => match HashAlgorithm::from_name(name) {
                HashAlgorithm::UnknownAlgorithm => return Err(TemplateError::UnknownAlgorithm),
                algorithm => algorithm,
            },
            None => HashAlgorithm::Sha2_256,
        };

        Ok(Self { key_type, name_alg })
    }
}

impl Default for PrimaryTemplate {
    /// The RSA-2048/SHA-256 template used by the standard provisioning profile.
    fn default() -> Self {
        Self::new(KeyType::Rsa, HashAlgorithm::Sha2_256)
    }
}

// ==========================================================================
// Primary object
// ==========================================================================

/// Contains the outputs of a successful create-primary operation.
///
/// All contained data is owned by the caller; the underlying resources are released when the
/// `PrimaryObject` instance is dropped.
#[derive(Debug)]
pub struct PrimaryObject {
    /// ESAPI resource handle of the newly created object.
    pub handle: ESYS_TR,
    /// Marshaled public area of the object.
    pub public_area: Vec<u8>,
    /// Marshaled creation data of the object.
    pub creation_data: Vec<u8>,
    /// Digest of the creation data.
    pub creation_hash: Vec<u8>,
    /// Ticket proving the creation data was produced by the TPM.
    pub creation_ticket: Vec<u8>,
}

impl PrimaryObject {
    pub fn from(handle: ESYS_TR, public_area: Vec<u8>, creation_data: Vec<u8>, creation_hash: Vec<u8>, creation_ticket: Vec<u8>) -> Self {
        Self {
            handle,
            public_area,
            creation_data,
            creation_hash,
            creation_ticket,
        }
    }
}

// ==========================================================================
// Unit tests
// ==========================================================================

#[cfg(test)]
mod tests {
    use super::{KeyType, PrimaryTemplate, TemplateError};
    use crate::algorithm_id::HashAlgorithm;
    use json::object;

    #[test]
    fn test_template_from_json() {
        let template = PrimaryTemplate::from_json(&object! { "type": "rsa2048", "nameAlg": "sha256" }).unwrap();
        assert_eq!(template.key_type, KeyType::Rsa);
        assert_eq!(template.name_alg, HashAlgorithm::Sha2_256);

        let template = PrimaryTemplate::from_json(&object! { "type": "ecc_nist_p384", "nameAlg": "sha384" }).unwrap();
        assert_eq!(template.key_type, KeyType::Ecc);
        assert_eq!(template.name_alg, HashAlgorithm::Sha2_384);

        let template = PrimaryTemplate::from_json(&object! { "type": "symcipher" }).unwrap();
        assert_eq!(template.name_alg, HashAlgorithm::Sha2_256);
    }

    #[test]
    fn test_template_errors() {
        assert_eq!(PrimaryTemplate::from_json(&json::JsonValue::new_object()), Err(TemplateError::InvalidTemplate));
        assert_eq!(PrimaryTemplate::from_json(&object! { "nameAlg": "sha256" }), Err(TemplateError::InvalidTemplate));
        assert_eq!(PrimaryTemplate::from_json(&object! { "type": "des" }), Err(TemplateError::UnknownAlgorithm));
        assert_eq!(
            PrimaryTemplate::from_json(&object! { "type": "rsa2048", "nameAlg": "whirlpool" }),
            Err(TemplateError::UnknownAlgorithm)
        );
    }
}
