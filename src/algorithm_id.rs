/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use crate::constants::{self, TPM2_ALG_ID};

/// Identifies the hash algorithm to be used, e.g. as the name algorithm of a primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// Secure Hash Algorithm 1
    Sha1,
    /// Secure Hash Algorithm 2 with 256-Bit output (SHA-256)
    Sha2_256,
    /// Secure Hash Algorithm 2 with 384-Bit output (SHA-384)
    Sha2_384,
    /// Secure Hash Algorithm 2 with 512-Bit output (SHA-512)
    Sha2_512,
    /// Secure Hash Algorithm 3 with 256-Bit output (SHA3-256)
    Sha3_256,
    /// Secure Hash Algorithm 3 with 384-Bit output (SHA3-384)
    Sha3_384,
    /// Secure Hash Algorithm 3 with 512-Bit output (SHA3-512)
    Sha3_512,
    /// ShangMi 3 hash function with 256-Bit output
    SM3_256,
    /// Unknown hash algorithm
    UnknownAlgorithm,
}

impl HashAlgorithm {
    /// Resolves a TPM 2.0 algorithm identifier into a `HashAlgorithm`.
    pub fn from_id(algo_id: TPM2_ALG_ID) -> Self {
        match algo_id {
            constants::TPM2_ALG_SHA1 => Self::Sha1,
            constants::TPM2_ALG_SHA256 => Self::Sha2_256,
            constants::TPM2_ALG_SHA384 => Self::Sha2_384,
            constants::TPM2_ALG_SHA512 => Self::Sha2_512,
            constants::TPM2_ALG_SHA3_256 => Self::Sha3_256,
            constants::TPM2_ALG_SHA3_384 => Self::Sha3_384,
            constants::TPM2_ALG_SHA3_512 => Self::Sha3_512,
            constants::TPM2_ALG_SM3_256 => Self::SM3_256,
            _ => Self::UnknownAlgorithm,
        }
    }

    /// Resolves an algorithm name, as used in JSON key templates, into a `HashAlgorithm`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "sha1" => Self::Sha1,
            "sha256" | "sha2-256" => Self::Sha2_256,
            "sha384" | "sha2-384" => Self::Sha2_384,
            "sha512" | "sha2-512" => Self::Sha2_512,
            "sha3-256" => Self::Sha3_256,
            "sha3-384" => Self::Sha3_384,
            "sha3-512" => Self::Sha3_512,
            "sm3" | "sm3-256" => Self::SM3_256,
            _ => Self::UnknownAlgorithm,
        }
    }

    /// The TPM 2.0 algorithm identifier of this hash algorithm, with `TPM2_ALG_NULL` standing
    /// in for unknown algorithms.
    pub fn id(&self) -> TPM2_ALG_ID {
        match self {
            Self::Sha1 => constants::TPM2_ALG_SHA1,
            Self::Sha2_256 => constants::TPM2_ALG_SHA256,
            Self::Sha2_384 => constants::TPM2_ALG_SHA384,
            Self::Sha2_512 => constants::TPM2_ALG_SHA512,
            Self::Sha3_256 => constants::TPM2_ALG_SHA3_256,
            Self::Sha3_384 => constants::TPM2_ALG_SHA3_384,
            Self::Sha3_512 => constants::TPM2_ALG_SHA3_512,
            Self::SM3_256 => constants::TPM2_ALG_SM3_256,
            Self::UnknownAlgorithm => constants::TPM2_ALG_NULL,
        }
    }
}

// ==========================================================================
// Unit tests
// ==========================================================================

#[cfg(test)]
mod tests {
    use super::HashAlgorithm;
    use std::collections::HashSet;

    #[test]
    fn test_hash_ids() {
        let mut id_set: HashSet<HashAlgorithm> = HashSet::new();
        for algorithm_id in 0u16..=0xFFFF_u16 {
            match HashAlgorithm::from_id(algorithm_id) {
                HashAlgorithm::UnknownAlgorithm => (),
                identifier => {
                    assert_eq!(identifier.id(), algorithm_id);
                    assert!(id_set.insert(identifier));
                }
            }
        }
        assert_eq!(id_set.len(), 8usize);
    }

    #[test]
    fn test_hash_names() {
        assert_eq!(HashAlgorithm::from_name("sha256"), HashAlgorithm::Sha2_256);
        assert_eq!(HashAlgorithm::from_name("SHA384"), HashAlgorithm::Sha2_384);
        assert_eq!(HashAlgorithm::from_name("sha3-512"), HashAlgorithm::Sha3_512);
        assert_eq!(HashAlgorithm::from_name("whirlpool"), HashAlgorithm::UnknownAlgorithm);
    }
}
