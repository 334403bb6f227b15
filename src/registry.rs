/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

//! Registry of the per-layer response-code decoders and the top-level decode operation.
//!
//! The registry is an explicit object with a construct-once lifecycle: create it during
//! application startup via [`LayerRegistry::new()`], then hand it (or a reference) to the code
//! that needs to decode response codes. The four reserved layers come pre-registered and can
//! never be replaced; handlers for all other layers may be registered and unregistered at any
//! time. An embedding application that wants a single process-wide registry can place one in a
//! `static OnceLock`.

use crate::constants::{
    TSS2_MU_RC_LAYER_NUM, TSS2_RC, TSS2_SYS_RC_LAYER_NUM, TSS2_TCTI_RC_LAYER_NUM, TSS2_TPM_RC_LAYER_NUM,
};
use crate::error::{BaseErrorCode, TpmRc, rc_error_bits, rc_layer_number};
use std::{
    borrow::Cow,
    fmt::Debug,
    sync::{Arc, RwLock},
};

/// The layer numbers whose entries are built-in and cannot be replaced: the TPM device layer
/// and the SAPI, MU and TCTI layers of the software stack.
pub const RESERVED_LAYERS: [u8; 4] = [
    TSS2_TPM_RC_LAYER_NUM,
    TSS2_SYS_RC_LAYER_NUM,
    TSS2_MU_RC_LAYER_NUM,
    TSS2_TCTI_RC_LAYER_NUM,
];

/* A layer name has between one and four bytes */
const LAYER_NAME_MAX: usize = 4;

/* One slot per representable layer number */
const LAYER_COUNT: usize = 0x100;

// ==========================================================================
// Error type
// ==========================================================================

/// The error type of the [`LayerRegistry`] registration functions. A failed registration
/// leaves the registry unchanged.
#[derive(Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The given layer is reserved and its built-in entry cannot be replaced or removed.
    ReservedLayer(u8),
    /// The given layer name is empty or longer than four bytes.
    InvalidName,
}

// ==========================================================================
// Layer handlers
// ==========================================================================

/// A caller-supplied decode callback. It receives the (non-zero) error bits of a response code
/// and returns the diagnostic message, or `None` if it cannot determine one, in which case the
/// generic hexadecimal rendering is used.
pub type RcHandlerFn = Arc<dyn Fn(u16) -> Option<Cow<'static, str>> + Send + Sync>;

/// The decode handler stored in a registry slot: one of the two built-in decoders, or a
/// caller-supplied callback.
#[derive(Clone)]
pub enum RcHandler {
    /// Built-in decoder of the TPM device layer (the two documented response-code formats).
    Tpm,
    /// Built-in `strerror(3)`-style decoder of the TSS base error codes (SAPI/MU/TCTI).
    TssBase,
    /// Caller-supplied decode callback.
    Custom(RcHandlerFn),
}

impl RcHandler {
    /// Decodes the given error bits into a diagnostic message. Never invoked with error bits
    /// of zero, as zero always indicates success.
    pub fn decode(&self, error_bits: u16) -> Option<Cow<'static, str>> {
        match self {
            Self::Tpm => TpmRc::from_raw(error_bits).render(),
            Self::TssBase => BaseErrorCode::from_raw(error_bits).description().map(Cow::Borrowed),
            Self::Custom(handler) => handler(error_bits),
        }
    }
}

impl Debug for RcHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tpm => f.write_str("RcHandler::Tpm"),
            Self::TssBase => f.write_str("RcHandler::TssBase"),
            Self::Custom(_handler) => f.write_str("RcHandler::Custom"),
        }
    }
}

// ==========================================================================
// Layer entries
// ==========================================================================

/// A registered layer: its number, its friendly short name and its decode handler.
#[derive(Debug, Clone)]
pub struct LayerEntry {
    pub layer: u8,
    pub name: Cow<'static, str>,
    pub handler: RcHandler,
}

impl LayerEntry {
    fn builtin(layer: u8, name: &'static str, handler: RcHandler) -> Self {
        Self {
            layer,
            name: Cow::Borrowed(name),
            handler,
        }
    }
}

// ==========================================================================
// Layer registry
// ==========================================================================

/// Table of the known response-code layers, pre-populated with the reserved layers.
///
/// All functions take `&self`; the table is guarded by an internal R/W lock, so look-ups and
/// decodes may proceed concurrently while registrations are serialized.
pub struct LayerRegistry {
    table: RwLock<Vec<Option<LayerEntry>>>,
}

impl LayerRegistry {
    /// Creates a new registry containing the built-in entries for the four
    /// [reserved layers](RESERVED_LAYERS).
    pub fn new() -> Self {
        let mut table: Vec<Option<LayerEntry>> = (0..LAYER_COUNT).map(|_slot| None).collect();
        table[TSS2_TPM_RC_LAYER_NUM as usize] = Some(LayerEntry::builtin(TSS2_TPM_RC_LAYER_NUM, "tpm", RcHandler::Tpm));
        table[TSS2_SYS_RC_LAYER_NUM as usize] = Some(LayerEntry::builtin(TSS2_SYS_RC_LAYER_NUM, "sys", RcHandler::TssBase));
        table[TSS2_MU_RC_LAYER_NUM as usize] = Some(LayerEntry::builtin(TSS2_MU_RC_LAYER_NUM, "mu", RcHandler::TssBase));
        table[TSS2_TCTI_RC_LAYER_NUM as usize] = Some(LayerEntry::builtin(TSS2_TCTI_RC_LAYER_NUM, "tcti", RcHandler::TssBase));
        Self { table: RwLock::new(table) }
    }

    /// Registers a decode handler for the given layer, replacing any existing entry.
    ///
    /// Fails, without modifying the registry, if `layer` is one of the [reserved
    /// layers](RESERVED_LAYERS) or if `name` is empty or longer than four bytes.
    pub fn register(&self, layer: u8, name: &str, handler: RcHandlerFn) -> Result<(), RegistryError> {
        if name.is_empty() || (name.len() > LAYER_NAME_MAX) {
            return Err(RegistryError::InvalidName);
        }
        self.replace_slot(
            layer,
            Some(LayerEntry {
                layer,
                name: Cow::Owned(name.to_owned()),
                handler: RcHandler::Custom(handler),
            }),
        )
    }

    /// Removes the entry for the given layer, so that subsequent decodes fall back to the
    /// generic rendering. Succeeds regardless of whether an entry was registered; fails only
    /// for the [reserved layers](RESERVED_LAYERS).
    pub fn unregister(&self, layer: u8) -> Result<(), RegistryError> {
        self.replace_slot(layer, None)
    }

    fn replace_slot(&self, layer: u8, entry: Option<LayerEntry>) -> Result<(), RegistryError> {
        if RESERVED_LAYERS.contains(&layer) {
            return Err(RegistryError::ReservedLayer(layer));
        }
        let mut table = self.table.write().expect("Failed to acquire exclusive lock!");
        table[layer as usize] = entry;
        Ok(())
    }

    /// Looks up the entry registered for the given layer, if any. Returns a snapshot of the
    /// entry; the handler itself is shared.
    pub fn lookup(&self, layer: u8) -> Option<LayerEntry> {
        let table = self.table.read().expect("Failed to acquire shared lock!");
        table[layer as usize].clone()
    }

    /// Decodes a response code into a diagnostic string of the form
    /// `"<layer-name>:<layer-specific-msg>"`.
    ///
    /// The layer-name component is the registered friendly name, or the decimal layer number
    /// if no entry exists. The message component is `"success"` whenever the error bits are
    /// zero; otherwise it is produced by the layer's decode handler, falling back to the
    /// hexadecimal error bits (e.g. `"9:0x3"`) if there is no handler or the handler cannot
    /// decode the value. Total over all 32-bit inputs.
    pub fn decode(&self, rc: TSS2_RC) -> String {
        let layer = rc_layer_number(rc);
        let error_bits = rc_error_bits(rc);

        let table = self.table.read().expect("Failed to acquire shared lock!");
        let entry = table[layer as usize].as_ref();

        let message = if error_bits == 0u16 {
            Some(Cow::Borrowed("success"))
        } else {
            entry.and_then(|entry| entry.handler.decode(error_bits))
        };

        match (entry, message) {
            (Some(entry), Some(message)) => format!("{}:{}", entry.name, message),
            (Some(entry), None) => format!("{}:0x{:X}", entry.name, error_bits),
            (None, Some(message)) => format!("{}:{}", layer, message),
            (None, None) => format!("{}:0x{:X}", layer, error_bits),
        }
    }
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================================================
// Unit tests
// ==========================================================================

#[cfg(test)]
mod tests {
    use super::{LayerRegistry, RESERVED_LAYERS, RcHandler, RegistryError};
    use std::{borrow::Cow, sync::Arc};

    #[test]
    fn test_reserved_entries() {
        let registry = LayerRegistry::new();
        for layer in RESERVED_LAYERS {
            let entry = registry.lookup(layer).expect("Reserved layer not registered!");
            assert_eq!(entry.layer, layer);
            assert!((1usize..=4usize).contains(&entry.name.len()));
            assert!(!matches!(entry.handler, RcHandler::Custom(_)));
        }
        assert_eq!(registry.lookup(0u8).unwrap().name, "tpm");
        assert_eq!(registry.lookup(8u8).unwrap().name, "sys");
        assert_eq!(registry.lookup(9u8).unwrap().name, "mu");
        assert_eq!(registry.lookup(10u8).unwrap().name, "tcti");
    }

    #[test]
    fn test_register_and_decode() {
        let registry = LayerRegistry::new();
        registry
            .register(0x20_u8, "esys", Arc::new(|error_bits| (error_bits == 0x7_u16).then_some(Cow::Borrowed("sequence error"))))
            .unwrap();
        assert_eq!(registry.decode(0x0020_0007), "esys:sequence error");
        assert_eq!(registry.decode(0x0020_0008), "esys:0x8");
        assert_eq!(registry.decode(0x0020_0000), "esys:success");

        registry.unregister(0x20_u8).unwrap();
        assert_eq!(registry.decode(0x0020_0007), "32:0x7");
    }

    #[test]
    fn test_registration_contract() {
        let registry = LayerRegistry::new();
        let handler: super::RcHandlerFn = Arc::new(|_error_bits| None);

        for layer in RESERVED_LAYERS {
            assert_eq!(registry.register(layer, "abc", Arc::clone(&handler)), Err(RegistryError::ReservedLayer(layer)));
            assert_eq!(registry.unregister(layer), Err(RegistryError::ReservedLayer(layer)));
        }

        assert_eq!(registry.register(0x2A_u8, "", Arc::clone(&handler)), Err(RegistryError::InvalidName));
        assert_eq!(registry.register(0x2A_u8, "toolong", Arc::clone(&handler)), Err(RegistryError::InvalidName));
        assert!(registry.lookup(0x2A_u8).is_none());

        registry.register(0x2A_u8, "a", Arc::clone(&handler)).unwrap();
        assert_eq!(registry.lookup(0x2A_u8).unwrap().name, "a");
        registry.register(0x2A_u8, "abcd", Arc::clone(&handler)).unwrap();
        assert_eq!(registry.lookup(0x2A_u8).unwrap().name, "abcd");
    }

    #[test]
    fn test_decode_generic_fallback() {
        let registry = LayerRegistry::new();
        assert_eq!(registry.decode(0x0009_0003 | 0xFF00_0000), "mu:A context structure is bad");
        assert_eq!(registry.decode(0x0005_0003), "5:0x3");
        assert_eq!(registry.decode(0x0005_0000), "5:success");
    }
}
