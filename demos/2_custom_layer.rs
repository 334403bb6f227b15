/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use env_logger::Builder as EnvLogger;
use log::{LevelFilter, info, warn};
use std::{borrow::Cow, sync::Arc};
use tss2_rc_rs::{LayerRegistry, RESERVED_LAYERS, RcHandlerFn};

/* Layer number used by the application for its own response codes */
const APP_LAYER: u8 = 0x22;

/// # tss2-rc-rs example #2 - custom_layer
///
/// This example demonstrates how an application can register a friendly name and a decode
/// callback for its own response-code layer, and how decoding behaves before registration,
/// with the custom handler in place, and after unregistration.
fn main() {
    // Initialize the logger
    EnvLogger::new().filter_level(LevelFilter::Info).init();

    // Print logo
    info!("TSS2 RC Decoder - Example #2");

    // Create the registry with the built-in layer handlers
    let registry = LayerRegistry::new();

    // Decode an application-layer code while the layer is still unknown
    info!("Before registration: {}", registry.decode(0x0022_0001));

    // Register the decode handler for the application layer
    let handler: RcHandlerFn = Arc::new(|error_bits| match error_bits {
        0x1 => Some(Cow::Borrowed("database unavailable")),
        0x2 => Some(Cow::Borrowed("request rejected by policy")),
        _ => None,
    });
    match registry.register(APP_LAYER, "app", handler) {
        Ok(_) => info!("Layer 0x{:02X} registered.", APP_LAYER),
        Err(error) => panic!("Failed to register layer handler: {:?}", error),
    }

    // Decode application-layer codes through the custom handler
    info!("With custom handler: {}", registry.decode(0x0022_0001));
    info!("With custom handler: {}", registry.decode(0x0022_0002));
    info!("Unhandled error bits: {}", registry.decode(0x0022_0003));
    info!("Success short-circuit: {}", registry.decode(0x0022_0000));

    // The reserved layers remain off-limits
    for layer in RESERVED_LAYERS {
        if registry.register(layer, "oops", Arc::new(|_error_bits| None)).is_err() {
            warn!("Layer {} is reserved and cannot be replaced -> skipping!", layer);
        }
    }

    // Unregister the handler again
    registry.unregister(APP_LAYER).expect("Failed to unregister layer handler!");
    info!("After unregistration: {}", registry.decode(0x0022_0001));
}
