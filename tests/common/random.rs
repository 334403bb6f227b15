/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use std::fmt::Debug;

/// Create seed value from index
pub fn create_seed<const N: usize, T: TryInto<u64> + Debug>(value: T) -> [u8; N]
where
    <T as TryInto<u64>>::Error: std::fmt::Debug,
{
    let mut seed_data = [0u8; N];
    let value_bytes = value.try_into().unwrap().to_be_bytes();
    if N > value_bytes.len() {
        seed_data[N - value_bytes.len()..].copy_from_slice(&value_bytes[..]);
    } else {
        seed_data[..].copy_from_slice(&value_bytes[value_bytes.len() - N..]);
    }
    seed_data
}
