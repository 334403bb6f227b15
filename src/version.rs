/* SPDX-License-Identifier: BSD-3-Clause */
/***********************************************************************************************
 * Copyright 2024-2026 Fraunhofer SIT, sponsored by the ELISA and ProSeCA research projects.
 * All rights reserved.
 **********************************************************************************************/

use std::{fmt::Display, sync::OnceLock};

static VERSION_INFO_PKG: OnceLock<VersionInfo> = OnceLock::new();

/// Contains version information.
pub struct VersionInfo {
    /// The *major* version of the software.
    pub major: u16,
    /// The *minor* version of the software.
    pub minor: u16,
    /// The *patch* level of the software.
    pub patch: u16,
}

/// Returns the package version of the **`tss2-rc-rs`** library.
pub fn get_version() -> &'static VersionInfo {
    VERSION_INFO_PKG.get_or_init(|| parse_version(env!("CARGO_PKG_VERSION", "Package version not defined!")))
}

/// Parse a version string that is in the `"major.minor.patch"` format into a [`VersionInfo`] struct.
fn parse_version(version_string: &str) -> VersionInfo {
    let mut tokens = version_string.split('.').map(|str| str.parse::<u16>().unwrap_or_default());
    VersionInfo {
        major: tokens.next().unwrap_or_default(),
        minor: tokens.next().unwrap_or_default(),
        patch: tokens.next().unwrap_or_default(),
    }
}

/// Convert the `VersionInfo` struct to a string in the `"major.minor.patch"` format
impl Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

// ==========================================================================
// Unit tests
// ==========================================================================

#[cfg(test)]
mod tests {
    use super::parse_version;

    #[test]
    fn test_parse_version() {
        let version = parse_version("1.2.3");
        assert_eq!((version.major, version.minor, version.patch), (1u16, 2u16, 3u16));
        assert_eq!(version.to_string(), "1.2.3");
    }
}
