// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Firmware version reported by the fire controller.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Firmware version as major/minor/patch bytes.
///
/// # Examples
///
/// ```
/// use emberlink::types::FirmwareVersion;
///
/// let v = FirmwareVersion::new(1, 4, 2);
/// assert_eq!(v.to_string(), "1.4.2");
/// assert!(v < FirmwareVersion::new(1, 5, 0));
///
/// let parsed: FirmwareVersion = "1.4.2".parse().unwrap();
/// assert_eq!(parsed, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FirmwareVersion {
    major: u8,
    minor: u8,
    patch: u8,
}

impl FirmwareVersion {
    /// Creates a new firmware version.
    #[must_use]
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns the major version.
    #[must_use]
    pub const fn major(&self) -> u8 {
        self.major
    }

    /// Returns the minor version.
    #[must_use]
    pub const fn minor(&self) -> u8 {
        self.minor
    }

    /// Returns the patch version.
    #[must_use]
    pub const fn patch(&self) -> u8 {
        self.patch
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for FirmwareVersion {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::InvalidVersion(s.to_string());
        let mut parts = s.split('.');
        let major = parts.next().ok_or_else(invalid)?;
        let minor = parts.next().ok_or_else(invalid)?;
        let patch = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(
            major.parse().map_err(|_| invalid())?,
            minor.parse().map_err(|_| invalid())?,
            patch.parse().map_err(|_| invalid())?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let v = FirmwareVersion::new(2, 0, 11);
        assert_eq!(v.major(), 2);
        assert_eq!(v.minor(), 0);
        assert_eq!(v.patch(), 11);
    }

    #[test]
    fn display() {
        assert_eq!(FirmwareVersion::new(1, 4, 2).to_string(), "1.4.2");
    }

    #[test]
    fn ordering_is_semver_like() {
        assert!(FirmwareVersion::new(1, 9, 9) < FirmwareVersion::new(2, 0, 0));
        assert!(FirmwareVersion::new(1, 4, 2) < FirmwareVersion::new(1, 4, 3));
    }

    #[test]
    fn from_str_valid() {
        let v: FirmwareVersion = "0.9.12".parse().unwrap();
        assert_eq!(v, FirmwareVersion::new(0, 9, 12));
    }

    #[test]
    fn from_str_invalid() {
        assert!("1.4".parse::<FirmwareVersion>().is_err());
        assert!("1.4.2.7".parse::<FirmwareVersion>().is_err());
        assert!("1.4.x".parse::<FirmwareVersion>().is_err());
        assert!("1.4.300".parse::<FirmwareVersion>().is_err());
    }
}
