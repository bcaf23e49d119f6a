// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fire unit identifier.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The vendor-issued serial identifying one fire unit in the cloud API.
///
/// # Examples
///
/// ```
/// use emberlink::types::FireId;
///
/// let fire = FireId::new("3FB7A2C4D9").unwrap();
/// assert_eq!(fire.as_str(), "3FB7A2C4D9");
/// assert!(FireId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FireId(String);

impl FireId {
    /// Creates a fire identifier from a serial string.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidFireId` if the serial is empty or
    /// contains whitespace.
    pub fn new(serial: impl Into<String>) -> Result<Self, ValueError> {
        let serial = serial.into();
        if serial.is_empty() || serial.chars().any(char::is_whitespace) {
            return Err(ValueError::InvalidFireId(serial));
        }
        Ok(Self(serial))
    }

    /// Returns the serial string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FireId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_serial() {
        let fire = FireId::new("AABBCC0011").unwrap();
        assert_eq!(fire.as_str(), "AABBCC0011");
        assert_eq!(fire.to_string(), "AABBCC0011");
    }

    #[test]
    fn rejects_empty() {
        assert!(FireId::new("").is_err());
    }

    #[test]
    fn rejects_whitespace() {
        assert!(FireId::new("AA BB").is_err());
        assert!(FireId::new("AA\n").is_err());
    }

    #[test]
    fn from_str_parses() {
        let fire: FireId = "XYZ123".parse().unwrap();
        assert_eq!(fire.as_str(), "XYZ123");
    }
}
