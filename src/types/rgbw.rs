// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGBW color type for fireplace flame and accent lighting.
//!
//! The fireplace LED controller drives four channels: red, green, blue,
//! and a dedicated white channel. This module provides the four-channel
//! color value plus the conversion to plain display RGB used when the
//! color has to be shown on an ordinary screen.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGBW color with four 8-bit channels (0-255 each).
///
/// # Examples
///
/// ```
/// use emberlink::types::RgbwColor;
///
/// let ember = RgbwColor::new(255, 96, 0, 16);
/// assert_eq!(ember.red(), 255);
/// assert_eq!(ember.white(), 16);
///
/// // Parse from hex string (RRGGBBWW)
/// let c = RgbwColor::from_hex("#FF600010").unwrap();
/// assert_eq!(c, ember);
/// assert_eq!(c.to_hex(), "FF600010");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbwColor {
    red: u8,
    green: u8,
    blue: u8,
    white: u8,
}

impl RgbwColor {
    /// Creates a new RGBW color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Parses an RGBW color from a hex string.
    ///
    /// Accepts `#RRGGBBWW` or `RRGGBBWW`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is not exactly
    /// four hex byte pairs.
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 8 {
            return Err(ValueError::InvalidHexColor(hex.to_string()));
        }
        let r = parse_hex_pair(&hex[0..2])?;
        let g = parse_hex_pair(&hex[2..4])?;
        let b = parse_hex_pair(&hex[4..6])?;
        let w = parse_hex_pair(&hex[6..8])?;
        Ok(Self::new(r, g, b, w))
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the white channel.
    #[must_use]
    pub const fn white(&self) -> u8 {
        self.white
    }

    /// Returns the color as a hex string without the hash prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.white
        )
    }

    /// Blends the white channel into the color channels for display on
    /// an RGB-only surface.
    ///
    /// The white LED adds broadband light on top of the color channels,
    /// so each output channel is `min(channel + w, 255)`. Pure, total:
    /// defined for every input.
    ///
    /// # Examples
    ///
    /// ```
    /// use emberlink::types::RgbwColor;
    ///
    /// assert_eq!(RgbwColor::new(255, 0, 0, 0).to_display_rgb(), (255, 0, 0));
    /// assert_eq!(RgbwColor::new(0, 0, 0, 255).to_display_rgb(), (255, 255, 255));
    /// assert_eq!(RgbwColor::new(200, 50, 10, 100).to_display_rgb(), (255, 150, 110));
    /// ```
    #[must_use]
    pub const fn to_display_rgb(&self) -> (u8, u8, u8) {
        (
            self.red.saturating_add(self.white),
            self.green.saturating_add(self.white),
            self.blue.saturating_add(self.white),
        )
    }

    /// A warm ember preset.
    #[must_use]
    pub const fn ember() -> Self {
        Self::new(255, 96, 0, 16)
    }

    /// Warm white, white channel only.
    #[must_use]
    pub const fn warm_white() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// All channels off.
    #[must_use]
    pub const fn off() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl Default for RgbwColor {
    fn default() -> Self {
        Self::ember()
    }
}

impl fmt::Display for RgbwColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for RgbwColor {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8, u8)> for RgbwColor {
    fn from((red, green, blue, white): (u8, u8, u8, u8)) -> Self {
        Self::new(red, green, blue, white)
    }
}

fn parse_hex_pair(s: &str) -> Result<u8, ValueError> {
    u8::from_str_radix(s, 16).map_err(|_| ValueError::InvalidHexColor(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_channels() {
        let c = RgbwColor::new(1, 2, 3, 4);
        assert_eq!(c.red(), 1);
        assert_eq!(c.green(), 2);
        assert_eq!(c.blue(), 3);
        assert_eq!(c.white(), 4);
    }

    #[test]
    fn from_hex_valid() {
        let c = RgbwColor::from_hex("#FF600010").unwrap();
        assert_eq!(c, RgbwColor::new(255, 96, 0, 16));

        let c = RgbwColor::from_hex("00000000").unwrap();
        assert_eq!(c, RgbwColor::off());
    }

    #[test]
    fn from_hex_invalid() {
        assert!(RgbwColor::from_hex("#FF0000").is_err()); // RGB, no white
        assert!(RgbwColor::from_hex("GG000000").is_err());
        assert!(RgbwColor::from_hex("").is_err());
    }

    #[test]
    fn to_hex_leading_zeros() {
        let c = RgbwColor::new(0, 15, 255, 1);
        assert_eq!(c.to_hex(), "000FFF01");
    }

    #[test]
    fn hex_roundtrip() {
        let c = RgbwColor::new(200, 50, 10, 100);
        assert_eq!(RgbwColor::from_hex(&c.to_hex()).unwrap(), c);
    }

    // Literal table pinning the additive-clamp blend against the
    // device's visual mapping.
    #[test]
    fn display_rgb_literals() {
        let cases = [
            ((255, 0, 0, 0), (255, 0, 0)),
            ((0, 255, 0, 0), (0, 255, 0)),
            ((0, 0, 0, 255), (255, 255, 255)),
            ((200, 50, 10, 100), (255, 150, 110)),
            ((0, 0, 0, 0), (0, 0, 0)),
            ((255, 255, 255, 255), (255, 255, 255)),
            ((128, 128, 128, 64), (192, 192, 192)),
        ];
        for (input, expected) in cases {
            let c = RgbwColor::from(input);
            assert_eq!(c.to_display_rgb(), expected, "input {input:?}");
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(RgbwColor::new(255, 96, 0, 16).to_string(), "#FF600010");
    }

    #[test]
    fn from_str_parses() {
        let c: RgbwColor = "#FF600010".parse().unwrap();
        assert_eq!(c, RgbwColor::ember());
    }

    #[test]
    fn default_is_ember() {
        assert_eq!(RgbwColor::default(), RgbwColor::ember());
    }
}
