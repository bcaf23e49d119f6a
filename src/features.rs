// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fireplace feature detection and configuration.
//!
//! The product line spans plain gas inserts up to units with heater
//! blowers, accent lighting, and color-programmable burners. Features
//! can be detected from the parameters a fire reports in its overview,
//! or specified manually for faster startup.

use crate::codec::Parameter;

/// Features of a fire unit.
///
/// Describes which optional hardware a unit carries. Write operations on
/// a missing feature fail with
/// [`Error::FeatureNotSupported`](crate::error::Error::FeatureNotSupported)
/// instead of reaching the cloud.
///
/// # Examples
///
/// ```
/// use emberlink::Features;
///
/// // Flame-only insert
/// let basic = Features::basic();
/// assert!(!basic.heater);
///
/// // Fully equipped unit
/// let full = Features::full();
/// assert!(full.flame_color && full.light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
// Each boolean is an independent hardware option; they do not form a
// meaningful enum.
#[allow(clippy::struct_excessive_bools)]
pub struct Features {
    /// Heater blower with thermostat control.
    pub heater: bool,

    /// Accent lighting.
    pub light: bool,

    /// Color-programmable (RGBW) burner lighting.
    pub flame_color: bool,

    /// Sleep timer.
    pub sleep_timer: bool,

    /// Standing pilot that can be controlled remotely.
    pub pilot: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self::basic()
    }
}

impl Features {
    /// A flame-only insert: no heater, lights, or timer.
    #[must_use]
    pub const fn basic() -> Self {
        Self {
            heater: false,
            light: false,
            flame_color: false,
            sleep_timer: false,
            pilot: true,
        }
    }

    /// A heater insert: blower and thermostat plus sleep timer.
    #[must_use]
    pub const fn heater_insert() -> Self {
        Self {
            heater: true,
            light: false,
            flame_color: false,
            sleep_timer: true,
            pilot: true,
        }
    }

    /// A fully equipped unit.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            heater: true,
            light: true,
            flame_color: true,
            sleep_timer: true,
            pilot: true,
        }
    }

    /// Derives features from the parameters a fire reported.
    ///
    /// A fire only includes parameters for hardware it has, so presence
    /// in the overview implies support.
    #[must_use]
    pub fn detect(params: &[Parameter]) -> Self {
        let mut features = Self {
            heater: false,
            light: false,
            flame_color: false,
            sleep_timer: false,
            pilot: false,
        };
        for param in params {
            match param {
                Parameter::HeatSetpoint(_) | Parameter::HeatMode(_) => features.heater = true,
                Parameter::Light(_) => features.light = true,
                Parameter::FlameColor(_) => features.flame_color = true,
                Parameter::SleepTimer(_) => features.sleep_timer = true,
                Parameter::Pilot(_) => features.pilot = true,
                _ => {}
            }
        }
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HeatMode, OperatingMode, RgbwColor, Temperature, TimerDuration};

    #[test]
    fn presets() {
        assert!(!Features::basic().heater);
        assert!(Features::heater_insert().heater);
        assert!(Features::heater_insert().sleep_timer);
        let full = Features::full();
        assert!(full.heater && full.light && full.flame_color && full.sleep_timer && full.pilot);
    }

    #[test]
    fn default_is_basic() {
        assert_eq!(Features::default(), Features::basic());
    }

    #[test]
    fn detect_from_overview() {
        let params = [
            Parameter::Mode(OperatingMode::Off),
            Parameter::HeatSetpoint(Temperature::from_tenths(200)),
            Parameter::SleepTimer(TimerDuration::OFF),
            Parameter::Pilot(true),
        ];
        let features = Features::detect(&params);
        assert!(features.heater);
        assert!(features.sleep_timer);
        assert!(features.pilot);
        assert!(!features.light);
        assert!(!features.flame_color);
    }

    #[test]
    fn detect_heater_from_heat_mode_alone() {
        let features = Features::detect(&[Parameter::HeatMode(HeatMode::Off)]);
        assert!(features.heater);
    }

    #[test]
    fn detect_ignores_unknown_parameters() {
        let features = Features::detect(&[
            Parameter::Unknown {
                tag: 0xFE,
                payload: vec![],
            },
            Parameter::FlameColor(RgbwColor::ember()),
        ]);
        assert!(features.flame_color);
        assert!(!features.heater);
    }
}
