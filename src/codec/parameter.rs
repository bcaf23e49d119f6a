// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The parameter variant set and its tag space.

use crate::types::{
    ErrorCode, FirmwareVersion, FlameEffect, HeatMode, LightSettings, OperatingMode, RgbwColor,
    Temperature, TimerDuration,
};

/// Wire tags for the known parameter variants.
///
/// The tag space is open: firmware may send tags not listed here, which
/// decode to [`Parameter::Unknown`].
pub mod tag {
    /// Operating mode ([`OperatingMode`](crate::types::OperatingMode)).
    pub const MODE: u8 = 0x01;
    /// Flame animation ([`FlameEffect`](crate::types::FlameEffect)).
    pub const FLAME_EFFECT: u8 = 0x02;
    /// Thermostat heat setpoint, tenths of a degree Celsius.
    pub const HEAT_SETPOINT: u8 = 0x03;
    /// Sleep timer, minutes.
    pub const SLEEP_TIMER: u8 = 0x04;
    /// Flame/accent RGBW color.
    pub const FLAME_COLOR: u8 = 0x05;
    /// Controller firmware version.
    pub const FIRMWARE: u8 = 0x06;
    /// Fault status ([`ErrorCode`](crate::types::ErrorCode)).
    pub const ERROR_STATUS: u8 = 0x07;
    /// Heater blower level ([`HeatMode`](crate::types::HeatMode)).
    pub const HEAT_MODE: u8 = 0x08;
    /// Accent light settings.
    pub const LIGHT: u8 = 0x09;
    /// Pilot flame flag.
    pub const PILOT: u8 = 0x0A;
    /// Measured room temperature, tenths of a degree Celsius.
    pub const ROOM_TEMPERATURE: u8 = 0x0B;
}

/// One fireplace parameter: a tagged, immutable value object.
///
/// Parameters are constructed either by decoding a frame received from
/// the cloud (read path) or directly by application code before encoding
/// (write path). They have no identity beyond structural equality.
///
/// The [`Unknown`](Self::Unknown) case carries any tag this library does
/// not recognize, raw payload included, so callers can log or ignore
/// parameter types introduced by newer firmware.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Top-level operating mode.
    Mode(OperatingMode),
    /// Flame animation program.
    FlameEffect(FlameEffect),
    /// Thermostat heat setpoint.
    HeatSetpoint(Temperature),
    /// Sleep timer; zero clears the timer.
    SleepTimer(TimerDuration),
    /// Flame/accent RGBW color.
    FlameColor(RgbwColor),
    /// Controller firmware version (read-only in practice).
    Firmware(FirmwareVersion),
    /// Fault status reported by the controller.
    ErrorStatus(ErrorCode),
    /// Heater blower level.
    HeatMode(HeatMode),
    /// Accent light settings.
    Light(LightSettings),
    /// Whether the pilot flame is lit.
    Pilot(bool),
    /// Measured room temperature (read-only).
    RoomTemperature(Temperature),
    /// A parameter type this library does not recognize.
    Unknown {
        /// The raw wire tag.
        tag: u8,
        /// The raw payload bytes, unmodified.
        payload: Vec<u8>,
    },
}

impl Parameter {
    /// Returns the wire tag for this parameter.
    #[must_use]
    pub fn tag(&self) -> u8 {
        match self {
            Self::Mode(_) => tag::MODE,
            Self::FlameEffect(_) => tag::FLAME_EFFECT,
            Self::HeatSetpoint(_) => tag::HEAT_SETPOINT,
            Self::SleepTimer(_) => tag::SLEEP_TIMER,
            Self::FlameColor(_) => tag::FLAME_COLOR,
            Self::Firmware(_) => tag::FIRMWARE,
            Self::ErrorStatus(_) => tag::ERROR_STATUS,
            Self::HeatMode(_) => tag::HEAT_MODE,
            Self::Light(_) => tag::LIGHT,
            Self::Pilot(_) => tag::PILOT,
            Self::RoomTemperature(_) => tag::ROOM_TEMPERATURE,
            Self::Unknown { tag, .. } => *tag,
        }
    }

    /// Returns `true` if this is an unrecognized parameter.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

/// Returns the fixed payload size for a known tag, or `None` for tags
/// outside the known set.
#[must_use]
pub(crate) const fn payload_size(tag: u8) -> Option<usize> {
    match tag {
        tag::MODE
        | tag::FLAME_EFFECT
        | tag::ERROR_STATUS
        | tag::HEAT_MODE
        | tag::PILOT => Some(1),
        tag::HEAT_SETPOINT | tag::SLEEP_TIMER | tag::LIGHT | tag::ROOM_TEMPERATURE => Some(2),
        tag::FIRMWARE => Some(3),
        tag::FLAME_COLOR => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_distinct() {
        let tags = [
            tag::MODE,
            tag::FLAME_EFFECT,
            tag::HEAT_SETPOINT,
            tag::SLEEP_TIMER,
            tag::FLAME_COLOR,
            tag::FIRMWARE,
            tag::ERROR_STATUS,
            tag::HEAT_MODE,
            tag::LIGHT,
            tag::PILOT,
            tag::ROOM_TEMPERATURE,
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn parameter_reports_its_tag() {
        assert_eq!(Parameter::Mode(OperatingMode::Off).tag(), tag::MODE);
        assert_eq!(
            Parameter::HeatSetpoint(Temperature::from_tenths(215)).tag(),
            tag::HEAT_SETPOINT
        );
        assert_eq!(
            Parameter::Unknown {
                tag: 0xFE,
                payload: vec![]
            }
            .tag(),
            0xFE
        );
    }

    #[test]
    fn known_tags_have_fixed_sizes() {
        assert_eq!(payload_size(tag::MODE), Some(1));
        assert_eq!(payload_size(tag::HEAT_SETPOINT), Some(2));
        assert_eq!(payload_size(tag::FIRMWARE), Some(3));
        assert_eq!(payload_size(tag::FLAME_COLOR), Some(4));
        assert_eq!(payload_size(0xFE), None);
    }

    #[test]
    fn is_unknown() {
        assert!(
            Parameter::Unknown {
                tag: 0x7F,
                payload: vec![1, 2]
            }
            .is_unknown()
        );
        assert!(!Parameter::Pilot(true).is_unknown());
    }

    #[test]
    fn structural_equality() {
        let a = Parameter::FlameColor(RgbwColor::new(1, 2, 3, 4));
        let b = Parameter::FlameColor(RgbwColor::new(1, 2, 3, 4));
        assert_eq!(a, b);
        assert_ne!(a, Parameter::FlameColor(RgbwColor::off()));
    }
}
