// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumerated fireplace settings.
//!
//! Each enum here is a closed set with a fixed single-byte wire
//! encoding. `wire_value` and `from_wire` are exact inverses; the
//! decoder treats a byte outside the set as frame corruption, since this
//! encoder can never produce one. New firmware semantics arrive as new
//! parameter tags, not new bytes inside these sets.

use std::fmt;

use crate::error::ValueError;

/// Top-level operating mode of the fire.
///
/// # Examples
///
/// ```
/// use emberlink::types::OperatingMode;
///
/// assert_eq!(OperatingMode::Thermostat.wire_value(), 2);
/// assert_eq!(OperatingMode::from_wire(2), Some(OperatingMode::Thermostat));
/// assert_eq!(OperatingMode::from_wire(9), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingMode {
    /// Flame and heater off.
    Off,
    /// Flame on, height and heat controlled manually.
    Manual,
    /// Heater cycles to hold the heat setpoint.
    Thermostat,
    /// Device follows its programmed weekly schedule.
    Schedule,
}

impl OperatingMode {
    /// Returns the wire byte for this mode.
    #[must_use]
    pub const fn wire_value(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Manual => 1,
            Self::Thermostat => 2,
            Self::Schedule => 3,
        }
    }

    /// Decodes a wire byte, returning `None` for bytes outside the set.
    #[must_use]
    pub const fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Manual),
            2 => Some(Self::Thermostat),
            3 => Some(Self::Schedule),
            _ => None,
        }
    }

    /// Returns a lowercase name for display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Manual => "manual",
            Self::Thermostat => "thermostat",
            Self::Schedule => "schedule",
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Heater blower output level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatMode {
    /// Blower off, flame only.
    Off,
    /// Low heat output.
    Low,
    /// Full heat output.
    High,
}

impl HeatMode {
    /// Returns the wire byte for this heat mode.
    #[must_use]
    pub const fn wire_value(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Low => 1,
            Self::High => 2,
        }
    }

    /// Decodes a wire byte, returning `None` for bytes outside the set.
    #[must_use]
    pub const fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Low),
            2 => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for HeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Off => "off",
            Self::Low => "low",
            Self::High => "high",
        };
        write!(f, "{s}")
    }
}

/// Visual flame animation program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlameEffect {
    /// Constant flame, no animation.
    Steady,
    /// Slow glow with occasional flicker.
    Ember,
    /// Lively multi-burner animation.
    Campfire,
    /// Rhythmic pulse between low and high.
    Pulse,
}

impl FlameEffect {
    /// Returns the wire byte for this effect.
    #[must_use]
    pub const fn wire_value(self) -> u8 {
        match self {
            Self::Steady => 0,
            Self::Ember => 1,
            Self::Campfire => 2,
            Self::Pulse => 3,
        }
    }

    /// Decodes a wire byte, returning `None` for bytes outside the set.
    #[must_use]
    pub const fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Steady),
            1 => Some(Self::Ember),
            2 => Some(Self::Campfire),
            3 => Some(Self::Pulse),
            _ => None,
        }
    }
}

impl fmt::Display for FlameEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Steady => "steady",
            Self::Ember => "ember",
            Self::Campfire => "campfire",
            Self::Pulse => "pulse",
        };
        write!(f, "{s}")
    }
}

/// Fault condition reported by the fire controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCode {
    /// No fault.
    #[default]
    None,
    /// Pilot flame failed to ignite or went out.
    PilotFault,
    /// Heater blower fault.
    FanFault,
    /// Accent lighting fault.
    LightFault,
    /// Connected accessory fault.
    AccessoryFault,
    /// Controller requests a maintenance visit.
    Maintenance,
}

impl ErrorCode {
    /// Returns the wire byte for this error code.
    #[must_use]
    pub const fn wire_value(self) -> u8 {
        match self {
            Self::None => 0,
            Self::PilotFault => 1,
            Self::FanFault => 2,
            Self::LightFault => 3,
            Self::AccessoryFault => 4,
            Self::Maintenance => 5,
        }
    }

    /// Decodes a wire byte, returning `None` for bytes outside the set.
    #[must_use]
    pub const fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::PilotFault),
            2 => Some(Self::FanFault),
            3 => Some(Self::LightFault),
            4 => Some(Self::AccessoryFault),
            5 => Some(Self::Maintenance),
            _ => None,
        }
    }

    /// Returns `true` if this code represents an active fault.
    #[must_use]
    pub const fn is_fault(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::PilotFault => "pilot fault",
            Self::FanFault => "fan fault",
            Self::LightFault => "light fault",
            Self::AccessoryFault => "accessory fault",
            Self::Maintenance => "maintenance required",
        };
        write!(f, "{s}")
    }
}

/// Accent light brightness step (0-3).
///
/// # Examples
///
/// ```
/// use emberlink::types::LightLevel;
///
/// let level = LightLevel::new(2).unwrap();
/// assert_eq!(level.value(), 2);
/// assert!(LightLevel::new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LightLevel(u8);

impl LightLevel {
    /// Lowest brightness step.
    pub const MIN: Self = Self(0);

    /// Highest brightness step.
    pub const MAX: Self = Self(3);

    /// Creates a new light level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `value` exceeds 3.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX.0 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: u16::from(Self::MAX.0),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the brightness step.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for LightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for LightLevel {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Accent light configuration: an enable flag plus a brightness step.
///
/// The two fields are independent on the wire so the device can remember
/// the brightness while the light is switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LightSettings {
    /// Whether the accent light is on.
    pub enabled: bool,
    /// Brightness step used when the light is on.
    pub level: LightLevel,
}

impl LightSettings {
    /// Creates new light settings.
    #[must_use]
    pub const fn new(enabled: bool, level: LightLevel) -> Self {
        Self { enabled, level }
    }

    /// Light off, remembering the given brightness.
    #[must_use]
    pub const fn off_at(level: LightLevel) -> Self {
        Self::new(false, level)
    }
}

impl fmt::Display for LightSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "on (level {})", self.level)
        } else {
            write!(f, "off")
        }
    }
}
