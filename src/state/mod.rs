// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fireplace state tracking.

use chrono::{DateTime, Utc};

use crate::codec::Parameter;
use crate::types::{
    ErrorCode, FirmwareVersion, FlameEffect, HeatMode, LightSettings, OperatingMode, RgbwColor,
    Temperature, TimerDuration,
};

/// Snapshot of everything a fire has reported.
///
/// All fields are optional because a fire only reports the parameters it
/// has; a field stays `None` until the corresponding parameter appears
/// in an overview. The snapshot is a plain value: updating state means
/// replacing the snapshot, never mutating one that was handed out.
///
/// # Examples
///
/// ```
/// use emberlink::state::FireplaceState;
/// use emberlink::codec::Parameter;
/// use emberlink::types::OperatingMode;
///
/// let mut state = FireplaceState::new();
/// assert!(state.mode().is_none());
///
/// state.apply(&Parameter::Mode(OperatingMode::Manual));
/// assert_eq!(state.mode(), Some(OperatingMode::Manual));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FireplaceState {
    mode: Option<OperatingMode>,
    heat_mode: Option<HeatMode>,
    flame_effect: Option<FlameEffect>,
    heat_setpoint: Option<Temperature>,
    room_temperature: Option<Temperature>,
    sleep_timer: Option<TimerDuration>,
    flame_color: Option<RgbwColor>,
    firmware: Option<FirmwareVersion>,
    error: Option<ErrorCode>,
    light: Option<LightSettings>,
    pilot: Option<bool>,
    /// Frames with tags this library does not recognize, kept for
    /// passthrough (raw tag, raw payload).
    unrecognized: Vec<(u8, Vec<u8>)>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl FireplaceState {
    /// Creates a new empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current operating mode.
    #[must_use]
    pub fn mode(&self) -> Option<OperatingMode> {
        self.mode
    }

    /// Current heater blower level.
    #[must_use]
    pub fn heat_mode(&self) -> Option<HeatMode> {
        self.heat_mode
    }

    /// Current flame animation.
    #[must_use]
    pub fn flame_effect(&self) -> Option<FlameEffect> {
        self.flame_effect
    }

    /// Thermostat heat setpoint.
    #[must_use]
    pub fn heat_setpoint(&self) -> Option<Temperature> {
        self.heat_setpoint
    }

    /// Measured room temperature.
    #[must_use]
    pub fn room_temperature(&self) -> Option<Temperature> {
        self.room_temperature
    }

    /// Remaining sleep timer.
    #[must_use]
    pub fn sleep_timer(&self) -> Option<TimerDuration> {
        self.sleep_timer
    }

    /// Flame/accent color.
    #[must_use]
    pub fn flame_color(&self) -> Option<RgbwColor> {
        self.flame_color
    }

    /// Controller firmware version.
    #[must_use]
    pub fn firmware(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    /// Fault status. `Some(ErrorCode::None)` means the controller
    /// explicitly reported no fault.
    #[must_use]
    pub fn error(&self) -> Option<ErrorCode> {
        self.error
    }

    /// Accent light settings.
    #[must_use]
    pub fn light(&self) -> Option<LightSettings> {
        self.light
    }

    /// Whether the pilot flame is lit.
    #[must_use]
    pub fn pilot(&self) -> Option<bool> {
        self.pilot
    }

    /// Returns `true` if the controller reported an active fault.
    #[must_use]
    pub fn has_fault(&self) -> bool {
        self.error.is_some_and(ErrorCode::is_fault)
    }

    /// Parameters from the last overview whose tags this library does
    /// not recognize, as (tag, payload) pairs.
    #[must_use]
    pub fn unrecognized(&self) -> &[(u8, Vec<u8>)] {
        &self.unrecognized
    }

    /// When the snapshot was last refreshed from the cloud, if ever.
    #[must_use]
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Applies one decoded parameter and reports whether anything
    /// changed.
    pub fn apply(&mut self, param: &Parameter) -> bool {
        fn update<T: PartialEq + Copy>(slot: &mut Option<T>, value: T) -> bool {
            if *slot == Some(value) {
                false
            } else {
                *slot = Some(value);
                true
            }
        }

        match param {
            Parameter::Mode(v) => update(&mut self.mode, *v),
            Parameter::HeatMode(v) => update(&mut self.heat_mode, *v),
            Parameter::FlameEffect(v) => update(&mut self.flame_effect, *v),
            Parameter::HeatSetpoint(v) => update(&mut self.heat_setpoint, *v),
            Parameter::RoomTemperature(v) => update(&mut self.room_temperature, *v),
            Parameter::SleepTimer(v) => update(&mut self.sleep_timer, *v),
            Parameter::FlameColor(v) => update(&mut self.flame_color, *v),
            Parameter::Firmware(v) => update(&mut self.firmware, *v),
            Parameter::ErrorStatus(v) => update(&mut self.error, *v),
            Parameter::Light(v) => update(&mut self.light, *v),
            Parameter::Pilot(v) => update(&mut self.pilot, *v),
            Parameter::Unknown { tag, payload } => {
                let entry = (*tag, payload.clone());
                if self.unrecognized.contains(&entry) {
                    false
                } else {
                    self.unrecognized.retain(|(t, _)| t != tag);
                    self.unrecognized.push(entry);
                    true
                }
            }
        }
    }

    /// Applies a batch of decoded parameters and reports whether any of
    /// them changed the state.
    pub fn apply_all<'a>(&mut self, params: impl IntoIterator<Item = &'a Parameter>) -> bool {
        let mut changed = false;
        for param in params {
            if self.apply(param) {
                changed = true;
            }
        }
        changed
    }

    /// Stamps the snapshot with a refresh time.
    pub fn mark_refreshed(&mut self, at: DateTime<Utc>) {
        self.refreshed_at = Some(at);
    }

    /// Clears all state, resetting to unknown.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LightLevel, OperatingMode};

    #[test]
    fn new_state_is_empty() {
        let state = FireplaceState::new();
        assert!(state.mode().is_none());
        assert!(state.heat_setpoint().is_none());
        assert!(state.flame_color().is_none());
        assert!(state.unrecognized().is_empty());
        assert!(state.refreshed_at().is_none());
        assert!(!state.has_fault());
    }

    #[test]
    fn apply_reports_changes() {
        let mut state = FireplaceState::new();
        let param = Parameter::Mode(OperatingMode::Manual);

        assert!(state.apply(&param));
        assert_eq!(state.mode(), Some(OperatingMode::Manual));
        // Applying the same value again is a no-op.
        assert!(!state.apply(&param));
        assert!(state.apply(&Parameter::Mode(OperatingMode::Off)));
    }

    #[test]
    fn apply_all_parameters() {
        let mut state = FireplaceState::new();
        let params = [
            Parameter::Mode(OperatingMode::Thermostat),
            Parameter::HeatMode(HeatMode::Low),
            Parameter::HeatSetpoint(Temperature::from_tenths(215)),
            Parameter::RoomTemperature(Temperature::from_tenths(198)),
            Parameter::SleepTimer(TimerDuration::from_minutes(60)),
            Parameter::FlameColor(RgbwColor::ember()),
            Parameter::Firmware(FirmwareVersion::new(1, 4, 2)),
            Parameter::ErrorStatus(ErrorCode::None),
            Parameter::Light(LightSettings::new(true, LightLevel::MIN)),
            Parameter::Pilot(true),
        ];

        assert!(state.apply_all(&params));
        assert_eq!(state.heat_setpoint(), Some(Temperature::from_tenths(215)));
        assert_eq!(state.room_temperature(), Some(Temperature::from_tenths(198)));
        assert_eq!(state.firmware(), Some(FirmwareVersion::new(1, 4, 2)));
        assert_eq!(state.pilot(), Some(true));
        assert!(!state.has_fault());

        // Identical batch changes nothing.
        assert!(!state.apply_all(&params));
    }

    #[test]
    fn fault_detection() {
        let mut state = FireplaceState::new();
        state.apply(&Parameter::ErrorStatus(ErrorCode::PilotFault));
        assert!(state.has_fault());
        state.apply(&Parameter::ErrorStatus(ErrorCode::None));
        assert!(!state.has_fault());
    }

    #[test]
    fn unknown_parameters_are_retained() {
        let mut state = FireplaceState::new();
        let unknown = Parameter::Unknown {
            tag: 0xFE,
            payload: vec![1, 2, 3],
        };

        assert!(state.apply(&unknown));
        assert_eq!(state.unrecognized(), &[(0xFE, vec![1, 2, 3])]);
        // Same frame again: no change.
        assert!(!state.apply(&unknown));

        // A new payload under the same tag replaces the old entry.
        assert!(state.apply(&Parameter::Unknown {
            tag: 0xFE,
            payload: vec![9],
        }));
        assert_eq!(state.unrecognized(), &[(0xFE, vec![9])]);
    }

    #[test]
    fn refresh_stamp() {
        let mut state = FireplaceState::new();
        let at = Utc::now();
        state.mark_refreshed(at);
        assert_eq!(state.refreshed_at(), Some(at));
    }

    #[test]
    fn clear_resets_state() {
        let mut state = FireplaceState::new();
        state.apply(&Parameter::Pilot(true));
        state.mark_refreshed(Utc::now());

        state.clear();

        assert!(state.pilot().is_none());
        assert!(state.refreshed_at().is_none());
    }
}
