// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for fireplace control.
//!
//! This module provides type-safe representations of the values carried
//! by the parameter codec. Constrained types validate at construction
//! time; the unconstrained carriers ([`Temperature`], [`TimerDuration`])
//! are range-checked against the device's writable span when a
//! parameter is encoded.
//!
//! # Types
//!
//! - [`Temperature`] - tenths of a degree Celsius, the canonical wire unit
//! - [`RgbwColor`] - four-channel flame/accent color (R, G, B, W)
//! - [`TimerDuration`] - sleep timer in whole minutes
//! - [`FirmwareVersion`] - controller firmware (major.minor.patch)
//! - [`OperatingMode`] / [`HeatMode`] / [`FlameEffect`] / [`ErrorCode`] -
//!   closed single-byte wire enums
//! - [`LightLevel`] / [`LightSettings`] - accent light control (0-3)
//! - [`FireId`] - vendor-issued fire unit serial

mod fire_id;
mod modes;
mod rgbw;
mod temperature;
mod timer;
mod version;

pub use fire_id::FireId;
pub use modes::{ErrorCode, FlameEffect, HeatMode, LightLevel, LightSettings, OperatingMode};
pub use rgbw::RgbwColor;
pub use temperature::Temperature;
pub use timer::TimerDuration;
pub use version::FirmwareVersion;
