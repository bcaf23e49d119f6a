// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `EmberLink` - A Rust library to control cloud-connected smart
//! fireplaces.
//!
//! This library talks to the vendor cloud API on behalf of an
//! application: it fetches each fire unit's *overview* (a set of binary
//! parameter frames), decodes them into typed values, and encodes typed
//! writes back onto the wire.
//!
//! # Supported Features
//!
//! - **Flame control**: operating mode, flame animation, pilot flame
//! - **Heating**: heater blower level, thermostat setpoint (tenths of
//!   a degree Celsius on the wire)
//! - **Lighting**: accent light, RGBW flame color
//! - **Timers**: sleep timer up to three hours
//! - **Diagnostics**: firmware version, fault status, room temperature
//!
//! # Layering
//!
//! - [`codec`] - the pure binary parameter codec (no I/O)
//! - [`types`] - validated value objects for every codec field
//! - [`protocol`] - the cloud transport and token seam
//! - [`Fireplace`] - the high-level device façade
//!
//! # Quick Start
//!
//! ## Controlling a fire
//!
//! ```no_run
//! use emberlink::Fireplace;
//! use emberlink::types::{FlameEffect, Temperature};
//!
//! #[tokio::main]
//! async fn main() -> emberlink::Result<()> {
//!     // Probes the overview once to detect features.
//!     // Returns (fireplace, initial_state).
//!     let (fireplace, state) = Fireplace::cloud("3FB7A2C4D9")?
//!         .with_token("bearer-token")
//!         .build()
//!         .await?;
//!
//!     if let Some(room) = state.room_temperature() {
//!         println!("room is at {room}");
//!     }
//!
//!     fireplace.set_flame_effect(FlameEffect::Ember).await?;
//!
//!     // Feature-gated: fails locally on units without a heater.
//!     if fireplace.features().heater {
//!         fireplace
//!             .set_heat_setpoint(Temperature::from_celsius(21.5))
//!             .await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Using the codec directly
//!
//! The codec is pure and independent of the transport; it can be used
//! on raw buffers obtained elsewhere:
//!
//! ```
//! use emberlink::codec::{Parameter, decode_parameter, encode_parameter};
//! use emberlink::types::RgbwColor;
//!
//! let param = Parameter::FlameColor(RgbwColor::new(255, 96, 0, 16));
//! let frame = encode_parameter(&param)?;
//! assert_eq!(decode_parameter(&frame)?, param);
//! # Ok::<(), emberlink::error::Error>(())
//! ```
//!
//! ## Watching for changes
//!
//! The cloud API is poll-only; [`Fireplace::watch`] wraps the polling
//! loop:
//!
//! ```no_run
//! use emberlink::Fireplace;
//! use std::time::Duration;
//!
//! # async fn example() -> emberlink::Result<()> {
//! let (fireplace, _) = Fireplace::cloud("3FB7A2C4D9")?
//!     .with_token("bearer-token")
//!     .build()
//!     .await?;
//!
//! fireplace
//!     .watch(Duration::from_secs(30), |state| {
//!         if state.has_fault() {
//!             eprintln!("fault: {:?}", state.error());
//!         }
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
mod device;
pub mod error;
mod features;
pub mod protocol;
pub mod state;
pub mod types;

pub use codec::{Parameter, decode_parameter, encode_parameter, make_header, parse_header};
#[cfg(feature = "http")]
pub use device::FireplaceBuilder;
pub use device::Fireplace;
pub use error::{DeviceError, EncodingError, Error, MalformedFrame, ProtocolError, Result, ValueError};
pub use features::Features;
#[cfg(feature = "http")]
pub use protocol::{CloudClient, CloudConfig};
pub use protocol::{StaticTokenProvider, TokenProvider, Transport};
pub use state::FireplaceState;
pub use types::{
    ErrorCode, FireId, FirmwareVersion, FlameEffect, HeatMode, LightLevel, LightSettings,
    OperatingMode, RgbwColor, Temperature, TimerDuration,
};
