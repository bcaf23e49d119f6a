// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level fireplace abstraction.
//!
//! [`Fireplace`] wraps a [`Transport`] and exposes typed operations:
//! refresh the cached state from the cloud overview, and write
//! individual settings. Writes are feature-gated, so a request the unit
//! cannot honor fails locally instead of reaching the cloud.
//!
//! ```no_run
//! use emberlink::Fireplace;
//! use emberlink::types::Temperature;
//!
//! # async fn example() -> emberlink::Result<()> {
//! let (fireplace, state) = Fireplace::cloud("3FB7A2C4D9")?
//!     .with_token("bearer-token")
//!     .build()
//!     .await?;
//!
//! if let Some(room) = state.room_temperature() {
//!     println!("room is at {room}");
//! }
//!
//! fireplace.set_heat_setpoint(Temperature::from_celsius(21.5)).await?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "http")]
mod builder;

#[cfg(feature = "http")]
pub use builder::FireplaceBuilder;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parking_lot::RwLock;

use crate::codec::{Parameter, decode_parameter, encode_parameter};
use crate::error::Error;
use crate::features::Features;
use crate::protocol::Transport;
use crate::state::FireplaceState;
use crate::types::{
    FireId, FlameEffect, HeatMode, LightSettings, OperatingMode, RgbwColor, Temperature,
    TimerDuration,
};

/// A cloud-connected fireplace.
///
/// The type parameter `T` is the transport used to reach the fire;
/// applications normally obtain it through [`Fireplace::cloud`], while
/// tests and embedders may supply their own [`Transport`]
/// implementation via [`Fireplace::new`].
///
/// The fireplace keeps a cached [`FireplaceState`] snapshot, updated on
/// every [`refresh`](Self::refresh) and optimistically after each
/// successful write.
#[derive(Debug)]
pub struct Fireplace<T: Transport> {
    transport: Arc<T>,
    fire: FireId,
    features: Features,
    state: Arc<RwLock<FireplaceState>>,
}

impl<T: Transport> Fireplace<T> {
    /// Creates a fireplace over an existing transport.
    #[must_use]
    pub fn new(transport: T, fire: FireId, features: Features) -> Self {
        Self {
            transport: Arc::new(transport),
            fire,
            features,
            state: Arc::new(RwLock::new(FireplaceState::new())),
        }
    }

    /// Returns the fire identifier.
    #[must_use]
    pub fn fire(&self) -> &FireId {
        &self.fire
    }

    /// Returns the detected or configured features.
    #[must_use]
    pub fn features(&self) -> &Features {
        &self.features
    }

    /// Returns a snapshot of the current cached state.
    #[must_use]
    pub fn state(&self) -> FireplaceState {
        self.state.read().clone()
    }

    /// Fetches the overview from the cloud and rebuilds the cached
    /// state, returning the fresh snapshot.
    ///
    /// Frames that fail to decode are skipped with a warning rather than
    /// failing the whole refresh; unrecognized parameter tags are kept
    /// in the snapshot for passthrough.
    ///
    /// # Errors
    ///
    /// Returns error if the overview request fails.
    pub async fn refresh(&self) -> Result<FireplaceState, Error> {
        let buffers = self.transport.get_overview(&self.fire).await?;

        let mut params = Vec::with_capacity(buffers.len());
        for buffer in &buffers {
            match decode_parameter(buffer) {
                Ok(param) => {
                    if let Parameter::Unknown { tag, .. } = &param {
                        tracing::debug!(fire = %self.fire, tag = *tag, "Unrecognized parameter tag");
                    }
                    params.push(param);
                }
                Err(err) => {
                    tracing::warn!(fire = %self.fire, %err, "Skipping undecodable frame");
                }
            }
        }

        let mut state = self.state.write();
        state.apply_all(&params);
        state.mark_refreshed(Utc::now());
        Ok(state.clone())
    }

    /// Encodes and writes a batch of parameters in one request.
    ///
    /// Every parameter is encoded before anything is sent, so an
    /// out-of-range value fails the whole batch without a partial write.
    ///
    /// # Errors
    ///
    /// Returns error if encoding or the write request fails.
    pub async fn write_parameters(&self, params: &[Parameter]) -> Result<(), Error> {
        let frames = params
            .iter()
            .map(encode_parameter)
            .collect::<Result<Vec<_>, _>>()?;
        self.transport.write_parameters(&self.fire, &frames).await?;

        let mut state = self.state.write();
        for param in params {
            state.apply(param);
        }
        Ok(())
    }

    async fn write_one(&self, param: Parameter) -> Result<(), Error> {
        self.write_parameters(std::slice::from_ref(&param)).await
    }

    fn require(&self, supported: bool) -> Result<(), Error> {
        if supported {
            Ok(())
        } else {
            Err(Error::FeatureNotSupported)
        }
    }

    // ========== Flame Control ==========

    /// Sets the operating mode.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_mode(&self, mode: OperatingMode) -> Result<(), Error> {
        self.write_one(Parameter::Mode(mode)).await
    }

    /// Turns the fire off.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn turn_off(&self) -> Result<(), Error> {
        self.set_mode(OperatingMode::Off).await
    }

    /// Sets the flame animation.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn set_flame_effect(&self, effect: FlameEffect) -> Result<(), Error> {
        self.write_one(Parameter::FlameEffect(effect)).await
    }

    /// Sets the flame/accent color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FeatureNotSupported`] on units without RGBW
    /// lighting, otherwise error if the write fails.
    pub async fn set_flame_color(&self, color: RgbwColor) -> Result<(), Error> {
        self.require(self.features.flame_color)?;
        self.write_one(Parameter::FlameColor(color)).await
    }

    /// Lights or extinguishes the pilot flame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FeatureNotSupported`] on units without remote
    /// pilot control, otherwise error if the write fails.
    pub async fn set_pilot(&self, lit: bool) -> Result<(), Error> {
        self.require(self.features.pilot)?;
        self.write_one(Parameter::Pilot(lit)).await
    }

    // ========== Heating ==========

    /// Sets the heater blower level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FeatureNotSupported`] on units without a heater,
    /// otherwise error if the write fails.
    pub async fn set_heat_mode(&self, mode: HeatMode) -> Result<(), Error> {
        self.require(self.features.heater)?;
        self.write_one(Parameter::HeatMode(mode)).await
    }

    /// Sets the thermostat heat setpoint.
    ///
    /// The setpoint must lie within the device span (10.0-32.0 °C);
    /// out-of-range values fail at encode time, before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FeatureNotSupported`] on units without a heater,
    /// [`EncodingError`](crate::error::EncodingError) wrapped in
    /// [`Error::Encoding`] for an out-of-range setpoint, otherwise error
    /// if the write fails.
    pub async fn set_heat_setpoint(&self, setpoint: Temperature) -> Result<(), Error> {
        self.require(self.features.heater)?;
        self.write_one(Parameter::HeatSetpoint(setpoint)).await
    }

    // ========== Timer & Light ==========

    /// Sets the sleep timer. [`TimerDuration::OFF`] clears it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FeatureNotSupported`] on units without a timer,
    /// otherwise error if encoding or the write fails.
    pub async fn set_sleep_timer(&self, timer: TimerDuration) -> Result<(), Error> {
        self.require(self.features.sleep_timer)?;
        self.write_one(Parameter::SleepTimer(timer)).await
    }

    /// Clears the sleep timer.
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub async fn clear_sleep_timer(&self) -> Result<(), Error> {
        self.set_sleep_timer(TimerDuration::OFF).await
    }

    /// Sets the accent light.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FeatureNotSupported`] on units without accent
    /// lighting, otherwise error if the write fails.
    pub async fn set_light(&self, light: LightSettings) -> Result<(), Error> {
        self.require(self.features.light)?;
        self.write_one(Parameter::Light(light)).await
    }

    // ========== Polling ==========

    /// Polls the cloud at `period` and invokes `on_change` whenever a
    /// refresh changes the snapshot.
    ///
    /// The first refresh happens immediately. The future runs until a
    /// refresh fails; spawn it if it should run in the background.
    ///
    /// # Errors
    ///
    /// Returns the first refresh error. No retry policy is applied here;
    /// callers that want one should wrap this call.
    pub async fn watch<F>(&self, period: Duration, mut on_change: F) -> Result<(), Error>
    where
        F: FnMut(&FireplaceState),
    {
        let mut interval = tokio::time::interval(period);
        let mut last = self.state();
        loop {
            interval.tick().await;
            let current = self.refresh().await?;
            if current != last {
                on_change(&current);
                last = current;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::types::LightLevel;
    use parking_lot::Mutex;

    /// In-memory transport: serves canned overview frames and records
    /// written ones.
    #[derive(Debug, Default)]
    struct MockTransport {
        overview: Vec<Vec<u8>>,
        written: Mutex<Vec<Vec<u8>>>,
    }

    impl MockTransport {
        fn with_overview(params: &[Parameter]) -> Self {
            Self {
                overview: params.iter().map(|p| encode_parameter(p).unwrap()).collect(),
                written: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for &MockTransport {
        async fn get_overview(&self, _fire: &FireId) -> Result<Vec<Vec<u8>>, ProtocolError> {
            Ok(self.overview.clone())
        }

        async fn write_parameters(
            &self,
            _fire: &FireId,
            frames: &[Vec<u8>],
        ) -> Result<(), ProtocolError> {
            self.written.lock().extend(frames.iter().cloned());
            Ok(())
        }
    }

    fn fire() -> FireId {
        FireId::new("TEST01").unwrap()
    }

    #[tokio::test]
    async fn refresh_builds_state() {
        let transport = MockTransport::with_overview(&[
            Parameter::Mode(OperatingMode::Manual),
            Parameter::RoomTemperature(Temperature::from_tenths(203)),
        ]);
        let fireplace = Fireplace::new(&transport, fire(), Features::full());

        let state = fireplace.refresh().await.unwrap();
        assert_eq!(state.mode(), Some(OperatingMode::Manual));
        assert_eq!(state.room_temperature(), Some(Temperature::from_tenths(203)));
        assert!(state.refreshed_at().is_some());
        assert_eq!(fireplace.state(), state);
    }

    #[tokio::test]
    async fn refresh_skips_undecodable_frames() {
        let mut transport = MockTransport::with_overview(&[Parameter::Pilot(true)]);
        // A corrupt frame: declared length overruns the buffer.
        transport.overview.push(vec![0x50, 0x03, 0x00, 0x09]);
        let fireplace = Fireplace::new(&transport, fire(), Features::full());

        let state = fireplace.refresh().await.unwrap();
        assert_eq!(state.pilot(), Some(true));
    }

    #[tokio::test]
    async fn refresh_keeps_unknown_parameters() {
        let mut transport = MockTransport::default();
        transport.overview.push(vec![0x50, 0xFE, 0x00, 0x01, 0x2A]);
        let fireplace = Fireplace::new(&transport, fire(), Features::full());

        let state = fireplace.refresh().await.unwrap();
        assert_eq!(state.unrecognized(), &[(0xFE, vec![0x2A])]);
    }

    #[tokio::test]
    async fn write_updates_cached_state() {
        let transport = MockTransport::default();
        let fireplace = Fireplace::new(&transport, fire(), Features::full());

        fireplace.set_heat_mode(HeatMode::High).await.unwrap();

        assert_eq!(fireplace.state().heat_mode(), Some(HeatMode::High));
        let written = transport.written.lock();
        assert_eq!(written.as_slice(), &[vec![0x50, 0x08, 0x00, 0x01, 0x02]]);
    }

    #[tokio::test]
    async fn feature_gating_blocks_writes() {
        let transport = MockTransport::default();
        let fireplace = Fireplace::new(&transport, fire(), Features::basic());

        let err = fireplace
            .set_heat_setpoint(Temperature::from_tenths(215))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::FeatureNotSupported));

        let err = fireplace
            .set_light(LightSettings::new(true, LightLevel::MIN))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::FeatureNotSupported));

        // Nothing reached the transport.
        assert!(transport.written.lock().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_setpoint_fails_before_write() {
        let transport = MockTransport::default();
        let fireplace = Fireplace::new(&transport, fire(), Features::full());

        let err = fireplace
            .set_heat_setpoint(Temperature::from_tenths(400))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
        assert!(transport.written.lock().is_empty());
    }

    #[tokio::test]
    async fn batch_write_is_all_or_nothing() {
        let transport = MockTransport::default();
        let fireplace = Fireplace::new(&transport, fire(), Features::full());

        let err = fireplace
            .write_parameters(&[
                Parameter::Mode(OperatingMode::Manual),
                Parameter::HeatSetpoint(Temperature::from_tenths(50)), // out of range
            ])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
        assert!(transport.written.lock().is_empty());
        // The cached state was not touched either.
        assert!(fireplace.state().mode().is_none());
    }

    #[tokio::test]
    async fn turn_off_writes_mode_off() {
        let transport = MockTransport::default();
        let fireplace = Fireplace::new(&transport, fire(), Features::basic());

        fireplace.turn_off().await.unwrap();
        assert_eq!(fireplace.state().mode(), Some(OperatingMode::Off));
    }
}
