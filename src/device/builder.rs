// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builder for cloud-connected fireplaces.

use std::time::Duration;

use chrono::Utc;

use crate::codec::{Parameter, decode_parameter};
use crate::device::Fireplace;
use crate::error::{DeviceError, Error};
use crate::features::Features;
use crate::protocol::{CloudClient, CloudConfig, StaticTokenProvider, TokenProvider, Transport};
use crate::state::FireplaceState;
use crate::types::FireId;

impl Fireplace<CloudClient<StaticTokenProvider>> {
    /// Starts building a fireplace reached through the vendor cloud.
    ///
    /// # Errors
    ///
    /// Returns error if `serial` is not a valid fire identifier.
    pub fn cloud(serial: impl Into<String>) -> Result<FireplaceBuilder, Error> {
        Ok(FireplaceBuilder {
            fire: FireId::new(serial)?,
            config: CloudConfig::new(),
            token: None,
            features: None,
        })
    }
}

/// Builder for a [`Fireplace`] over the vendor cloud.
///
/// # Examples
///
/// ```no_run
/// use emberlink::{Features, Fireplace};
///
/// # async fn example() -> emberlink::Result<()> {
/// // Probe the overview to detect features:
/// let (fireplace, initial_state) = Fireplace::cloud("3FB7A2C4D9")?
///     .with_token("bearer-token")
///     .build()
///     .await?;
///
/// // Or skip the probe when the features are known:
/// let fireplace = Fireplace::cloud("3FB7A2C4D9")?
///     .with_token("bearer-token")
///     .with_features(Features::heater_insert())
///     .build_without_probe()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FireplaceBuilder {
    fire: FireId,
    config: CloudConfig,
    token: Option<String>,
    features: Option<Features>,
}

impl FireplaceBuilder {
    /// Sets a pre-acquired bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets a custom API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(base_url);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Sets the features explicitly instead of probing for them.
    #[must_use]
    pub fn with_features(mut self, features: Features) -> Self {
        self.features = Some(features);
        self
    }

    fn static_provider(&self) -> Result<StaticTokenProvider, Error> {
        let token = self.token.as_deref().ok_or_else(|| {
            Error::Device(DeviceError::InvalidConfiguration(
                "a bearer token is required; call with_token()".to_string(),
            ))
        })?;
        Ok(StaticTokenProvider::new(token))
    }

    /// Builds the fireplace, probing the overview once to detect
    /// features (unless set explicitly) and seed the initial state.
    ///
    /// # Errors
    ///
    /// Returns error if no token was configured, the client cannot be
    /// created, or the probe request fails.
    pub async fn build(
        self,
    ) -> Result<(Fireplace<CloudClient<StaticTokenProvider>>, FireplaceState), Error> {
        let provider = self.static_provider()?;
        self.build_with_provider(provider).await
    }

    /// Builds the fireplace with a custom token provider, probing the
    /// overview as [`build`](Self::build) does.
    ///
    /// # Errors
    ///
    /// Returns error if the client cannot be created or the probe
    /// request fails.
    pub async fn build_with_provider<A: TokenProvider>(
        self,
        provider: A,
    ) -> Result<(Fireplace<CloudClient<A>>, FireplaceState), Error> {
        let client = self.config.into_client(provider)?;
        let buffers = client.get_overview(&self.fire).await?;

        let params: Vec<Parameter> = buffers
            .iter()
            .filter_map(|buffer| match decode_parameter(buffer) {
                Ok(param) => Some(param),
                Err(err) => {
                    tracing::warn!(fire = %self.fire, %err, "Skipping undecodable frame in probe");
                    None
                }
            })
            .collect();

        let features = self
            .features
            .unwrap_or_else(|| Features::detect(&params));

        let fireplace = Fireplace::new(client, self.fire, features);
        let state = {
            let mut state = fireplace.state.write();
            state.apply_all(&params);
            state.mark_refreshed(Utc::now());
            state.clone()
        };
        Ok((fireplace, state))
    }

    /// Builds the fireplace without contacting the cloud. Requires the
    /// features to be set explicitly; the initial state is empty until
    /// the first [`refresh`](Fireplace::refresh).
    ///
    /// # Errors
    ///
    /// Returns error if no token or no features were configured, or the
    /// client cannot be created.
    pub fn build_without_probe(
        self,
    ) -> Result<Fireplace<CloudClient<StaticTokenProvider>>, Error> {
        let provider = self.static_provider()?;
        let features = self.features.ok_or_else(|| {
            Error::Device(DeviceError::InvalidConfiguration(
                "features are required without a probe; call with_features()".to_string(),
            ))
        })?;
        let client = self.config.into_client(provider)?;
        Ok(Fireplace::new(client, self.fire, features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloud_rejects_invalid_serial() {
        assert!(Fireplace::cloud("").is_err());
    }

    #[test]
    fn build_without_probe_requires_token() {
        let result = Fireplace::cloud("TEST01")
            .unwrap()
            .with_features(Features::basic())
            .build_without_probe();
        assert!(matches!(
            result.unwrap_err(),
            Error::Device(DeviceError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn build_without_probe_requires_features() {
        let result = Fireplace::cloud("TEST01")
            .unwrap()
            .with_token("t")
            .build_without_probe();
        assert!(matches!(
            result.unwrap_err(),
            Error::Device(DeviceError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn build_without_probe_succeeds() {
        let fireplace = Fireplace::cloud("TEST01")
            .unwrap()
            .with_token("t")
            .with_features(Features::heater_insert())
            .build_without_probe()
            .unwrap();
        assert_eq!(fireplace.features(), &Features::heater_insert());
        assert!(fireplace.state().mode().is_none());
    }
}
