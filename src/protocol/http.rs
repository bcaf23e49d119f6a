// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP implementation of the cloud transport.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::protocol::{TokenProvider, Transport};
use crate::types::FireId;

// ============================================================================
// CloudConfig - Connection parameters for the vendor cloud
// ============================================================================

/// Configuration for the vendor cloud API.
///
/// # Examples
///
/// ```
/// use emberlink::protocol::CloudConfig;
/// use std::time::Duration;
///
/// // Defaults
/// let config = CloudConfig::new();
///
/// // With all options
/// let config = CloudConfig::new()
///     .with_base_url("https://cloud.example.com/api/v1")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct CloudConfig {
    base_url: String,
    timeout: Duration,
}

impl CloudConfig {
    /// Production API endpoint of the vendor cloud.
    pub const DEFAULT_BASE_URL: &'static str = "https://cloud.emberlink.io/api/v1";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with the default endpoint and timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom API base URL (no trailing slash).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates a [`CloudClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not http(s) or the HTTP client
    /// cannot be created.
    pub fn into_client<A: TokenProvider>(self, auth: A) -> Result<CloudClient<A>, ProtocolError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ProtocolError::InvalidAddress(self.base_url));
        }
        let base_url = self.base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(CloudClient {
            base_url,
            client,
            auth,
        })
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CloudClient - Transport over the vendor cloud HTTP API
// ============================================================================

/// JSON envelope returned by the overview endpoint. Each entry of
/// `params` is one hex-encoded parameter frame.
#[derive(Debug, Deserialize)]
struct OverviewEnvelope {
    #[allow(dead_code)]
    serial: String,
    params: Vec<String>,
}

/// JSON body accepted by the parameter-write endpoint.
#[derive(Debug, Serialize)]
struct WriteRequest {
    params: Vec<String>,
}

/// HTTP client for the vendor cloud API.
///
/// Implements [`Transport`] over two endpoints:
/// `GET {base}/fires/{serial}/overview` and
/// `POST {base}/fires/{serial}/parameters`. Every request carries a
/// bearer token from the configured [`TokenProvider`].
///
/// # Examples
///
/// ```no_run
/// use emberlink::protocol::{CloudConfig, CloudClient, StaticTokenProvider, Transport};
/// use emberlink::types::FireId;
///
/// # async fn example() -> emberlink::Result<()> {
/// let client = CloudConfig::new().into_client(StaticTokenProvider::new("token"))?;
/// let fire = FireId::new("3FB7A2C4D9")?;
/// let frames = client.get_overview(&fire).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CloudClient<A: TokenProvider> {
    base_url: String,
    client: Client,
    auth: A,
}

impl<A: TokenProvider> CloudClient<A> {
    /// Returns the base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn fire_url(&self, fire: &FireId, endpoint: &str) -> String {
        format!(
            "{}/fires/{}/{endpoint}",
            self.base_url,
            urlencoding::encode(fire.as_str())
        )
    }

    fn check_status(status: reqwest::StatusCode) -> Result<(), ProtocolError> {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed);
        }
        if !status.is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }
        Ok(())
    }
}

impl<A: TokenProvider> Transport for CloudClient<A> {
    async fn get_overview(&self, fire: &FireId) -> Result<Vec<Vec<u8>>, ProtocolError> {
        let url = self.fire_url(fire, "overview");
        let token = self.auth.bearer_token().await?;

        tracing::debug!(url = %url, "Fetching fire overview");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        Self::check_status(response.status())?;

        let envelope: OverviewEnvelope = response.json().await.map_err(ProtocolError::Http)?;

        tracing::debug!(
            fire = %fire,
            frames = envelope.params.len(),
            "Received overview"
        );

        envelope
            .params
            .iter()
            .map(|h| {
                hex::decode(h)
                    .map_err(|e| ProtocolError::InvalidResponse(format!("bad hex frame: {e}")))
            })
            .collect()
    }

    async fn write_parameters(
        &self,
        fire: &FireId,
        frames: &[Vec<u8>],
    ) -> Result<(), ProtocolError> {
        let url = self.fire_url(fire, "parameters");
        let token = self.auth.bearer_token().await?;
        let body = WriteRequest {
            params: frames.iter().map(hex::encode).collect(),
        };

        tracing::debug!(url = %url, frames = frames.len(), "Writing parameters");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        Self::check_status(response.status())
    }
}
