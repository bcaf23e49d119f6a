// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport implementations for the vendor cloud API.
//!
//! This module provides the [`Transport`] seam between the
//! [codec](crate::codec) and the network, plus the HTTP implementation
//! that talks to the vendor cloud ([`CloudClient`], behind the `http`
//! feature).
//!
//! The transport exchanges *raw frames*: it fetches the per-fire
//! overview as a sequence of encoded parameter buffers and posts encoded
//! buffers back. Framing boundaries are the cloud's concern; per-frame
//! encode/decode is the codec's. Retry and backoff policy belong to the
//! caller, not this layer.

mod auth;
#[cfg(feature = "http")]
mod http;

pub use auth::{StaticTokenProvider, TokenProvider};
#[cfg(feature = "http")]
pub use http::{CloudClient, CloudConfig};

use crate::error::ProtocolError;
use crate::types::FireId;

/// A transport that can read and write raw parameter frames for a fire.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Fetches the current overview of a fire: one raw encoded frame per
    /// reported parameter.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the response
    /// cannot be interpreted.
    async fn get_overview(&self, fire: &FireId) -> Result<Vec<Vec<u8>>, ProtocolError>;

    /// Writes encoded parameter frames to a fire.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or is rejected.
    async fn write_parameters(
        &self,
        fire: &FireId,
        frames: &[Vec<u8>],
    ) -> Result<(), ProtocolError>;
}
