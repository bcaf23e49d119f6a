// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bearer token seam for the cloud API.
//!
//! Every cloud request carries a bearer token. How that token is
//! obtained (interactive login, refresh flows, caches) is outside this
//! library; implement [`TokenProvider`] to plug in whatever acquisition
//! strategy an application uses. [`StaticTokenProvider`] covers the
//! common case of a token acquired up front.

use crate::error::ProtocolError;

/// Supplies a bearer token for cloud requests on demand.
///
/// The transport calls this before each request, so a provider may
/// rotate tokens between calls. Implementations must be cheap to call;
/// any expensive acquisition should be cached inside the provider.
#[allow(async_fn_in_trait)]
pub trait TokenProvider {
    /// Returns the current bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Token` if no token can be supplied.
    async fn bearer_token(&self) -> Result<String, ProtocolError>;
}

/// A token provider that always returns one pre-acquired token.
///
/// # Examples
///
/// ```
/// use emberlink::protocol::{StaticTokenProvider, TokenProvider};
///
/// # async fn example() -> Result<(), emberlink::error::ProtocolError> {
/// let provider = StaticTokenProvider::new("eyJ0eXAi...");
/// assert_eq!(provider.bearer_token().await?, "eyJ0eXAi...");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Creates a provider around a pre-acquired token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Result<String, ProtocolError> {
        if self.token.is_empty() {
            return Err(ProtocolError::Token("empty token".to_string()));
        }
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_returns_token() {
        let provider = StaticTokenProvider::new("abc123");
        assert_eq!(provider.bearer_token().await.unwrap(), "abc123");
    }

    #[tokio::test]
    async fn static_provider_rejects_empty() {
        let provider = StaticTokenProvider::new("");
        assert!(matches!(
            provider.bearer_token().await.unwrap_err(),
            ProtocolError::Token(_)
        ));
    }
}
