// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the explorer's `getblocknobytime` action
//!
//! One lookup is one GET request. There is no retry, no rate limiting and no
//! client-side timeout; a failed attempt is final.

use alloy_primitives::BlockNumber;
use async_trait::async_trait;
use tracing::{debug, Instrument};
use url::Url;

use crate::config::constants::query;
use crate::config::ExplorerConfig;
use crate::errors::{ExplorerError, TransportError};
use crate::explorer::response::parse_block_number;
use crate::explorer::{BlockTimeSource, Closest};
use crate::tracing::spans;
use crate::types::timestamp::UnixTimestamp;

/// Resolves timestamps to block numbers through an Etherscan-compatible API
///
/// # Examples
///
/// ```rust,ignore
/// use blockdates::{Closest, EtherscanClient, ExplorerConfig, UnixTimestamp};
///
/// let client = EtherscanClient::new(ExplorerConfig::new("YourApiKeyToken"));
/// let block = client.resolve_block(UnixTimestamp(1578700799), Closest::Before).await?;
/// ```
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    config: ExplorerConfig,
    http: reqwest::Client,
}

impl EtherscanClient {
    /// Creates a client with a default `reqwest` connection pool
    pub fn new(config: ExplorerConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Creates a client that shares an existing `reqwest` client
    pub fn with_http_client(config: ExplorerConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Builds the lookup URL
    ///
    /// Parameters are appended to any query already present on the endpoint,
    /// in the order `module`, `action`, `timestamp`, `closest`, `apikey`.
    pub fn request_url(&self, timestamp: UnixTimestamp, closest: Closest) -> Url {
        let mut url = self.config.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(query::MODULE, query::MODULE_BLOCK)
            .append_pair(query::ACTION, query::ACTION_BLOCK_BY_TIME)
            .append_pair(query::TIMESTAMP, &timestamp.to_string())
            .append_pair(query::CLOSEST, closest.as_str())
            .append_pair(query::API_KEY, self.config.api_key.expose());
        url
    }

    /// Returns the block closest to `timestamp` in the given direction
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::Upstream`] if the explorer reports a non-`"1"` status
    /// - [`ExplorerError::Transport`] on connection failure, non-2xx status, or
    ///   an unexpected response body
    pub async fn resolve_block(
        &self,
        timestamp: UnixTimestamp,
        closest: Closest,
    ) -> Result<BlockNumber, ExplorerError> {
        async move {
            let endpoint = self.config.endpoint.as_str();

            // Errors are stripped of their URL so the api key never reaches logs.
            let response = self
                .http
                .get(self.request_url(timestamp, closest))
                .send()
                .await
                .map_err(|e| TransportError::request(endpoint, e.without_url()))?;

            let status = response.status();
            if !status.is_success() {
                debug!(status = status.as_u16(), "Explorer returned non-success HTTP status");
                return Err(TransportError::http_status(status.as_u16()).into());
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError::request(endpoint, e.without_url()))?;

            let block = parse_block_number(&body)?;

            debug!(timestamp = %timestamp, closest = %closest, block, "Resolved block by time");
            Ok(block)
        }
        .instrument(spans::resolve_block(timestamp, closest))
        .await
    }
}

#[async_trait]
impl BlockTimeSource for EtherscanClient {
    async fn block_number_by_time(
        &self,
        timestamp: UnixTimestamp,
        closest: Closest,
    ) -> Result<BlockNumber, ExplorerError> {
        self.resolve_block(timestamp, closest).await
    }
}
