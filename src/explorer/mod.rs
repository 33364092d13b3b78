// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block-by-time lookups against an Etherscan-compatible explorer.
//!
//! This module provides:
//! - [`Closest`]: which side of a timestamp the returned block may fall on
//! - [`BlockTimeSource`]: the seam the date range resolver is written against
//! - [`EtherscanClient`]: the HTTP implementation of that seam
//!
//! # Examples
//!
//! ```rust,ignore
//! use blockdates::{Closest, EtherscanClient, ExplorerConfig, UnixTimestamp};
//!
//! let client = EtherscanClient::new(ExplorerConfig::new("YourApiKeyToken"));
//! let block = client.resolve_block(UnixTimestamp(1578614400), Closest::After).await?;
//! println!("First block of 2020-01-10: {block}");
//! ```

use std::str::FromStr;

use alloy_primitives::BlockNumber;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ExplorerError;
use crate::types::timestamp::UnixTimestamp;

pub mod client;
pub mod response;

pub use client::EtherscanClient;
pub use response::ExplorerResponse;

/// Directional preference for a block-by-time lookup
///
/// Block production is discrete, so usually no block exists exactly at the
/// requested instant. `After` yields the first block at or after it, `Before`
/// the last block at or before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Closest {
    Before,
    After,
}

impl Closest {
    /// Wire value of the `closest` query parameter
    pub const fn as_str(&self) -> &'static str {
        match self {
            Closest::Before => "before",
            Closest::After => "after",
        }
    }
}

impl std::fmt::Display for Closest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown direction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown direction '{0}' (expected 'before' or 'after')")]
pub struct ParseClosestError(String);

impl FromStr for Closest {
    type Err = ParseClosestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "before" => Ok(Closest::Before),
            "after" => Ok(Closest::After),
            _ => Err(ParseClosestError(s.to_string())),
        }
    }
}

/// Source of block numbers by timestamp
///
/// Implementations perform exactly one lookup per call, with no caching and no
/// retries. [`EtherscanClient`] is the production implementation.
#[async_trait]
pub trait BlockTimeSource: Send + Sync {
    /// Returns the block closest to `timestamp` in the given direction
    async fn block_number_by_time(
        &self,
        timestamp: UnixTimestamp,
        closest: Closest,
    ) -> Result<BlockNumber, ExplorerError>;
}

#[async_trait]
impl<S: BlockTimeSource + ?Sized> BlockTimeSource for std::sync::Arc<S> {
    async fn block_number_by_time(
        &self,
        timestamp: UnixTimestamp,
        closest: Closest,
    ) -> Result<BlockNumber, ExplorerError> {
        (**self).block_number_by_time(timestamp, closest).await
    }
}
