// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Resolve UTC calendar date ranges to Ethereum block ranges.
//!
//! The first block of a range is the first block produced at or after
//! `00:00:00 UTC` on the start date, and the last block is the last one
//! produced at or before `23:59:59 UTC` on the end date. Both are looked up
//! through an Etherscan-compatible explorer's `getblocknobytime` action.
//!
//! # Example
//!
//! ```rust,ignore
//! use blockdates::{DateRangeResolver, EtherscanClient, ExplorerConfig};
//!
//! let config = ExplorerConfig::from_env()?;
//! let resolver = DateRangeResolver::new(EtherscanClient::new(config));
//! let blocks = resolver.resolve_date_range_blocks("2020-01-10", "2020-01-10").await?;
//! println!("{} blocks from {} to {}", blocks.block_count(), blocks.start_block, blocks.end_block);
//! ```

pub mod blocks;
pub mod cli;
pub mod config;
pub mod errors;
pub mod explorer;
mod tracing;
pub mod types;

pub use blocks::{
    day_boundaries, parse_date, resolve_date_range_blocks, DateRangeBlocks, DateRangeResolver,
    DayBoundaries, DATE_FORMAT,
};
pub use config::{ExplorerConfig, ExplorerConfigBuilder};
pub use errors::{BlockDatesError, ConfigError, DateRangeError, ExplorerError, TransportError};
pub use explorer::{BlockTimeSource, Closest, EtherscanClient, ExplorerResponse, ParseClosestError};
pub use types::api_key::ApiKey;
pub use types::timestamp::UnixTimestamp;

pub use alloy_primitives::BlockNumber;
