// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Resolution of calendar date ranges to inclusive block ranges
//!
//! The first block is the first one produced at or after `00:00:00 UTC` on the
//! start date; the last block is the last one produced at or before
//! `23:59:59 UTC` on the end date. The two lookups run one after the other, and
//! a failure in the first means the second is never issued.
//!
//! # Examples
//!
//! ```rust,ignore
//! use blockdates::{DateRangeResolver, EtherscanClient, ExplorerConfig};
//!
//! let resolver = DateRangeResolver::new(EtherscanClient::new(ExplorerConfig::new(api_key)));
//! let blocks = resolver.resolve_date_range_blocks("2025-01-01", "2025-01-31").await?;
//!
//! println!("Blocks: [{}, {}]", blocks.start_block, blocks.end_block);
//! ```

use alloy_primitives::BlockNumber;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, Instrument};

use crate::blocks::boundaries::{day_boundaries, parse_date};
use crate::config::ExplorerConfig;
use crate::errors::DateRangeError;
use crate::explorer::{BlockTimeSource, Closest, EtherscanClient};
use crate::tracing::spans;
use crate::types::api_key::ApiKey;
use crate::types::timestamp::UnixTimestamp;

/// Block range covering a UTC date range
///
/// `start_block`/`end_block` are inclusive. No ordering between them is
/// enforced: a reversed date range yields whatever the explorer answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeBlocks {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// First block at or after `start_ts`
    pub start_block: BlockNumber,

    /// Last block at or before `end_ts`
    pub end_block: BlockNumber,

    /// `00:00:00` UTC on `start_date`
    pub start_ts: UnixTimestamp,

    /// `23:59:59` UTC on `end_date`
    pub end_ts: UnixTimestamp,
}

impl DateRangeBlocks {
    /// Number of blocks in the range (inclusive), 0 if `end_block < start_block`
    pub fn block_count(&self) -> u64 {
        if self.end_block < self.start_block {
            return 0;
        }
        self.end_block
            .saturating_sub(self.start_block)
            .saturating_add(1)
    }
}

/// Resolves date ranges to block ranges through a [`BlockTimeSource`]
///
/// Holds no state besides the source, so identical inputs against a stable
/// explorer always produce identical results.
pub struct DateRangeResolver<S> {
    source: S,
}

impl<S: BlockTimeSource> DateRangeResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolves `YYYY-MM-DD` start and end dates to a block range
    ///
    /// Both dates are validated before any lookup is issued.
    ///
    /// # Errors
    ///
    /// - [`DateRangeError::InvalidDate`] if either input does not parse
    /// - [`DateRangeError::TimestampOutOfRange`] for dates before 1970-01-01
    /// - [`DateRangeError::Explorer`] with the first failed lookup's error
    pub async fn resolve_date_range_blocks(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<DateRangeBlocks, DateRangeError> {
        async move {
            let start = parse_date(start_date)?;
            let end = parse_date(end_date)?;
            self.resolve_dates(start, end).await
        }
        .instrument(spans::resolve_date_range_blocks(start_date, end_date))
        .await
    }

    /// Resolves already-parsed dates to a block range
    pub async fn resolve_dates(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<DateRangeBlocks, DateRangeError> {
        let bounds = day_boundaries(start_date, end_date)?;
        let start_ts = bounds.start_ts();
        let end_ts = bounds.end_ts();

        info!(start_date = %start_date, end_date = %end_date, "Resolving date range (UTC)");
        info!(start = %bounds.start_rfc3339(), start_ts = %start_ts, "Start timestamp");
        info!(end = %bounds.end_rfc3339(), end_ts = %end_ts, "End timestamp");

        if end_date < start_date {
            debug!("End date precedes start date, querying as given");
        }

        let start_block = self
            .source
            .block_number_by_time(start_ts, Closest::After)
            .await?;

        let end_block = self
            .source
            .block_number_by_time(end_ts, Closest::Before)
            .await?;

        let blocks = DateRangeBlocks {
            start_date,
            end_date,
            start_block,
            end_block,
            start_ts,
            end_ts,
        };

        info!(
            start_block = blocks.start_block,
            end_block = blocks.end_block,
            block_count = blocks.block_count(),
            "Resolved date range blocks"
        );

        Ok(blocks)
    }
}

/// Resolves a date range against the default explorer endpoint
///
/// Convenience for one-off calls; build a [`DateRangeResolver`] to reuse the
/// HTTP connection pool or to point at another endpoint.
pub async fn resolve_date_range_blocks(
    start_date: &str,
    end_date: &str,
    api_key: impl Into<ApiKey>,
) -> Result<DateRangeBlocks, DateRangeError> {
    let client = EtherscanClient::new(ExplorerConfig::new(api_key));
    DateRangeResolver::new(client)
        .resolve_date_range_blocks(start_date, end_date)
        .await
}
