// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for blockdates operations.
//!
//! Telemetry concerns are kept out of business logic: each instrumented
//! operation has a span helper here and attaches it with
//! [`tracing::Instrument`], so spans stay correct across `.await` points.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param_value))
//!     .await
//! }
//! ```

use tracing::Span;

use crate::explorer::Closest;
use crate::types::timestamp::UnixTimestamp;

/// Create span for a single block-by-time lookup.
///
/// Parent: resolve_date_range_blocks span (or none when called directly)
/// Children: HTTP request to the explorer
#[inline]
pub(crate) fn resolve_block(timestamp: UnixTimestamp, closest: Closest) -> Span {
    tracing::debug_span!(
        "blockdates.resolve_block",
        timestamp = %timestamp,
        closest = %closest,
    )
}

/// Create span for resolving a date range to a block range.
///
/// Parent: None (root span for this operation)
/// Children: two resolve_block spans, start then end
#[inline]
pub(crate) fn resolve_date_range_blocks(start_date: &str, end_date: &str) -> Span {
    tracing::info_span!(
        "blockdates.resolve_date_range_blocks",
        start_date = %start_date,
        end_date = %end_date,
    )
}
