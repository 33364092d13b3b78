// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Date range to block range resolution.
//!
//! This module provides functionality for:
//! - Parsing `YYYY-MM-DD` dates and computing their UTC day boundaries
//! - Resolving a date range to its first and last block through a
//!   [`BlockTimeSource`](crate::BlockTimeSource)

pub mod boundaries;
pub mod range;

// Re-export public API
pub use boundaries::*;
pub use range::*;
