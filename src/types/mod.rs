// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across blockdates.
//!
//! This module provides newtype wrappers for:
//! - UTC timestamps in whole seconds
//! - Explorer API credentials (redacted in debug output)

pub mod api_key;
pub mod timestamp;

// Note: Public types are re-exported from lib.rs, not here
