// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Unix timestamps in whole seconds, always UTC

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unix timestamp in seconds (always UTC)
///
/// Sub-second precision is truncated, so `23:59:59.999` becomes `…:59`.
///
/// # Examples
///
/// ```
/// use blockdates::UnixTimestamp;
/// use chrono::{TimeZone, Utc};
///
/// let dt = Utc.with_ymd_and_hms(2020, 1, 10, 0, 0, 0).unwrap();
/// assert_eq!(UnixTimestamp::from_datetime(dt), UnixTimestamp(1578614400));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnixTimestamp(pub i64);

impl UnixTimestamp {
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }

    /// Returns the inner number of seconds
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

}

impl std::fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
