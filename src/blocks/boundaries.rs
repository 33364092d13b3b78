// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! UTC day boundaries for calendar date ranges
//!
//! Dates are always interpreted as UTC calendar days, never local time, so the
//! result does not depend on the time zone of the executing machine.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;

use crate::errors::DateRangeError;
use crate::types::timestamp::UnixTimestamp;

/// Accepted input format (month and day may omit the leading zero)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date
///
/// Surrounding whitespace is ignored and single-digit months and days are
/// accepted, so `2025-1-1` equals `2025-01-01`.
///
/// # Examples
///
/// ```
/// use blockdates::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("2020-01-10").unwrap(), NaiveDate::from_ymd_opt(2020, 1, 10).unwrap());
/// assert!(parse_date("2020-02-30").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|e| DateRangeError::invalid_date(input, e))
}

/// The UTC instants bounding a date range
///
/// - `start`: `00:00:00.000` UTC on the start date
/// - `end`: `23:59:59.999` UTC on the end date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayBoundaries {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayBoundaries {
    /// Start of the range in whole seconds
    pub fn start_ts(&self) -> UnixTimestamp {
        UnixTimestamp::from_datetime(self.start)
    }

    /// End of the range in whole seconds (`23:59:59`)
    pub fn end_ts(&self) -> UnixTimestamp {
        UnixTimestamp::from_datetime(self.end)
    }

    /// Start formatted as RFC 3339, e.g. `2020-01-10T00:00:00Z`
    pub fn start_rfc3339(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// End formatted as RFC 3339, e.g. `2020-01-10T23:59:59Z`
    pub fn end_rfc3339(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Computes the UTC boundaries of `[start_date, end_date]`
///
/// A reversed range (`end_date < start_date`) is not rejected.
///
/// # Errors
///
/// Returns [`DateRangeError::TimestampOutOfRange`] for dates before the Unix
/// epoch, which the explorer cannot be asked about.
///
/// # Examples
///
/// ```
/// use blockdates::{day_boundaries, parse_date, UnixTimestamp};
///
/// let day = parse_date("2020-01-10").unwrap();
/// let bounds = day_boundaries(day, day).unwrap();
/// assert_eq!(bounds.start_ts(), UnixTimestamp(1578614400));
/// assert_eq!(bounds.end_ts(), UnixTimestamp(1578700799));
/// ```
pub fn day_boundaries(
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<DayBoundaries, DateRangeError> {
    Ok(DayBoundaries {
        start: start_of_day(start_date)?,
        end: end_of_day(end_date)?,
    })
}

fn start_of_day(date: NaiveDate) -> Result<DateTime<Utc>, DateRangeError> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .filter(|dt| dt.timestamp() >= 0)
        .ok_or_else(|| DateRangeError::timestamp_out_of_range(date))
}

fn end_of_day(date: NaiveDate) -> Result<DateTime<Utc>, DateRangeError> {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .map(|dt| dt.and_utc())
        .filter(|dt| dt.timestamp() >= 0)
        .ok_or_else(|| DateRangeError::timestamp_out_of_range(date))
}
