// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for UTC day boundaries
//!
//! These tests use proptest to validate boundary invariants across the whole
//! supported calendar range.

use blockdates::{day_boundaries, parse_date};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

const SECONDS_PER_DAY: i64 = 86_400;

// Helper to generate arbitrary dates between 1970-01-01 and 2199-12-31
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    (0i64..84_000).prop_map(move |days| epoch + chrono::TimeDelta::days(days))
}

proptest! {
    /// Property: a single-day range spans exactly one day minus one second
    #[test]
    fn prop_single_day_spans_86399_seconds(date in arb_date()) {
        let bounds = day_boundaries(date, date).unwrap();
        prop_assert_eq!(
            bounds.end_ts().as_i64() - bounds.start_ts().as_i64(),
            SECONDS_PER_DAY - 1
        );
    }

    /// Property: the start boundary is always UTC midnight
    #[test]
    fn prop_start_is_utc_midnight(date in arb_date()) {
        let bounds = day_boundaries(date, date).unwrap();
        prop_assert_eq!(bounds.start_ts().as_i64() % SECONDS_PER_DAY, 0);
        prop_assert_eq!(bounds.start.date_naive(), date);
    }

    /// Property: a day's end is one second before the next day's start
    #[test]
    fn prop_days_are_contiguous(date in arb_date()) {
        let next = date.succ_opt().unwrap();
        let today = day_boundaries(date, date).unwrap();
        let tomorrow = day_boundaries(next, next).unwrap();
        prop_assert_eq!(today.end_ts().as_i64(), tomorrow.start_ts().as_i64() - 1);
    }

    /// Property: zero-padded and unpadded spellings parse to the same date
    #[test]
    fn prop_padding_is_irrelevant(date in arb_date()) {
        let padded = date.format("%Y-%m-%d").to_string();
        let unpadded = format!("{}-{}-{}", date.year(), date.month(), date.day());
        prop_assert_eq!(parse_date(&padded).unwrap(), date);
        prop_assert_eq!(parse_date(&unpadded).unwrap(), date);
    }
}
