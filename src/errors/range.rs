//! Error types for resolving date ranges to block ranges.

use super::ExplorerError;

/// Errors that can occur while resolving a date range to a block range.
///
/// Date validation happens before any network call. Lookup failures are
/// wrapped unchanged in [`DateRangeError::Explorer`].
///
/// # Examples
///
/// ```rust,ignore
/// use blockdates::{DateRangeError, ExplorerError};
///
/// match resolver.resolve_date_range_blocks("2020-01-10", "2020-01-10").await {
///     Ok(blocks) => println!("{} .. {}", blocks.start_block, blocks.end_block),
///     Err(DateRangeError::InvalidDate { input, .. }) => eprintln!("bad date {input}"),
///     Err(DateRangeError::Explorer(ExplorerError::Upstream { message, .. })) => {
///         eprintln!("explorer refused: {message}")
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DateRangeError {
    /// The input is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}' (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected input string
        input: String,
        /// The underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// A day boundary could not be represented as a UTC timestamp.
    #[error("Timestamp out of range for {date}")]
    TimestampOutOfRange {
        /// The date whose boundary overflowed
        date: String,
    },

    /// A block lookup failed. The inner error is passed through unchanged.
    #[error(transparent)]
    Explorer(#[from] ExplorerError),
}

impl DateRangeError {
    /// Create an `InvalidDate` error.
    pub fn invalid_date(input: impl Into<String>, source: chrono::ParseError) -> Self {
        DateRangeError::InvalidDate {
            input: input.into(),
            source,
        }
    }

    /// Create a `TimestampOutOfRange` error.
    pub fn timestamp_out_of_range(date: impl std::fmt::Display) -> Self {
        DateRangeError::TimestampOutOfRange {
            date: date.to_string(),
        }
    }
}
