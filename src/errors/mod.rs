//! Error types for the blockdates library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`ExplorerError`],
//!   [`DateRangeError`], [`ConfigError`])
//! - **Unified error type** ([`BlockDatesError`]) for callers that only need to
//!   report a failure, such as the command-line driver
//!
//! # Architecture
//!
//! - [`TransportError`] - the request or its response failed below the API level
//! - [`ExplorerError`] - a single block lookup failed (upstream refusal or transport)
//! - [`DateRangeError`] - a date range could not be resolved (bad date or failed lookup)
//! - [`ConfigError`] - the explorer configuration is incomplete or invalid
//!
//! # Examples
//!
//! ```rust,ignore
//! use blockdates::{BlockDatesError, DateRangeResolver, EtherscanClient, ExplorerConfig};
//!
//! async fn example() -> Result<(), BlockDatesError> {
//!     let config = ExplorerConfig::from_env()?;
//!     let resolver = DateRangeResolver::new(EtherscanClient::new(config));
//!     let blocks = resolver.resolve_date_range_blocks("2020-01-10", "2020-01-10").await?;
//!     // Errors automatically convert to BlockDatesError via From implementations
//!     Ok(())
//! }
//! ```

mod config;
mod explorer;
mod range;
mod transport;

pub use config::ConfigError;
pub use explorer::ExplorerError;
pub use range::DateRangeError;
pub use transport::TransportError;

/// Unified error type for all blockdates operations.
#[derive(Debug, thiserror::Error)]
pub enum BlockDatesError {
    /// Error from configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from resolving a date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// Error from a single block lookup.
    #[error(transparent)]
    Explorer(#[from] ExplorerError),

    /// Error writing the result.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
