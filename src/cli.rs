// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line driver: argument parsing, resolution and reporting.

use clap::{Parser, ValueEnum};

use crate::blocks::{DateRangeBlocks, DateRangeResolver};
use crate::config::constants::{API_KEY_ENV, DEFAULT_ENDPOINT, ENDPOINT_ENV};
use crate::config::{ExplorerConfig, ExplorerConfigBuilder};
use crate::errors::{BlockDatesError, ConfigError};
use crate::explorer::EtherscanClient;

/// Resolve a UTC date range to the Ethereum blocks it spans
#[derive(Debug, Clone, Parser)]
#[command(name = "blockdates", version, about)]
pub struct Cli {
    /// First day of the range (UTC)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start_date: String,

    /// Last day of the range (UTC), defaults to the start date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end_date: Option<String>,

    /// Explorer API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Explorer API endpoint
    #[arg(long, env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT)]
    pub api_url: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// End date as given, or the start date for a single-day range
    pub fn end_date(&self) -> &str {
        self.end_date.as_deref().unwrap_or(&self.start_date)
    }

    pub fn explorer_config(&self) -> Result<ExplorerConfig, ConfigError> {
        let mut builder = ExplorerConfigBuilder::new().endpoint(self.api_url.clone());
        if let Some(key) = &self.api_key {
            builder = builder.api_key(key.as_str());
        }
        builder.build()
    }

    /// Renders a resolved range in the requested format
    ///
    /// Text output labels the blocks with the dates as typed on the command line.
    pub fn render(&self, blocks: &DateRangeBlocks) -> Result<String, BlockDatesError> {
        match self.format {
            OutputFormat::Text => Ok(format!(
                "Starting block for {}: {}\nEnding   block for {}: {}",
                self.start_date,
                blocks.start_block,
                self.end_date(),
                blocks.end_block
            )),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(blocks)?),
        }
    }
}

/// Resolves the requested range and prints it to stdout
pub async fn run(cli: Cli) -> Result<(), BlockDatesError> {
    let config = cli.explorer_config()?;
    let resolver = DateRangeResolver::new(EtherscanClient::new(config));

    let blocks = resolver
        .resolve_date_range_blocks(&cli.start_date, cli.end_date())
        .await?;

    println!("{}", cli.render(&blocks)?);
    Ok(())
}
