//! Configuration for explorer access
//!
//! The explorer endpoint and credential are explicit configuration passed into
//! [`EtherscanClient::new`](crate::EtherscanClient::new), never process-wide
//! constants.
//!
//! # Example: Using the default endpoint
//!
//! ```rust
//! use blockdates::ExplorerConfig;
//!
//! let config = ExplorerConfig::new("YourApiKeyToken");
//! assert_eq!(config.endpoint.as_str(), "https://api.etherscan.io/api");
//! ```
//!
//! # Example: Custom endpoint
//!
//! ```rust
//! use blockdates::ExplorerConfigBuilder;
//!
//! let config = ExplorerConfigBuilder::new()
//!     .endpoint("https://api-sepolia.etherscan.io/api")
//!     .api_key("YourApiKeyToken")
//!     .build()
//!     .unwrap();
//! assert_eq!(config.endpoint.host_str(), Some("api-sepolia.etherscan.io"));
//! ```

use url::Url;

use crate::errors::ConfigError;
use crate::types::api_key::ApiKey;

pub mod constants;

/// Configuration for an Etherscan-compatible explorer
///
/// No timeout or retry settings exist: a request either completes or fails once.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Explorer API endpoint the `getblocknobytime` query is sent to
    /// Default: `https://api.etherscan.io/api`
    pub endpoint: Url,

    /// Credential sent as the `apikey` query parameter
    pub api_key: ApiKey,
}

impl ExplorerConfig {
    /// Create config for the default endpoint with the given credential
    ///
    /// The key is not validated here; use [`ExplorerConfigBuilder`] to reject
    /// empty keys.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: api_key.into(),
        }
    }

    /// Load config from `ETHERSCAN_API_KEY` and optional `ETHERSCAN_API_URL`
    ///
    /// Callers that want `.env` support should run `dotenvy::dotenv()` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load config through an arbitrary variable lookup
    ///
    /// Same rules as [`ExplorerConfig::from_env`]: the key is required, the
    /// endpoint falls back to the default when absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ExplorerConfigBuilder::new();
        if let Some(key) = lookup(constants::API_KEY_ENV) {
            builder = builder.api_key(key);
        }
        if let Some(endpoint) = lookup(constants::ENDPOINT_ENV) {
            builder = builder.endpoint(endpoint);
        }
        builder.build()
    }
}

fn default_endpoint() -> Url {
    Url::parse(constants::DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL")
}

/// Builder for [`ExplorerConfig`]
///
/// Validates that an API key is present and that the endpoint is an absolute
/// `http`/`https` URL.
#[derive(Debug, Default)]
pub struct ExplorerConfigBuilder {
    endpoint: Option<String>,
    api_key: Option<ApiKey>,
}

impl ExplorerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explorer endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the explorer credential
    pub fn api_key(mut self, api_key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingApiKey`] if no key was set or it is blank
    /// - [`ConfigError::InvalidEndpoint`] if the endpoint does not parse or is
    ///   not `http`/`https`
    pub fn build(self) -> Result<ExplorerConfig, ConfigError> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(ConfigError::missing_api_key)?;

        let endpoint = match self.endpoint {
            Some(raw) => parse_endpoint(&raw)?,
            None => default_endpoint(),
        };

        Ok(ExplorerConfig { endpoint, api_key })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::invalid_endpoint(raw, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::invalid_endpoint(
            raw,
            format!("unsupported scheme '{other}'"),
        )),
    }
}
