//! Error types for explorer configuration.

/// Errors that can occur while building an [`ExplorerConfig`](crate::ExplorerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No API key, or an empty one, was supplied.
    #[error("Missing explorer API key (set {env_var} or pass --api-key)")]
    MissingApiKey {
        /// Environment variable consulted for the key
        env_var: &'static str,
    },

    /// The endpoint is not a valid absolute HTTP(S) URL.
    #[error("Invalid explorer endpoint '{endpoint}': {details}")]
    InvalidEndpoint {
        /// The rejected endpoint
        endpoint: String,
        /// Why it was rejected
        details: String,
    },
}

impl ConfigError {
    /// Create a `MissingApiKey` error.
    pub fn missing_api_key() -> Self {
        ConfigError::MissingApiKey {
            env_var: crate::config::constants::API_KEY_ENV,
        }
    }

    /// Create an `InvalidEndpoint` error.
    pub fn invalid_endpoint(endpoint: impl Into<String>, details: impl Into<String>) -> Self {
        ConfigError::InvalidEndpoint {
            endpoint: endpoint.into(),
            details: details.into(),
        }
    }
}
