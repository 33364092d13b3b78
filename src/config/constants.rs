//! Explorer API constants
//!
//! Centralizes the endpoint, query vocabulary and environment variable names
//! used to talk to an Etherscan-compatible block explorer.

/// Default explorer endpoint (Etherscan, Ethereum mainnet)
pub const DEFAULT_ENDPOINT: &str = "https://api.etherscan.io/api";

/// Environment variable holding the explorer API key
pub const API_KEY_ENV: &str = "ETHERSCAN_API_KEY";

/// Environment variable overriding the explorer endpoint
pub const ENDPOINT_ENV: &str = "ETHERSCAN_API_URL";

/// Query vocabulary for the `getblocknobytime` action
pub mod query {
    pub const MODULE: &str = "module";
    pub const ACTION: &str = "action";
    pub const TIMESTAMP: &str = "timestamp";
    pub const CLOSEST: &str = "closest";
    pub const API_KEY: &str = "apikey";

    pub const MODULE_BLOCK: &str = "block";
    pub const ACTION_BLOCK_BY_TIME: &str = "getblocknobytime";
}

/// `status` value the explorer uses to signal success
pub const STATUS_OK: &str = "1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_parses() {
        let url = url::Url::parse(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("api.etherscan.io"));
        assert_eq!(url.path(), "/api");
    }
}
