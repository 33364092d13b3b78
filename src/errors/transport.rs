//! Transport-level error types for explorer API requests.
//!
//! These cover everything that prevents a well-formed explorer answer from
//! reaching the caller: connection failures, non-2xx HTTP statuses and bodies
//! that do not match the expected response schema.

/// Errors that occur before the explorer's own `status` flag can be inspected.
///
/// # Examples
///
/// ```rust
/// use blockdates::TransportError;
///
/// let error = TransportError::decode("expected value at line 1 column 1");
/// assert!(error.to_string().contains("Malformed explorer response"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP request could not be completed.
    ///
    /// Covers DNS failures, refused connections, TLS errors and bodies that
    /// could not be read.
    #[error("Request to {endpoint} failed")]
    Request {
        /// Endpoint the request was sent to (without query parameters)
        endpoint: String,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The explorer answered with a non-2xx HTTP status.
    #[error("Explorer returned HTTP {status}")]
    HttpStatus {
        /// The HTTP status code
        status: u16,
    },

    /// The body was not the expected `{status, message, result}` JSON object,
    /// or a successful `result` was not a block number.
    #[error("Malformed explorer response: {details}")]
    Decode {
        /// Description of what could not be decoded
        details: String,
        /// The underlying deserialization error, if any
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl TransportError {
    /// Create a `Request` error from an HTTP client error.
    pub fn request(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        TransportError::Request {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create an `HttpStatus` error.
    pub fn http_status(status: u16) -> Self {
        TransportError::HttpStatus { status }
    }

    /// Create a `Decode` error without an underlying source.
    pub fn decode(details: impl Into<String>) -> Self {
        TransportError::Decode {
            details: details.into(),
            source: None,
        }
    }

    /// Create a `Decode` error from a JSON deserialization failure.
    pub fn invalid_json(source: serde_json::Error) -> Self {
        TransportError::Decode {
            details: source.to_string(),
            source: Some(source),
        }
    }
}
