//! Error types for block-by-time lookups against the explorer API.

use super::TransportError;

/// Errors returned by a single block-by-time lookup.
///
/// There are exactly two kinds: the explorer explicitly reported failure
/// ([`ExplorerError::Upstream`]), or the answer never arrived in a usable form
/// ([`ExplorerError::Transport`]). Neither is retried.
///
/// # Examples
///
/// ```rust,ignore
/// use blockdates::{Closest, EtherscanClient, ExplorerError};
///
/// match client.resolve_block(ts, Closest::After).await {
///     Ok(block) => println!("block {block}"),
///     Err(ExplorerError::Upstream { message, .. }) => eprintln!("explorer said: {message}"),
///     Err(ExplorerError::Transport(e)) => eprintln!("request failed: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// The explorer answered with a `status` other than `"1"`.
    ///
    /// Displays as `Explorer API error: NOTOK (Invalid API Key)` when the
    /// explorer puts the detail in `result`.
    #[error("Explorer API error: {message}{}", result_suffix(.result))]
    Upstream {
        /// Human-readable message supplied by the explorer
        message: String,
        /// The `result` text accompanying the failure, when the explorer sends one
        result: Option<String>,
    },

    /// The request could not be completed or its response could not be parsed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

fn result_suffix(result: &Option<String>) -> String {
    result
        .as_deref()
        .map(|detail| format!(" ({detail})"))
        .unwrap_or_default()
}

impl ExplorerError {
    /// Create an `Upstream` error from the explorer's message.
    pub fn upstream(message: impl Into<String>) -> Self {
        ExplorerError::Upstream {
            message: message.into(),
            result: None,
        }
    }

    /// Create an `Upstream` error carrying both message and result detail.
    pub fn upstream_with_result(message: impl Into<String>, result: impl Into<String>) -> Self {
        ExplorerError::Upstream {
            message: message.into(),
            result: Some(result.into()),
        }
    }

    /// Returns the explorer-supplied message for upstream failures.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            ExplorerError::Upstream { message, .. } => Some(message),
            ExplorerError::Transport(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ExplorerError::Transport(_))
    }
}
