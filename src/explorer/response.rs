// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decoding of explorer API responses
//!
//! The explorer wraps every answer in `{status, message, result}`. A `status`
//! of `"1"` means `result` holds the block number as a decimal string; any
//! other status means `message` (and often `result`) explains the failure.

use alloy_primitives::BlockNumber;
use serde::Deserialize;
use serde_json::Value;

use crate::config::constants::STATUS_OK;
use crate::errors::{ExplorerError, TransportError};

/// Raw explorer response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Value,
}

impl ExplorerResponse {
    /// Decodes a response body
    pub fn from_slice(body: &[u8]) -> Result<Self, TransportError> {
        serde_json::from_slice(body).map_err(TransportError::invalid_json)
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Interprets the envelope as a block-by-time answer
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::Upstream`] when `status` is not `"1"`
    /// - [`ExplorerError::Transport`] when a successful `result` is not a
    ///   non-negative integer
    pub fn into_block_number(self) -> Result<BlockNumber, ExplorerError> {
        if !self.is_ok() {
            return Err(match result_text(&self.result) {
                Some(detail) if detail != self.message => {
                    ExplorerError::upstream_with_result(self.message, detail)
                }
                _ => ExplorerError::upstream(self.message),
            });
        }

        let block = match &self.result {
            Value::String(s) => s.trim().parse::<BlockNumber>().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        };

        block.ok_or_else(|| {
            TransportError::decode(format!("result {} is not a block number", self.result)).into()
        })
    }
}

fn result_text(result: &Value) -> Option<String> {
    match result {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

/// Decodes a response body straight to a block number
pub fn parse_block_number(body: &[u8]) -> Result<BlockNumber, ExplorerError> {
    ExplorerResponse::from_slice(body)?.into_block_number()
}
