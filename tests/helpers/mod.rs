// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for blockdates integration tests
//!
//! Provides mock block sources and a minimal local HTTP explorer so tests run
//! without network access or an API key.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blockdates::{BlockNumber, BlockTimeSource, Closest, ExplorerError, UnixTimestamp};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Scripted BlockTimeSource
///
/// Returns queued answers in order and records every lookup it receives.
/// Panics if asked for more lookups than were scripted.
///
/// # Example
///
/// ```rust,ignore
/// let mock = Arc::new(
///     MockBlockSource::new()
///         .with_block(9_000_000)
///         .with_error(ExplorerError::upstream("No blocks found")),
/// );
/// let resolver = DateRangeResolver::new(mock.clone());
/// ```
#[derive(Default)]
pub struct MockBlockSource {
    answers: Mutex<VecDeque<Result<BlockNumber, ExplorerError>>>,
    calls: Mutex<Vec<(UnixTimestamp, Closest)>>,
}

impl MockBlockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful lookup
    pub fn with_block(self, block: BlockNumber) -> Self {
        self.answers.lock().unwrap().push_back(Ok(block));
        self
    }

    /// Queue a failed lookup
    pub fn with_error(self, error: ExplorerError) -> Self {
        self.answers.lock().unwrap().push_back(Err(error));
        self
    }

    /// Lookups received so far, in order
    pub fn calls(&self) -> Vec<(UnixTimestamp, Closest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlockTimeSource for MockBlockSource {
    async fn block_number_by_time(
        &self,
        timestamp: UnixTimestamp,
        closest: Closest,
    ) -> Result<BlockNumber, ExplorerError> {
        self.calls.lock().unwrap().push((timestamp, closest));
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected lookup at {timestamp} ({closest})"))
    }
}

/// Deterministic chain with a block every `block_time` seconds from `genesis_ts`
///
/// `After` rounds up to the next block, `Before` rounds down, matching the
/// explorer's closest-after / closest-before semantics.
pub struct LinearChainSource {
    pub genesis_ts: i64,
    pub block_time: i64,
}

#[async_trait]
impl BlockTimeSource for LinearChainSource {
    async fn block_number_by_time(
        &self,
        timestamp: UnixTimestamp,
        closest: Closest,
    ) -> Result<BlockNumber, ExplorerError> {
        let offset = timestamp.as_i64() - self.genesis_ts;
        if offset < 0 {
            return Err(ExplorerError::upstream("No closest block found"));
        }
        let block = match closest {
            Closest::Before => offset / self.block_time,
            Closest::After => (offset + self.block_time - 1) / self.block_time,
        };
        Ok(block as BlockNumber)
    }
}

/// Canned HTTP answer served by [`MockExplorer`]
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Local HTTP server answering each connection with the next canned response
///
/// Records the request target (`/api?module=...`) of every request it serves.
pub struct MockExplorer {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockExplorer {
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        tokio::spawn(async move {
            for canned in responses {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };

                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    let n = socket.read(&mut chunk).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    buf.extend_from_slice(&chunk[..n]);
                    if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                let head = String::from_utf8_lossy(&buf);
                let target = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or_default()
                    .to_string();
                recorded.lock().unwrap().push(target);

                let reason = if canned.status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    canned.status,
                    canned.body.len(),
                    canned.body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            endpoint: format!("http://{addr}/api"),
            requests,
        }
    }

    /// Request targets served so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Query parameters of the `index`-th request
    pub fn query_of(&self, index: usize) -> Vec<(String, String)> {
        let target = &self.requests()[index];
        let url = url::Url::parse(&format!("http://localhost{target}")).unwrap();
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

/// Explorer success body for a block number
pub fn block_body(block: BlockNumber) -> String {
    format!(r#"{{"status":"1","message":"OK","result":"{block}"}}"#)
}

/// Explorer failure body
pub fn error_body(message: &str) -> String {
    format!(r#"{{"status":"0","message":"{message}","result":""}}"#)
}
