// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live log streaming adapters

mod http;
mod lines;

pub use http::HttpLogStreamer;
pub use lines::LineSplitter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeLogStreamer, StreamCall};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from log streaming
#[derive(Debug, Error)]
pub enum LogStreamError {
    #[error("log stream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("log stream returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Adapter for following a squid's logs.
///
/// `stream` delivers every line exactly once, in order, and returns when the
/// remote closes the stream.
#[async_trait]
pub trait LogStreamer: Clone + Send + Sync + 'static {
    async fn stream(
        &self,
        org: &str,
        squid: &str,
        version: &str,
        on_line: &mut (dyn FnMut(String) + Send),
    ) -> Result<(), LogStreamError>;
}
