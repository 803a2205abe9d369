// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake log streamer for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{LogStreamError, LogStreamer};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Recorded stream invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamCall {
    pub org: String,
    pub squid: String,
    pub version: String,
}

/// Fake streamer that delivers a fixed set of lines then ends
#[derive(Clone, Default)]
pub struct FakeLogStreamer {
    lines: Arc<Mutex<Vec<String>>>,
    fail_with: Arc<Mutex<Option<u16>>>,
    calls: Arc<Mutex<Vec<StreamCall>>>,
}

impl FakeLogStreamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fake = Self::new();
        *fake.lines.lock().unwrap_or_else(|e| e.into_inner()) =
            lines.into_iter().map(Into::into).collect();
        fake
    }

    /// Make the next streams fail with the given HTTP status after
    /// delivering the configured lines
    pub fn fail_with_status(&self, status: u16) {
        *self.fail_with.lock().unwrap_or_else(|e| e.into_inner()) = Some(status);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StreamCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl LogStreamer for FakeLogStreamer {
    async fn stream(
        &self,
        org: &str,
        squid: &str,
        version: &str,
        on_line: &mut (dyn FnMut(String) + Send),
    ) -> Result<(), LogStreamError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(StreamCall {
                org: org.to_string(),
                squid: squid.to_string(),
                version: version.to_string(),
            });

        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone();
        for line in lines {
            on_line(line);
        }

        match *self.fail_with.lock().unwrap_or_else(|e| e.into_inner()) {
            Some(status) => Err(LogStreamError::Status {
                status,
                message: "stream interrupted".to_string(),
            }),
            None => Ok(()),
        }
    }
}
