// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake deployment API for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ApiError, DeployApi};
use async_trait::async_trait;
use sq_core::PipelineSnapshot;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Recorded pipeline fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployCall {
    pub org: String,
    pub squid: String,
    pub version: String,
}

type Scripted = Result<Option<PipelineSnapshot>, ApiError>;

/// Fake deployment API that replays scripted responses in order.
///
/// Once the script is exhausted every fetch reports the pipeline as not found.
#[derive(Clone, Default)]
pub struct FakeDeployApi {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<Mutex<Vec<DeployCall>>>,
}

impl FakeDeployApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fake that returns each snapshot once, in order
    pub fn with_snapshots<I>(snapshots: I) -> Self
    where
        I: IntoIterator<Item = PipelineSnapshot>,
    {
        let fake = Self::new();
        for snapshot in snapshots {
            fake.push_snapshot(snapshot);
        }
        fake
    }

    pub fn push_snapshot(&self, snapshot: PipelineSnapshot) {
        self.push(Ok(Some(snapshot)));
    }

    pub fn push_not_found(&self) {
        self.push(Ok(None));
    }

    pub fn push_error(&self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(&self, response: Scripted) {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<DeployCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of scripted responses not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl DeployApi for FakeDeployApi {
    async fn pipeline(
        &self,
        org: &str,
        squid: &str,
        version: &str,
    ) -> Result<Option<PipelineSnapshot>, ApiError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(DeployCall {
                org: org.to_string(),
                squid: squid.to_string(),
                version: version.to_string(),
            });

        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or(Ok(None))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
