// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deployment status API adapters

mod http;

pub use http::HttpDeployApi;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DeployCall, FakeDeployApi};

use async_trait::async_trait;
use sq_core::PipelineSnapshot;
use thiserror::Error;

/// Errors from the deployment API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("api returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Adapter for reading remote pipeline state.
///
/// Every call is a side-effect-free read.
#[async_trait]
pub trait DeployApi: Clone + Send + Sync + 'static {
    /// Fetch the current pipeline snapshot. `Ok(None)` when the remote no
    /// longer reports a pipeline for this squid version.
    async fn pipeline(
        &self,
        org: &str,
        squid: &str,
        version: &str,
    ) -> Result<Option<PipelineSnapshot>, ApiError>;
}
