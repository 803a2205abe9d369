// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::deploy::{ApiError, DeployApi};
use crate::logs::{LogStreamError, LogStreamer};
use crate::repo::{RepoAdapter, RepoError};
use async_trait::async_trait;
use sq_core::PipelineSnapshot;
use tracing::Instrument;

/// Wrapper that adds tracing to any DeployApi
#[derive(Clone)]
pub struct TracedDeployApi<A> {
    inner: A,
}

impl<A> TracedDeployApi<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<A: DeployApi> DeployApi for TracedDeployApi<A> {
    async fn pipeline(
        &self,
        org: &str,
        squid: &str,
        version: &str,
    ) -> Result<Option<PipelineSnapshot>, ApiError> {
        let span = tracing::debug_span!("deploy.pipeline", org, squid, version);

        async {
            let start = std::time::Instant::now();
            let result = self.inner.pipeline(org, squid, version).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(Some(snapshot)) => tracing::debug!(
                    pipeline_id = %snapshot.id,
                    status = %snapshot.status,
                    is_error_occurred = snapshot.is_error_occurred,
                    log_lines = snapshot.logs.len(),
                    elapsed_ms,
                    "fetched"
                ),
                Ok(None) => tracing::info!(elapsed_ms, "pipeline not found"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "fetch failed"),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any LogStreamer
#[derive(Clone)]
pub struct TracedLogStreamer<L> {
    inner: L,
}

impl<L> TracedLogStreamer<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<L: LogStreamer> LogStreamer for TracedLogStreamer<L> {
    async fn stream(
        &self,
        org: &str,
        squid: &str,
        version: &str,
        on_line: &mut (dyn FnMut(String) + Send),
    ) -> Result<(), LogStreamError> {
        let span = tracing::info_span!("logs.stream", org, squid, version);

        async {
            tracing::info!("following logs");

            let start = std::time::Instant::now();
            let mut lines = 0u64;
            let result = self
                .inner
                .stream(org, squid, version, &mut |line: String| {
                    lines += 1;
                    on_line(line);
                })
                .await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::info!(lines, elapsed_ms, "stream ended"),
                Err(e) => tracing::error!(lines, elapsed_ms, error = %e, "stream failed"),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any RepoAdapter
#[derive(Clone)]
pub struct TracedRepoAdapter<R> {
    inner: R,
}

impl<R> TracedRepoAdapter<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<R: RepoAdapter> RepoAdapter for TracedRepoAdapter<R> {
    async fn remotes(&self) -> Result<Vec<String>, RepoError> {
        let result = self.inner.remotes().await;
        tracing::trace!(count = result.as_ref().map(|v| v.len()).ok(), "listed remotes");
        result
    }

    async fn remote_url(&self, remote: &str) -> Result<String, RepoError> {
        let result = self.inner.remote_url(remote).await;
        match &result {
            Ok(url) => tracing::debug!(remote, url, "resolved remote"),
            Err(e) => tracing::warn!(remote, error = %e, "remote lookup failed"),
        }
        result
    }

    async fn current_branch(&self) -> Result<String, RepoError> {
        let result = self.inner.current_branch().await;
        tracing::trace!(branch = ?result.as_ref().ok(), "current branch");
        result
    }

    async fn head_commit(&self) -> Result<String, RepoError> {
        let result = self.inner.head_commit().await;
        tracing::trace!(head = ?result.as_ref().ok(), "head commit");
        result
    }

    async fn is_clean(&self) -> Result<bool, RepoError> {
        let result = self.inner.is_clean().await;
        tracing::trace!(clean = ?result.as_ref().ok(), "checked status");
        result
    }

    async fn fetch(&self, remote: &str) -> Result<(), RepoError> {
        let span = tracing::info_span!("repo.fetch", remote);

        async {
            let start = std::time::Instant::now();
            let result = self.inner.fetch(remote).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "fetched"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "fetch failed"),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn remote_head(&self, remote: &str, branch: &str) -> Result<Option<String>, RepoError> {
        let result = self.inner.remote_head(remote, branch).await;
        tracing::debug!(remote, branch, head = ?result.as_ref().ok(), "remote head");
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
