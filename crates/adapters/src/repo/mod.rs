// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository inspection adapters

mod git;

pub use git::GitAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRepoAdapter, RepoCall};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from repo operations
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("remote not found: {0}")]
    RemoteNotFound(String),
    #[error("HEAD is detached, check out a branch first")]
    DetachedHead,
    #[error("command failed: {cmd} - {stderr}")]
    CommandFailed { cmd: String, stderr: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter for the git operations needed to validate a deploy source
#[async_trait]
pub trait RepoAdapter: Clone + Send + Sync + 'static {
    /// Names of the configured remotes
    async fn remotes(&self) -> Result<Vec<String>, RepoError>;

    /// Fetch URL of a remote
    async fn remote_url(&self, remote: &str) -> Result<String, RepoError>;

    /// Name of the checked out branch
    async fn current_branch(&self) -> Result<String, RepoError>;

    /// Commit hash of local HEAD
    async fn head_commit(&self) -> Result<String, RepoError>;

    /// True when there are no staged, unstaged or untracked changes
    async fn is_clean(&self) -> Result<bool, RepoError>;

    /// Fetch every branch of a remote, pruning deleted ones. Fails only
    /// when the remote is unreachable.
    async fn fetch(&self, remote: &str) -> Result<(), RepoError>;

    /// Commit hash of the fetched remote branch, `None` if the remote has
    /// no such branch
    async fn remote_head(&self, remote: &str, branch: &str) -> Result<Option<String>, RepoError>;
}
