// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake repository adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{RepoAdapter, RepoError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded repo call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    Remotes,
    RemoteUrl { remote: String },
    CurrentBranch,
    HeadCommit,
    IsClean,
    Fetch { remote: String },
    RemoteHead { remote: String, branch: String },
}

#[derive(Default)]
struct FakeRepoState {
    remotes: Vec<(String, String)>,
    branch: Option<String>,
    head: String,
    dirty: bool,
    remote_heads: HashMap<(String, String), String>,
    unreachable: Vec<String>,
}

/// Fake repository adapter for testing.
///
/// Starts as a clean repo on `main` with no remotes.
#[derive(Clone)]
pub struct FakeRepoAdapter {
    state: Arc<Mutex<FakeRepoState>>,
    calls: Arc<Mutex<Vec<RepoCall>>>,
}

impl Default for FakeRepoAdapter {
    fn default() -> Self {
        let state = FakeRepoState {
            branch: Some("main".to_string()),
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FakeRepoAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        self.state().remotes.push((name.to_string(), url.to_string()));
    }

    pub fn set_head(&self, commit: &str) {
        self.state().head = commit.to_string();
    }

    pub fn set_remote_head(&self, remote: &str, branch: &str, commit: &str) {
        self.state()
            .remote_heads
            .insert((remote.to_string(), branch.to_string()), commit.to_string());
    }

    /// `None` detaches HEAD
    pub fn set_branch(&self, branch: Option<&str>) {
        self.state().branch = branch.map(String::from);
    }

    pub fn set_dirty(&self, dirty: bool) {
        self.state().dirty = dirty;
    }

    /// Make fetches from this remote fail
    pub fn set_unreachable(&self, remote: &str) {
        self.state().unreachable.push(remote.to_string());
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeRepoState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: RepoCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

#[async_trait]
impl RepoAdapter for FakeRepoAdapter {
    async fn remotes(&self) -> Result<Vec<String>, RepoError> {
        self.record(RepoCall::Remotes);
        Ok(self.state().remotes.iter().map(|(n, _)| n.clone()).collect())
    }

    async fn remote_url(&self, remote: &str) -> Result<String, RepoError> {
        self.record(RepoCall::RemoteUrl {
            remote: remote.to_string(),
        });
        self.state()
            .remotes
            .iter()
            .find(|(n, _)| n == remote)
            .map(|(_, url)| url.clone())
            .ok_or_else(|| RepoError::RemoteNotFound(remote.to_string()))
    }

    async fn current_branch(&self) -> Result<String, RepoError> {
        self.record(RepoCall::CurrentBranch);
        self.state().branch.clone().ok_or(RepoError::DetachedHead)
    }

    async fn head_commit(&self) -> Result<String, RepoError> {
        self.record(RepoCall::HeadCommit);
        Ok(self.state().head.clone())
    }

    async fn is_clean(&self) -> Result<bool, RepoError> {
        self.record(RepoCall::IsClean);
        Ok(!self.state().dirty)
    }

    async fn fetch(&self, remote: &str) -> Result<(), RepoError> {
        self.record(RepoCall::Fetch {
            remote: remote.to_string(),
        });
        if self.state().unreachable.iter().any(|r| r == remote) {
            return Err(RepoError::CommandFailed {
                cmd: format!("git fetch --prune {}", remote),
                stderr: "Could not read from remote repository.".to_string(),
            });
        }
        Ok(())
    }

    async fn remote_head(&self, remote: &str, branch: &str) -> Result<Option<String>, RepoError> {
        self.record(RepoCall::RemoteHead {
            remote: remote.to_string(),
            branch: branch.to_string(),
        });
        Ok(self
            .state()
            .remote_heads
            .get(&(remote.to_string(), branch.to_string()))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fake_repo_reports_configured_state() {
        let repo = FakeRepoAdapter::new();
        repo.add_remote("origin", "git@example.test:acme/squid.git");
        repo.set_head("abc123");
        repo.set_remote_head("origin", "main", "abc123");

        assert_eq!(repo.remotes().await.unwrap(), vec!["origin"]);
        assert_eq!(repo.current_branch().await.unwrap(), "main");
        assert!(repo.is_clean().await.unwrap());
        assert_eq!(
            repo.remote_head("origin", "main").await.unwrap().as_deref(),
            Some("abc123")
        );
        assert_eq!(repo.calls().len(), 4);
    }

    #[tokio::test]
    async fn fake_repo_detached_and_unreachable() {
        let repo = FakeRepoAdapter::new();
        repo.add_remote("origin", "https://example.test/squid");
        repo.set_branch(None);
        repo.set_unreachable("origin");

        assert!(matches!(
            repo.current_branch().await,
            Err(RepoError::DetachedHead)
        ));
        assert!(repo.fetch("origin").await.is_err());
    }
}
