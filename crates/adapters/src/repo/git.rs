// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Git repository adapter

use super::{RepoAdapter, RepoError};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Output;
use tokio::process::Command;

/// Git-based repository adapter
#[derive(Clone)]
pub struct GitAdapter {
    root: PathBuf,
}

impl GitAdapter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn run(&self, args: &[&str]) -> Result<Output, RepoError> {
        Ok(Command::new("git")
            .current_dir(&self.root)
            .args(args)
            .output()
            .await?)
    }

    /// Run git and return trimmed stdout, failing on a non-zero exit
    async fn git(&self, args: &[&str]) -> Result<String, RepoError> {
        let output = self.run(args).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RepoError::CommandFailed {
                cmd: format!("git {}", args.join(" ")),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for GitAdapter {
    fn default() -> Self {
        Self::new(".")
    }
}

#[async_trait]
impl RepoAdapter for GitAdapter {
    async fn remotes(&self) -> Result<Vec<String>, RepoError> {
        let stdout = self.git(&["remote"]).await?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    async fn remote_url(&self, remote: &str) -> Result<String, RepoError> {
        let output = self.run(&["remote", "get-url", remote]).await?;
        if !output.status.success() {
            return Err(RepoError::RemoteNotFound(remote.to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn current_branch(&self) -> Result<String, RepoError> {
        let branch = self.git(&["rev-parse", "--abbrev-ref", "HEAD"]).await?;
        if branch == "HEAD" {
            return Err(RepoError::DetachedHead);
        }
        Ok(branch)
    }

    async fn head_commit(&self) -> Result<String, RepoError> {
        self.git(&["rev-parse", "HEAD"]).await
    }

    async fn is_clean(&self) -> Result<bool, RepoError> {
        let stdout = self.git(&["status", "--porcelain"]).await?;
        Ok(stdout.is_empty())
    }

    async fn fetch(&self, remote: &str) -> Result<(), RepoError> {
        self.git(&["fetch", "--prune", remote]).await.map(|_| ())
    }

    async fn remote_head(&self, remote: &str, branch: &str) -> Result<Option<String>, RepoError> {
        let reference = format!("refs/remotes/{}/{}", remote, branch);
        let output = self
            .run(&["rev-parse", "--verify", "--quiet", &reference])
            .await?;

        if !output.status.success() {
            return Ok(None);
        }
        Ok(Some(
            String::from_utf8_lossy(&output.stdout).trim().to_string(),
        ))
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
