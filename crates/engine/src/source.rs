// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Git source validation.
//!
//! A deploy is only built from commits the remote already has, so the
//! working tree must be clean and the local branch must match the fetched
//! remote branch exactly.

use crate::error::SourceError;
use sq_adapters::RepoAdapter;
use std::fmt;

/// Picks one remote when several are configured
pub trait RemoteChooser {
    /// `None` when no remote was picked
    fn choose(&self, remotes: &[String]) -> Option<String>;
}

impl<F> RemoteChooser for F
where
    F: Fn(&[String]) -> Option<String>,
{
    fn choose(&self, remotes: &[String]) -> Option<String> {
        self(remotes)
    }
}

/// A validated commit on a remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSource {
    pub remote: String,
    pub url: String,
    pub branch: String,
    pub commit: String,
}

impl fmt::Display for GitSource {
    /// `<url>.git#<commit>`, whether or not the remote URL ends in `.git`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url = self.url.trim_end_matches('/');
        let url = url.strip_suffix(".git").unwrap_or(url);
        write!(f, "{}.git#{}", url, self.commit)
    }
}

/// Resolve the deploy source for the checked out branch.
///
/// `remote_hint` skips remote selection; otherwise a single remote is used
/// directly and several are handed to `chooser`.
pub async fn resolve_git_source<R, C>(
    repo: &R,
    chooser: &C,
    remote_hint: Option<&str>,
) -> Result<GitSource, SourceError>
where
    R: RepoAdapter,
    C: RemoteChooser + ?Sized,
{
    let remotes = repo.remotes().await?;
    let remote = pick_remote(&remotes, chooser, remote_hint)?;
    let url = repo.remote_url(&remote).await?;
    let branch = repo.current_branch().await?;

    if let Err(source) = repo.fetch(&remote).await {
        return Err(SourceError::Unreachable { remote, source });
    }

    if !repo.is_clean().await? {
        return Err(SourceError::DirtyWorkingTree);
    }

    let local = repo.head_commit().await?;
    let Some(remote_commit) = repo.remote_head(&remote, &branch).await? else {
        return Err(SourceError::BranchNotOnRemote { remote, branch });
    };
    if local != remote_commit {
        return Err(SourceError::CommitMismatch {
            branch,
            local,
            remote: remote_commit,
        });
    }

    tracing::info!(%remote, %branch, commit = %local, "validated git source");

    Ok(GitSource {
        remote,
        url,
        branch,
        commit: local,
    })
}

fn pick_remote<C>(
    remotes: &[String],
    chooser: &C,
    remote_hint: Option<&str>,
) -> Result<String, SourceError>
where
    C: RemoteChooser + ?Sized,
{
    if remotes.is_empty() {
        return Err(SourceError::NoRemotes);
    }

    let picked = match (remote_hint, remotes) {
        (Some(hint), _) => hint.to_string(),
        (None, [only]) => only.clone(),
        (None, _) => chooser
            .choose(remotes)
            .ok_or(SourceError::NoRemoteSelected)?,
    };

    if remotes.contains(&picked) {
        Ok(picked)
    } else {
        Err(SourceError::UnknownRemote(picked))
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
