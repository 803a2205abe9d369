// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine

use sq_adapters::{ApiError, LogStreamError, RepoError};
use sq_core::Stage;
use thiserror::Error;

/// Pointer shown with errors the user cannot fix themselves
pub const SUPPORT_HINT: &str =
    "Please contact support and include the debug output above (rerun without --quiet to see it)";

/// Unrecoverable pipeline failure. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FatalError {
    pub message: String,
    /// Debug dump for the snapshot that caused the failure, when verbose
    pub debug: Option<String>,
}

impl FatalError {
    pub fn new(message: impl Into<String>, debug: Option<String>) -> Self {
        Self {
            message: message.into(),
            debug,
        }
    }

    pub fn stage_failed(stage: Stage, debug: Option<String>) -> Self {
        Self::new(stage.failure_message(), debug)
    }

    pub fn unexpected(debug: Option<String>) -> Self {
        Self::new(
            format!("An unexpected error occurred. {}", SUPPORT_HINT),
            debug,
        )
    }
}

/// Errors that end a poll run
#[derive(Debug, Error)]
pub enum PollError {
    #[error(transparent)]
    Fatal(#[from] FatalError),
    #[error("failed to fetch pipeline status after {attempts} attempts: {source}")]
    Transport {
        attempts: u32,
        #[source]
        source: ApiError,
    },
    #[error("log streaming failed: {0}")]
    Stream(#[from] LogStreamError),
    #[error("no deployment pipeline found for {0}")]
    NotFound(String),
    #[error("cancelled")]
    Cancelled,
}

/// Errors from validating the git source of a deployment
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no git remotes configured")]
    NoRemotes,
    #[error("remote '{0}' is not configured")]
    UnknownRemote(String),
    #[error("no remote selected")]
    NoRemoteSelected,
    #[error("remote '{remote}' is not reachable: {source}")]
    Unreachable {
        remote: String,
        #[source]
        source: RepoError,
    },
    #[error("there are uncommitted or unstaged changes")]
    DirtyWorkingTree,
    #[error("branch '{branch}' does not exist on remote '{remote}'")]
    BranchNotOnRemote { remote: String, branch: String },
    #[error("local '{branch}' is at {local} but the remote is at {remote}, push or pull first")]
    CommitMismatch {
        branch: String,
        local: String,
        remote: String,
    },
    #[error(transparent)]
    Repo(#[from] RepoError),
}
