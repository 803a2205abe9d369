// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Every command failure is rendered as:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use sq_core::{EnvError, ReferenceError};
use sq_engine::{PollError, SourceError, SUPPORT_HINT};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct SqError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SqError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for SqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for SqError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures each command can report.
impl SqError {
    /// Malformed `<name>@<version>` argument
    pub fn invalid_reference(error: ReferenceError) -> Self {
        SqError::new(error.to_string())
            .with_suggestion("Pass the squid as <name>@<version>, e.g. my-squid@v1")
            .with_source(error)
    }

    pub fn invalid_env(error: EnvError) -> Self {
        let err = SqError::new(error.to_string());
        let err = match &error {
            EnvError::EmptyFlag(_) | EnvError::InvalidKey { .. } => err
                .with_suggestion("Use KEY=VALUE, e.g. --env RUST_LOG=info")
                .with_suggestion("Keys may contain letters, digits and '_' and cannot start with a digit"),
            EnvError::Io { .. } => err.with_suggestion("Check that the env file is readable"),
        };
        err.with_source(error)
    }

    pub fn missing_api_url() -> Self {
        SqError::new("No deployment API URL configured")
            .with_suggestion("Set SQ_API_URL in the environment")
            .with_suggestion("Or add api_url to the config file (see SQ_CONFIG)")
    }

    /// Poll failures. The poller has already printed any debug dump.
    pub fn poll(error: PollError) -> Self {
        match error {
            PollError::Fatal(fatal) => {
                let mut err = SqError::new(fatal.message.clone());
                if fatal.debug.is_some() {
                    err = err.with_context("Pipeline debug output is shown above");
                } else if !fatal.message.contains(SUPPORT_HINT) {
                    err = err.with_suggestion("Rerun without --quiet to see the pipeline debug output");
                }
                err.with_source(fatal)
            }
            PollError::Transport { attempts, .. } => SqError::new(error.to_string())
                .with_context(format!("Gave up after {} consecutive failures", attempts))
                .with_suggestion("Check your network connection and SQ_API_URL")
                .with_source(error),
            PollError::Stream(_) => SqError::new(error.to_string())
                .with_context("The squid is deployed; only log following failed")
                .with_suggestion("Run the watch again to reattach to the logs")
                .with_source(error),
            PollError::NotFound(ref squid) => {
                let hint = format!("Check that {} was deployed to this organization", squid);
                SqError::new(error.to_string())
                    .with_suggestion(hint)
                    .with_source(error)
            }
            PollError::Cancelled => SqError::new("Watch cancelled"),
        }
    }

    pub fn source_check(error: SourceError) -> Self {
        let err = SqError::new(error.to_string());
        let err = match &error {
            SourceError::NoRemotes => {
                err.with_suggestion("Add a remote: git remote add origin <url>")
            }
            SourceError::UnknownRemote(_) => {
                err.with_suggestion("List configured remotes: git remote -v")
            }
            SourceError::NoRemoteSelected => {
                err.with_suggestion("Pick a remote explicitly with --remote <name>")
            }
            SourceError::Unreachable { .. } => err
                .with_suggestion("Check that the remote URL is correct: git remote -v")
                .with_suggestion("Check your network connection and git credentials"),
            SourceError::DirtyWorkingTree => err
                .with_context("Only committed and pushed code can be deployed")
                .with_suggestion("Commit or stash your changes, then push them"),
            SourceError::BranchNotOnRemote { remote, branch } => err.with_suggestion(format!(
                "Push the branch: git push -u {} {}",
                remote, branch
            )),
            SourceError::CommitMismatch { .. } => err
                .with_suggestion("Push your local commits: git push")
                .with_suggestion("Or pull the remote commits: git pull"),
            SourceError::Repo(_) => err.with_suggestion("Run inside a git repository with a branch checked out"),
        };
        err.with_source(error)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
