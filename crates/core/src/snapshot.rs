// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time view of a deployment pipeline

use crate::status::PipelineStatus;
use serde::{Deserialize, Serialize};

/// One fetched, immutable read of pipeline state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSnapshot {
    pub id: String,
    pub status: PipelineStatus,
    #[serde(default)]
    pub is_error_occurred: bool,
    /// Log lines accumulated by the remote so far
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl PipelineSnapshot {
    pub fn new(id: impl Into<String>, status: PipelineStatus) -> Self {
        Self {
            id: id.into(),
            status,
            is_error_occurred: false,
            logs: Vec::new(),
            comment: None,
        }
    }

    pub fn with_error(mut self) -> Self {
        self.is_error_occurred = true;
        self
    }

    pub fn with_logs<I, S>(mut self, logs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.logs = logs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
