// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline status as reported by the deployment API.
//!
//! The API sends statuses as bare strings. Known values map to dedicated
//! variants; anything else is kept verbatim in [`PipelineStatus::Unknown`]
//! so the unexpected-status path is an ordinary match arm.

use crate::snapshot::PipelineSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote pipeline status, in expected progression order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PipelineStatus {
    Created,
    ImageBuilding,
    ImagePushing,
    Deploying,
    Ok,
    Unknown(String),
}

impl PipelineStatus {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            PipelineStatus::Created => "CREATED",
            PipelineStatus::ImageBuilding => "IMAGE_BUILDING",
            PipelineStatus::ImagePushing => "IMAGE_PUSHING",
            PipelineStatus::Deploying => "DEPLOYING",
            PipelineStatus::Ok => "OK",
            PipelineStatus::Unknown(raw) => raw,
        }
    }

    /// Progress label shown while the pipeline sits in this status.
    ///
    /// Only the in-progress statuses have one. `Ok` is announced by the
    /// success path and unknown statuses go straight to the fatal path.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            PipelineStatus::Created => Some("Preparing"),
            PipelineStatus::ImageBuilding => Some("Building"),
            PipelineStatus::ImagePushing => Some("Publishing"),
            PipelineStatus::Deploying => Some("Deploying"),
            PipelineStatus::Ok | PipelineStatus::Unknown(_) => None,
        }
    }

    /// Stage a failure in this status is attributed to
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineStatus::Created | PipelineStatus::ImageBuilding => Some(Stage::Build),
            PipelineStatus::ImagePushing => Some(Stage::Publish),
            PipelineStatus::Deploying => Some(Stage::Deploy),
            PipelineStatus::Ok | PipelineStatus::Unknown(_) => None,
        }
    }
}

impl From<&str> for PipelineStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "CREATED" => PipelineStatus::Created,
            "IMAGE_BUILDING" => PipelineStatus::ImageBuilding,
            "IMAGE_PUSHING" => PipelineStatus::ImagePushing,
            "DEPLOYING" => PipelineStatus::Deploying,
            "OK" => PipelineStatus::Ok,
            other => PipelineStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for PipelineStatus {
    fn from(raw: String) -> Self {
        match PipelineStatus::from(raw.as_str()) {
            PipelineStatus::Unknown(_) => PipelineStatus::Unknown(raw),
            known => known,
        }
    }
}

impl From<PipelineStatus> for String {
    fn from(status: PipelineStatus) -> Self {
        match status {
            PipelineStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline stage a failure is reported against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Build,
    Publish,
    Deploy,
}

impl Stage {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Stage::Build => "An error occurred while building the squid",
            Stage::Publish => "An error occurred while publishing the squid",
            Stage::Deploy => "An error occurred while deploying the squid",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Build => write!(f, "build"),
            Stage::Publish => write!(f, "publish"),
            Stage::Deploy => write!(f, "deploy"),
        }
    }
}

/// What a single snapshot means for the poll loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Still in progress, poll again after the interval
    Continue,
    /// The remote flagged an error during this stage
    Failed(Stage),
    /// Deployment is healthy; hand off to log streaming
    Ready,
    /// Status the client does not understand
    Unexpected(String),
}

/// Classify a snapshot into exactly one verdict.
pub fn classify(snapshot: &PipelineSnapshot) -> Verdict {
    match &snapshot.status {
        PipelineStatus::Ok => Verdict::Ready,
        PipelineStatus::Unknown(raw) => Verdict::Unexpected(raw.clone()),
        in_progress => match in_progress.stage() {
            Some(stage) if snapshot.is_error_occurred => Verdict::Failed(stage),
            _ => Verdict::Continue,
        },
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
