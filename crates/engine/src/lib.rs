// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Deployment watch engine: pipeline polling, log handoff and git source checks

mod error;
mod poller;
mod source;

pub use error::{FatalError, PollError, SourceError, SUPPORT_HINT};
pub use poller::{PipelinePoller, PollOutcome, PollRequest, PollerDeps};
pub use source::{resolve_git_source, GitSource, RemoteChooser};
