// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O

pub mod deploy;
pub mod logs;
pub mod output;
pub mod repo;
pub mod traced;

#[cfg(test)]
mod test_http;

pub use deploy::{ApiError, DeployApi, HttpDeployApi};
pub use logs::{HttpLogStreamer, LineSplitter, LogStreamError, LogStreamer};
pub use output::{ConsoleOutput, OutputSink};
pub use repo::{GitAdapter, RepoAdapter, RepoError};
pub use traced::{TracedDeployApi, TracedLogStreamer, TracedRepoAdapter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use deploy::{DeployCall, FakeDeployApi};
#[cfg(any(test, feature = "test-support"))]
pub use logs::{FakeLogStreamer, StreamCall};
#[cfg(any(test, feature = "test-support"))]
pub use output::{FakeOutput, OutputCall};
#[cfg(any(test, feature = "test-support"))]
pub use repo::{FakeRepoAdapter, RepoCall};
