// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sq-core: domain types for watching squid deployments
//!
//! This crate provides:
//! - The pipeline status model and its classification
//! - Display state transitions for progress indicators
//! - Debug dump composition
//! - `<name>@<version>` reference and env-file parsing
//! - A clock abstraction so polling can be tested without sleeping

pub mod clock;
pub mod config;
pub mod debug;
pub mod display;
pub mod env;
pub mod reference;
pub mod snapshot;
pub mod status;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{NotFoundPolicy, PollConfig};
pub use debug::DebugDump;
pub use display::{display_action, DisplayAction, DisplayState};
pub use env::{load_env_file, merge_env, parse_env_flag, parse_env_text, EnvError, EnvMap};
pub use reference::{ReferenceError, SquidRef};
pub use snapshot::PipelineSnapshot;
pub use status::{classify, PipelineStatus, Stage, Verdict};
