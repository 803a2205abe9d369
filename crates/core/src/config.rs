// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Poll loop configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time between two status fetches
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Default number of consecutive transport failures tolerated
pub const DEFAULT_TRANSPORT_RETRIES: u32 = 3;

/// What to do when the API no longer knows the pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundPolicy {
    /// Nothing left to report; end the loop successfully
    #[default]
    Succeed,
    /// Report the disappearance as a failure
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    pub max_transport_retries: u32,
    pub on_not_found: NotFoundPolicy,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_transport_retries: DEFAULT_TRANSPORT_RETRIES,
            on_not_found: NotFoundPolicy::default(),
        }
    }
}
