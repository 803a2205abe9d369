// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration.
//!
//! Read from `$SQ_CONFIG`, or `<config dir>/sq/config.toml` when unset. A
//! missing file means defaults. `SQ_*` environment variables override the
//! file.

use serde::Deserialize;
use sq_core::PollConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default timeout for a single API request
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{key} must be a number of milliseconds, got '{value}'")]
    InvalidMillis { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Base URL of the deployment API
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    #[serde(with = "humantime_serde")]
    pub http_timeout: Duration,
    pub poll: PollConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_token: None,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            poll: PollConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load the config file and apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `SQ_*` overrides looked up through `var`
    pub fn apply_env<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("SQ_API_URL") {
            self.api_url = Some(url);
        }
        if let Some(token) = var("SQ_API_TOKEN") {
            self.api_token = Some(token);
        }
        if let Some(value) = var("SQ_POLL_INTERVAL_MS") {
            self.poll.interval = parse_duration_ms("SQ_POLL_INTERVAL_MS", &value)?;
        }
        if let Some(value) = var("SQ_TIMEOUT_HTTP_MS") {
            self.http_timeout = parse_duration_ms("SQ_TIMEOUT_HTTP_MS", &value)?;
        }
        Ok(())
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("SQ_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("sq").join("config.toml"))
}

pub fn parse_duration_ms(key: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidMillis {
            key: key.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
