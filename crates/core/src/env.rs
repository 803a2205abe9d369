// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `KEY=VALUE` environment parsing for inline flags and env files.
//!
//! Sources merge in order with later values overriding earlier ones.

use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Parsed environment, ordered by key
pub type EnvMap = BTreeMap<String, String>;

/// Errors from env parsing
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("env flag '{0}' does not contain any KEY=VALUE entry")]
    EmptyFlag(String),
    #[error("invalid env key '{key}' on line {line}")]
    InvalidKey { line: usize, key: String },
    #[error("failed to read env file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse env text. Blank lines, `#` comments and lines without `=` are
/// skipped; an `export ` prefix and matching outer quotes are stripped.
pub fn parse_env_text(text: &str) -> Result<EnvMap, EnvError> {
    let mut env = EnvMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if !is_valid_key(key) {
            return Err(EnvError::InvalidKey {
                line: idx + 1,
                key: key.to_string(),
            });
        }

        env.insert(key.to_string(), unquote(value.trim()));
    }

    Ok(env)
}

/// Parse a single inline `--env` flag. A flag that yields no entries is an
/// input error.
pub fn parse_env_flag(flag: &str) -> Result<EnvMap, EnvError> {
    let env = parse_env_text(flag)?;
    if env.is_empty() {
        return Err(EnvError::EmptyFlag(flag.to_string()));
    }
    Ok(env)
}

/// Load an env file. A missing file is an empty map.
pub fn load_env_file(path: &Path) -> Result<EnvMap, EnvError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_env_text(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(EnvMap::new()),
        Err(source) => Err(EnvError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Merge sources in order; the last source to set a key wins.
pub fn merge_env<I>(sources: I) -> EnvMap
where
    I: IntoIterator<Item = EnvMap>,
{
    sources.into_iter().fold(EnvMap::new(), |mut merged, source| {
        merged.extend(source);
        merged
    })
}

fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn unquote(value: &str) -> String {
    if value.len() >= 2 {
        if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
            return inner.replace("\\n", "\n");
        }
        if let Some(inner) = value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')) {
            return inner.to_string();
        }
    }
    value.to_string()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
