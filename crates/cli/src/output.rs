// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use sq_core::EnvMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render an env map, one `KEY=VALUE` per line or as a JSON object
pub fn format_env(env: &EnvMap, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(env
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(env),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnvMap {
        [("B", "2"), ("A", "1")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn text_is_sorted_key_value_lines() {
        assert_eq!(format_env(&sample(), OutputFormat::Text).unwrap(), "A=1\nB=2");
    }

    #[test]
    fn json_is_an_object() {
        let json = format_env(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({ "A": "1", "B": "2" }));
    }

    #[test]
    fn empty_text_is_empty() {
        assert_eq!(format_env(&EnvMap::new(), OutputFormat::Text).unwrap(), "");
    }
}
