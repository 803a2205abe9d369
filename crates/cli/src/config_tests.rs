// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sq_core::NotFoundPolicy;
use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();

    let config = CliConfig::from_file(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config, CliConfig::default());
    assert_eq!(config.poll.interval, Duration::from_millis(3000));
}

#[test]
fn reads_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
api_url = "https://deploy.example.test"
http_timeout = "10s"

[poll]
interval = "1s"
max_transport_retries = 5
on_not_found = "fail"
"#,
    )
    .unwrap();

    let config = CliConfig::from_file(&path).unwrap();

    assert_eq!(config.api_url.as_deref(), Some("https://deploy.example.test"));
    assert_eq!(config.api_token, None);
    assert_eq!(config.http_timeout, Duration::from_secs(10));
    assert_eq!(config.poll.interval, Duration::from_secs(1));
    assert_eq!(config.poll.max_transport_retries, 5);
    assert_eq!(config.poll.on_not_found, NotFoundPolicy::Fail);
}

#[test]
fn invalid_toml_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "api_url = [").unwrap();

    let err = CliConfig::from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn env_overrides_file_values() {
    let mut config = CliConfig {
        api_url: Some("https://file.example.test".to_string()),
        ..CliConfig::default()
    };

    config
        .apply_env(env(&[
            ("SQ_API_URL", "https://env.example.test"),
            ("SQ_API_TOKEN", "secret"),
            ("SQ_POLL_INTERVAL_MS", "250"),
            ("SQ_TIMEOUT_HTTP_MS", "5000"),
        ]))
        .unwrap();

    assert_eq!(config.api_url.as_deref(), Some("https://env.example.test"));
    assert_eq!(config.api_token.as_deref(), Some("secret"));
    assert_eq!(config.poll.interval, Duration::from_millis(250));
    assert_eq!(config.http_timeout, Duration::from_secs(5));
}

#[test]
fn unset_env_keeps_values() {
    let mut config = CliConfig::default();

    config.apply_env(env(&[])).unwrap();

    assert_eq!(config, CliConfig::default());
}

#[test]
fn invalid_millis_is_rejected() {
    let mut config = CliConfig::default();

    let err = config
        .apply_env(env(&[("SQ_POLL_INTERVAL_MS", "3s")]))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "SQ_POLL_INTERVAL_MS must be a number of milliseconds, got '3s'"
    );
}
