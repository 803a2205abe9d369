// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[test]
fn parses_env_file_content() {
    let env = parse_env_text(
        "# database\nDB_URL=postgres://localhost/db\n\nexport RPC_ENDPOINT = \"wss://node\"\nNAME='quoted value'\nnot an assignment\n",
    )
    .unwrap();

    assert_eq!(env.len(), 3);
    assert_eq!(env["DB_URL"], "postgres://localhost/db");
    assert_eq!(env["RPC_ENDPOINT"], "wss://node");
    assert_eq!(env["NAME"], "quoted value");
}

#[test]
fn value_may_contain_equals() {
    let env = parse_env_text("QUERY=a=b&c=d").unwrap();
    assert_eq!(env["QUERY"], "a=b&c=d");
}

#[test]
fn double_quoted_values_expand_newlines() {
    let env = parse_env_text("CERT=\"line1\\nline2\"").unwrap();
    assert_eq!(env["CERT"], "line1\nline2");
}

#[test]
fn later_line_overrides_earlier() {
    let env = parse_env_text("A=1\nA=2").unwrap();
    assert_eq!(env["A"], "2");
}

#[parameterized(
    leading_digit = { "1KEY=v" },
    dash = { "MY-KEY=v" },
    empty = { "=v" },
)]
fn rejects_invalid_keys(text: &str) {
    assert!(matches!(
        parse_env_text(text),
        Err(EnvError::InvalidKey { line: 1, .. })
    ));
}

#[parameterized(
    no_assignment = { "JUSTAKEY" },
    blank = { "" },
    comment = { "# X=1" },
)]
fn empty_inline_flag_is_error(flag: &str) {
    assert!(matches!(parse_env_flag(flag), Err(EnvError::EmptyFlag(_))));
}

#[test]
fn inline_flag_with_entry_parses() {
    let env = parse_env_flag("PORT=4000").unwrap();
    assert_eq!(env["PORT"], "4000");
}

#[test]
fn missing_env_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let env = load_env_file(&dir.path().join(".env")).unwrap();
    assert!(env.is_empty());
}

#[test]
fn loads_env_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "A=1\nB=2\n").unwrap();

    let env = load_env_file(&path).unwrap();
    assert_eq!(env["A"], "1");
    assert_eq!(env["B"], "2");
}

#[test]
fn merge_is_last_wins() {
    let file = parse_env_text("A=file\nB=file").unwrap();
    let flag1 = parse_env_flag("A=flag1").unwrap();
    let flag2 = parse_env_flag("A=flag2").unwrap();

    let merged = merge_env([file, flag1, flag2]);
    assert_eq!(merged["A"], "flag2");
    assert_eq!(merged["B"], "file");
}

proptest! {
    #[test]
    fn merge_keeps_every_key_with_last_value(
        first in proptest::collection::btree_map("[A-Z_]{1,8}", "[a-z0-9]{0,8}", 0..8),
        second in proptest::collection::btree_map("[A-Z_]{1,8}", "[a-z0-9]{0,8}", 0..8),
    ) {
        let merged = merge_env([first.clone(), second.clone()]);
        for (key, value) in &second {
            prop_assert_eq!(&merged[key], value);
        }
        for (key, value) in &first {
            if !second.contains_key(key) {
                prop_assert_eq!(&merged[key], value);
            }
        }
        prop_assert!(merged.len() <= first.len() + second.len());
    }

    #[test]
    fn single_assignment_roundtrips(key in "[A-Za-z_][A-Za-z0-9_]{0,12}", value in "[a-zA-Z0-9:/._-]{0,16}") {
        let env = parse_env_flag(&format!("{}={}", key, value)).unwrap();
        prop_assert_eq!(env.get(&key), Some(&value));
    }
}
