// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sq_core::{SquidRef, Stage};
use sq_engine::FatalError;

#[test]
fn error_display() {
    let err = SqError::new("Something went wrong")
        .with_context("First context")
        .with_context("Second context")
        .with_suggestion("Try this")
        .with_suggestion("Or this");

    let output = format!("{}", err);
    assert!(output.contains("error: Something went wrong"));
    assert!(output.contains("-> First context"));
    assert!(output.contains("-> Second context"));
    assert!(output.contains("1. Try this"));
    assert!(output.contains("2. Or this"));
}

#[test]
fn invalid_reference_names_the_input() {
    let err = SqError::invalid_reference(SquidRef::parse("foo@bar@baz").unwrap_err());

    let output = err.to_string();
    assert!(output.contains("foo@bar@baz"));
    assert!(output.contains("<name>@<version>"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn quiet_stage_failure_suggests_rerun() {
    let err = SqError::poll(PollError::Fatal(FatalError::stage_failed(
        Stage::Publish,
        None,
    )));

    let output = err.to_string();
    assert!(output.contains("error: An error occurred while publishing the squid"));
    assert!(output.contains("without --quiet"));
}

#[test]
fn verbose_failure_points_at_dump() {
    let err = SqError::poll(PollError::Fatal(FatalError::unexpected(Some(
        "dump".to_string(),
    ))));

    assert_eq!(err.context, vec!["Pipeline debug output is shown above"]);
    assert!(err.suggestions.is_empty());
}

#[test]
fn branch_not_on_remote_suggests_push() {
    let err = SqError::source_check(SourceError::BranchNotOnRemote {
        remote: "origin".to_string(),
        branch: "feature".to_string(),
    });

    assert!(err
        .suggestions
        .contains(&"Push the branch: git push -u origin feature".to_string()));
}
