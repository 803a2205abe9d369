// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::Path;
use tempfile::TempDir;

fn sh_git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .current_dir(dir)
        .args([
            "-c",
            "user.email=dev@example.test",
            "-c",
            "user.name=dev",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .output()
        .unwrap();
    assert!(
        status.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&status.stderr)
    );
}

/// Local repo on `main` with one commit, pushed to a bare `origin`
fn repo_with_origin() -> (TempDir, std::path::PathBuf) {
    let temp = tempfile::tempdir().unwrap();
    let remote = temp.path().join("remote.git");
    let local = temp.path().join("local");
    std::fs::create_dir_all(&remote).unwrap();
    std::fs::create_dir_all(&local).unwrap();

    sh_git(&remote, &["init", "--bare"]);
    sh_git(&local, &["init"]);
    sh_git(&local, &["checkout", "-b", "main"]);
    std::fs::write(local.join("squid.yaml"), "name: my-squid\n").unwrap();
    sh_git(&local, &["add", "."]);
    sh_git(&local, &["commit", "-m", "initial"]);
    sh_git(&local, &["remote", "add", "origin", remote.to_str().unwrap()]);
    sh_git(&local, &["push", "origin", "main"]);

    (temp, local)
}

#[test]
fn git_adapter_default_root() {
    let adapter = GitAdapter::default();
    assert_eq!(adapter.root, PathBuf::from("."));
}

#[tokio::test]
async fn reads_remotes_branch_and_head() {
    let (_temp, local) = repo_with_origin();
    let git = GitAdapter::new(&local);

    assert_eq!(git.remotes().await.unwrap(), vec!["origin"]);
    assert!(git.remote_url("origin").await.unwrap().ends_with("remote.git"));
    assert_eq!(git.current_branch().await.unwrap(), "main");
    assert_eq!(git.head_commit().await.unwrap().len(), 40);
}

#[tokio::test]
async fn fetched_remote_head_matches_local() {
    let (_temp, local) = repo_with_origin();
    let git = GitAdapter::new(&local);

    git.fetch("origin").await.unwrap();
    let remote = git.remote_head("origin", "main").await.unwrap();
    assert_eq!(remote, Some(git.head_commit().await.unwrap()));

    assert_eq!(git.remote_head("origin", "missing").await.unwrap(), None);
}

#[tokio::test]
async fn detects_dirty_tree() {
    let (_temp, local) = repo_with_origin();
    let git = GitAdapter::new(&local);
    assert!(git.is_clean().await.unwrap());

    std::fs::write(local.join("untracked.txt"), "x").unwrap();
    assert!(!git.is_clean().await.unwrap());
}

#[tokio::test]
async fn unknown_remote_is_not_found() {
    let (_temp, local) = repo_with_origin();
    let git = GitAdapter::new(&local);

    assert!(matches!(
        git.remote_url("upstream").await,
        Err(RepoError::RemoteNotFound(name)) if name == "upstream"
    ));
    assert!(matches!(
        git.fetch("upstream").await,
        Err(RepoError::CommandFailed { .. })
    ));
}

#[tokio::test]
async fn fetch_succeeds_for_unpushed_branch() {
    let (_temp, local) = repo_with_origin();
    sh_git(&local, &["checkout", "-b", "feature"]);
    let git = GitAdapter::new(&local);

    git.fetch("origin").await.unwrap();

    assert_eq!(git.remote_head("origin", "feature").await.unwrap(), None);
    assert!(git.remote_head("origin", "main").await.unwrap().is_some());
}

#[tokio::test]
async fn fetch_prunes_deleted_remote_branch() {
    let (_temp, local) = repo_with_origin();
    sh_git(&local, &["push", "origin", "main:stale"]);
    let git = GitAdapter::new(&local);
    git.fetch("origin").await.unwrap();
    assert!(git.remote_head("origin", "stale").await.unwrap().is_some());

    sh_git(&local, &["push", "origin", "--delete", "stale"]);
    sh_git(&local, &["update-ref", "refs/remotes/origin/stale", "HEAD"]);
    git.fetch("origin").await.unwrap();

    assert_eq!(git.remote_head("origin", "stale").await.unwrap(), None);
}
