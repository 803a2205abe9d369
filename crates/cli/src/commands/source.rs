// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sq source [--remote <name>]` - Print the validated git source of the checkout

use crate::error::SqError;
use anyhow::Result;
use clap::Args;
use sq_adapters::{GitAdapter, TracedRepoAdapter};
use sq_engine::resolve_git_source;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(Args)]
pub struct SourceArgs {
    /// Remote to deploy from; asked interactively when several exist
    #[arg(long)]
    pub remote: Option<String>,
}

pub async fn source(args: SourceArgs, repo_root: &Path) -> Result<()> {
    let repo = TracedRepoAdapter::new(GitAdapter::new(repo_root));

    let source = resolve_git_source(&repo, &prompt_remote, args.remote.as_deref())
        .await
        .map_err(SqError::source_check)?;

    println!("{}", source);
    Ok(())
}

/// Ask which remote to use. The list goes to stderr so stdout stays clean.
fn prompt_remote(remotes: &[String]) -> Option<String> {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "Multiple git remotes found:");
    for (i, remote) in remotes.iter().enumerate() {
        let _ = writeln!(stderr, "  {}) {}", i + 1, remote);
    }
    let _ = write!(stderr, "Select a remote [1-{}]: ", remotes.len());
    let _ = stderr.flush();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer).ok()?;
    choose_from_answer(remotes, &answer)
}

/// Accepts a 1-based index or a remote name
fn choose_from_answer(remotes: &[String], answer: &str) -> Option<String> {
    let answer = answer.trim();
    if let Ok(index) = answer.parse::<usize>() {
        return remotes.get(index.checked_sub(1)?).cloned();
    }
    remotes.iter().find(|remote| *remote == answer).cloned()
}
