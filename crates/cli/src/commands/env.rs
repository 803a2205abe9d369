// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sq env [--env KEY=VALUE]... [--env-file PATH]` - Show the merged deploy environment

use crate::error::SqError;
use crate::output::{format_env, OutputFormat};
use anyhow::Result;
use clap::Args;
use sq_core::{load_env_file, merge_env, parse_env_flag, EnvError, EnvMap};
use std::path::PathBuf;

#[derive(Args)]
pub struct EnvArgs {
    /// Inline entry, applied in order after the env file
    #[arg(short, long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Env file read first; a missing file counts as empty
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn env(args: EnvArgs) -> Result<()> {
    let merged = collect(&args).map_err(SqError::invalid_env)?;
    let rendered = format_env(&merged, args.format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

/// File first, then each inline flag; later entries win
fn collect(args: &EnvArgs) -> Result<EnvMap, EnvError> {
    let mut sources = Vec::with_capacity(args.env.len() + 1);
    if let Some(path) = &args.env_file {
        sources.push(load_env_file(path)?);
    }
    for flag in &args.env {
        sources.push(parse_env_flag(flag)?);
    }
    Ok(merge_env(sources))
}
