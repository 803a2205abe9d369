// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sq - squid deployment CLI

mod commands;
mod completions;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{env, source, watch};
use completions::CompletionsArgs;
use error::SqError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "sq",
    version,
    about = "sq - deploy squids and follow them until they are live"
)]
struct Cli {
    /// Repository root directory
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch a deployment pipeline, then stream the squid's logs
    Watch(watch::WatchArgs),
    /// Print the git source to deploy from
    Source(source::SourceArgs),
    /// Show the merged deploy environment
    Env(env::EnvArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = setup_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SqError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Watch(args) => watch::watch(args).await,
        Commands::Source(args) => {
            let root = cli.repo.unwrap_or_else(|| PathBuf::from("."));
            source::source(args, &root).await
        }
        Commands::Env(args) => env::env(args),
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            Ok(())
        }
    }
}

/// Log to stderr through a non-blocking writer. `RUST_LOG` picks the
/// filter, defaulting to warnings only.
fn setup_logging() -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_target(false),
        )
        .init();

    guard
}
