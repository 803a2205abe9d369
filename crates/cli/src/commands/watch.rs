// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sq watch <org> <name@version> --url <url>` - Follow a deployment until it is live

use crate::config::CliConfig;
use crate::error::SqError;
use anyhow::Result;
use clap::Args;
use sq_adapters::{
    ConsoleOutput, HttpDeployApi, HttpLogStreamer, TracedDeployApi, TracedLogStreamer,
};
use sq_core::{SquidRef, SystemClock};
use sq_engine::{PipelinePoller, PollOutcome, PollRequest, PollerDeps};

#[derive(Args)]
pub struct WatchArgs {
    /// Organization code
    pub org: String,

    /// Squid to watch, as <name>@<version>
    pub squid: String,

    /// Deployment URL to show once the squid is running
    #[arg(long)]
    pub url: String,

    /// Do not print pipeline debug output
    #[arg(short, long)]
    pub quiet: bool,
}

pub async fn watch(args: WatchArgs) -> Result<()> {
    // Reject a malformed reference before touching config or the network
    let squid = SquidRef::parse(&args.squid).map_err(SqError::invalid_reference)?;

    let config = CliConfig::load()?;
    let base_url = config
        .api_url
        .clone()
        .ok_or_else(SqError::missing_api_url)?;

    let api = HttpDeployApi::new(&base_url, config.api_token.clone(), config.http_timeout)?;
    let logs = HttpLogStreamer::new(&base_url, config.api_token.clone(), config.http_timeout)?;
    let poller = PipelinePoller::new(
        PollerDeps {
            api: TracedDeployApi::new(api),
            logs: TracedLogStreamer::new(logs),
            output: ConsoleOutput::new(),
            clock: SystemClock,
        },
        config.poll.clone(),
    );

    let cancel = poller.cancellation_token();
    ctrlc::set_handler(move || cancel.cancel())?;

    let request = PollRequest {
        org: args.org,
        squid,
        deployment_url: args.url,
        verbose: !args.quiet,
    };

    match poller.run(&request).await {
        Ok(PollOutcome::Streamed) => Ok(()),
        Ok(PollOutcome::NotFound) => {
            tracing::info!(squid = %request.squid, "nothing left to watch");
            Ok(())
        }
        Err(e) => Err(SqError::poll(e).into()),
    }
}
