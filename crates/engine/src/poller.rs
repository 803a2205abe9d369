// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline status polling and the handoff to log streaming.
//!
//! One poll is in flight at a time: each tick fetches a snapshot, announces
//! status transitions, and either keeps polling, fails, or (on `OK`) hands
//! over to the log streamer for the rest of the run. Waiting between ticks
//! goes through the [`Clock`] and is raced against a cancellation token.

use crate::error::{FatalError, PollError};
use sq_adapters::{DeployApi, LogStreamer, OutputSink};
use sq_core::{
    classify, display_action, Clock, DebugDump, DisplayAction, DisplayState, NotFoundPolicy,
    PipelineSnapshot, PipelineStatus, PollConfig, SquidRef, Verdict,
};
use std::time::Instant;
use tokio_util::sync::CancellationToken;

const DONE_SYMBOL: &str = "✔";
const FAILED_SYMBOL: &str = "✖";

/// What to watch and how to report it
#[derive(Debug, Clone)]
pub struct PollRequest {
    pub org: String,
    pub squid: SquidRef,
    /// Public URL announced once the deployment is healthy
    pub deployment_url: String,
    /// Emit debug dumps
    pub verbose: bool,
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Deployment became healthy and the log stream ran to completion
    Streamed,
    /// The remote stopped reporting the pipeline
    NotFound,
}

/// Poller adapter dependencies
pub struct PollerDeps<A, L, O, C> {
    pub api: A,
    pub logs: L,
    pub output: O,
    pub clock: C,
}

/// State owned by a single `run` invocation
struct PollSession<'a> {
    request: &'a PollRequest,
    started: Instant,
    last_status: Option<PipelineStatus>,
    /// Reset every tick; the debug dump prints at most once per tick
    debug_printed: bool,
    display: DisplayState,
    transport_failures: u32,
}

impl<'a> PollSession<'a> {
    fn new(request: &'a PollRequest, started: Instant) -> Self {
        Self {
            request,
            started,
            last_status: None,
            debug_printed: false,
            display: DisplayState::new(),
            transport_failures: 0,
        }
    }

    /// Record the observed status, returning true when it changed
    fn observe(&mut self, status: &PipelineStatus) -> bool {
        if self.last_status.as_ref() == Some(status) {
            return false;
        }
        self.last_status = Some(status.clone());
        true
    }
}

/// Result of processing one snapshot
enum Tick {
    Continue,
    Fail(FatalError),
    Ready,
}

/// Watches a deployment pipeline until it is healthy, fails, or disappears
pub struct PipelinePoller<A, L, O, C> {
    api: A,
    logs: L,
    output: O,
    clock: C,
    config: PollConfig,
    cancel: CancellationToken,
}

impl<A, L, O, C> PipelinePoller<A, L, O, C>
where
    A: DeployApi,
    L: LogStreamer,
    O: OutputSink,
    C: Clock,
{
    pub fn new(deps: PollerDeps<A, L, O, C>, config: PollConfig) -> Self {
        Self {
            api: deps.api,
            logs: deps.logs,
            output: deps.output,
            clock: deps.clock,
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Use an externally owned cancellation token
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Poll until a terminal outcome.
    ///
    /// Every run starts from an unknown last status.
    pub async fn run(&self, request: &PollRequest) -> Result<PollOutcome, PollError> {
        let mut session = PollSession::new(request, self.clock.now());
        let squid = &request.squid;

        tracing::info!(
            org = %request.org,
            squid = %squid,
            interval_ms = self.config.interval.as_millis() as u64,
            "watching deployment"
        );

        loop {
            let fetched = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(self.cancelled(&mut session)),
                fetched = self.api.pipeline(&request.org, &squid.name, &squid.version) => fetched,
            };

            match fetched {
                Ok(Some(snapshot)) => {
                    session.transport_failures = 0;
                    match self.tick(&mut session, &snapshot) {
                        Tick::Continue => {}
                        Tick::Fail(error) => return Err(PollError::Fatal(error)),
                        Tick::Ready => return self.stream_logs(&mut session).await,
                    }
                }
                Ok(None) => return self.not_found(&mut session),
                Err(error) => {
                    session.transport_failures += 1;
                    let attempts = session.transport_failures;
                    if attempts > self.config.max_transport_retries {
                        self.stop_display(&mut session, FAILED_SYMBOL);
                        return Err(PollError::Transport {
                            attempts,
                            source: error,
                        });
                    }
                    tracing::warn!(attempt = attempts, error = %error, "pipeline fetch failed, retrying");
                    self.output
                        .warn(&format!("could not fetch pipeline status: {}", error));
                }
            }

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(self.cancelled(&mut session)),
                _ = self.clock.sleep(self.config.interval) => {}
            }
        }
    }

    /// Process one snapshot into exactly one outcome
    fn tick(&self, session: &mut PollSession<'_>, snapshot: &PipelineSnapshot) -> Tick {
        session.debug_printed = false;

        let transitioned = session.observe(&snapshot.status);
        if transitioned {
            tracing::info!(
                pipeline_id = %snapshot.id,
                status = %snapshot.status,
                "status changed"
            );
            self.stop_display(session, DONE_SYMBOL);
        }

        if let DisplayAction::Start(label) = display_action(&snapshot.status, transitioned) {
            let action = session.display.start(label);
            self.output.apply(&action);
        }

        match classify(snapshot) {
            Verdict::Continue => Tick::Continue,
            Verdict::Failed(stage) => {
                tracing::error!(
                    pipeline_id = %snapshot.id,
                    %stage,
                    elapsed_ms = self.elapsed_ms(session),
                    "pipeline failed"
                );
                self.stop_display(session, FAILED_SYMBOL);
                let debug = self.print_debug(session, snapshot);
                Tick::Fail(FatalError::stage_failed(stage, debug))
            }
            Verdict::Ready => {
                tracing::info!(
                    pipeline_id = %snapshot.id,
                    elapsed_ms = self.elapsed_ms(session),
                    "deployment ready"
                );
                self.print_debug(session, snapshot);
                Tick::Ready
            }
            Verdict::Unexpected(raw) => {
                tracing::error!(pipeline_id = %snapshot.id, status = %raw, "unexpected pipeline status");
                self.stop_display(session, FAILED_SYMBOL);
                let debug = self.print_debug(session, snapshot);
                Tick::Fail(FatalError::unexpected(debug))
            }
        }
    }

    /// Emit the debug dump once per tick when verbose; returns it for
    /// attaching to errors
    fn print_debug(
        &self,
        session: &mut PollSession<'_>,
        snapshot: &PipelineSnapshot,
    ) -> Option<String> {
        if !session.request.verbose {
            return None;
        }

        let squid = &session.request.squid;
        let dump = DebugDump::compose(&squid.name, &squid.version, snapshot);
        if !session.debug_printed {
            self.output.log(&dump);
            session.debug_printed = true;
        }
        Some(dump)
    }

    /// Terminal success transition: announce the deployment and follow its
    /// logs until the stream ends
    async fn stream_logs(&self, session: &mut PollSession<'_>) -> Result<PollOutcome, PollError> {
        let request = session.request;
        let squid = &request.squid;

        self.output.log(&format!(
            "Your squid is up and running at {}",
            request.deployment_url
        ));
        self.output.log("Streaming logs:");

        let output = &self.output;
        let mut forward = |line: String| output.log(&line);

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(self.cancelled(session)),
            result = self.logs.stream(&request.org, &squid.name, &squid.version, &mut forward) => {
                result?;
                Ok(PollOutcome::Streamed)
            }
        }
    }

    fn not_found(&self, session: &mut PollSession<'_>) -> Result<PollOutcome, PollError> {
        match self.config.on_not_found {
            NotFoundPolicy::Succeed => {
                self.stop_display(session, DONE_SYMBOL);
                tracing::info!(squid = %session.request.squid, "pipeline no longer reported");
                Ok(PollOutcome::NotFound)
            }
            NotFoundPolicy::Fail => {
                self.stop_display(session, FAILED_SYMBOL);
                Err(PollError::NotFound(session.request.squid.to_string()))
            }
        }
    }

    fn cancelled(&self, session: &mut PollSession<'_>) -> PollError {
        tracing::info!(
            squid = %session.request.squid,
            stage = session.display.current_label().unwrap_or("-"),
            elapsed_ms = self.elapsed_ms(session),
            "watch cancelled"
        );
        self.stop_display(session, FAILED_SYMBOL);
        PollError::Cancelled
    }

    fn elapsed_ms(&self, session: &PollSession<'_>) -> u64 {
        self.clock.now().duration_since(session.started).as_millis() as u64
    }

    fn stop_display(&self, session: &mut PollSession<'_>, symbol: &str) {
        if let Some(action) = session.display.stop(symbol) {
            self.output.apply(&action);
        }
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
