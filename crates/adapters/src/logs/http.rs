// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log streaming over a chunked HTTP response

use super::{LineSplitter, LogStreamError, LogStreamer};
use async_trait::async_trait;
use futures::StreamExt;
use std::time::Duration;

/// Follows squid logs over HTTP.
///
/// The client has no overall request timeout since the stream stays open
/// for as long as the squid runs; only connecting is bounded.
#[derive(Clone)]
pub struct HttpLogStreamer {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpLogStreamer {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        connect_timeout: Duration,
    ) -> Result<Self, LogStreamError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn follow_url(&self, org: &str, squid: &str, version: &str) -> String {
        format!(
            "{}/orgs/{}/squids/{}/versions/{}/logs/follow",
            self.base_url, org, squid, version
        )
    }
}

#[async_trait]
impl LogStreamer for HttpLogStreamer {
    async fn stream(
        &self,
        org: &str,
        squid: &str,
        version: &str,
        on_line: &mut (dyn FnMut(String) + Send),
    ) -> Result<(), LogStreamError> {
        let mut request = self.client.get(self.follow_url(org, squid, version));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LogStreamError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let mut splitter = LineSplitter::new();
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            for line in splitter.push(&chunk?) {
                on_line(line);
            }
        }
        if let Some(line) = splitter.finish() {
            on_line(line);
        }

        Ok(())
    }
}
