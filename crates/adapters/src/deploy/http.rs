// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP deployment API client

use super::{ApiError, DeployApi};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use sq_core::PipelineSnapshot;
use std::time::Duration;

/// Response envelope used by the deployment API
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    payload: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

/// Deployment API over HTTP
#[derive(Clone)]
pub struct HttpDeployApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpDeployApi {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// URL of the pipeline resource for a squid version
    pub fn pipeline_url(&self, org: &str, squid: &str, version: &str) -> String {
        format!(
            "{}/orgs/{}/squids/{}/versions/{}/pipeline",
            self.base_url, org, squid, version
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl DeployApi for HttpDeployApi {
    async fn pipeline(
        &self,
        org: &str,
        squid: &str,
        version: &str,
    ) -> Result<Option<PipelineSnapshot>, ApiError> {
        let url = self.pipeline_url(org, squid, version);
        let response = self.authorize(self.client.get(&url)).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        decode_pipeline(&body)
    }
}

/// Decode the `{"payload": ...}` envelope. A null payload means not found.
pub(crate) fn decode_pipeline(body: &str) -> Result<Option<PipelineSnapshot>, ApiError> {
    let envelope: Envelope<PipelineSnapshot> = serde_json::from_str(body)?;
    Ok(envelope.payload)
}

pub(crate) fn status_error(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}
