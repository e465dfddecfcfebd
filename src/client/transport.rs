//! Completion transport
//!
//! One trait seam between the request strategy and the network, plus the
//! reqwest implementation used in production.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{ContentError, RequestFailure, Result};
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ProxyRequest};

/// Path of the proxy endpoint relative to the proxy base URL.
pub const PROXY_PATH: &str = "/api/deepseek";

// == Completion Outcome ==
/// Result of a single completion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// `choices[0].message.content` was present and non-empty
    Success { content: String },
    /// The body decoded but did not have the expected shape
    MalformedResponse(String),
    /// Network error, undecodable body, or non-success status
    TransportFailure(String),
}

impl CompletionOutcome {
    /// Classifies a decoded response body.
    pub fn from_body(body: Value) -> Self {
        match serde_json::from_value::<ChatCompletionResponse>(body) {
            Ok(response) => match response.first_content() {
                Some(content) => CompletionOutcome::Success {
                    content: content.to_string(),
                },
                None => CompletionOutcome::MalformedResponse(
                    "response has no choices[0].message.content".to_string(),
                ),
            },
            Err(err) => CompletionOutcome::MalformedResponse(format!("unexpected response shape: {}", err)),
        }
    }

    fn from_result(result: std::result::Result<Value, RequestFailure>) -> Self {
        match result {
            Ok(body) => Self::from_body(body),
            Err(RequestFailure::Transport(reason)) => CompletionOutcome::TransportFailure(reason),
            Err(RequestFailure::Validation(reason)) => CompletionOutcome::MalformedResponse(reason),
        }
    }

    /// Converts a failed outcome into its failure cause.
    pub fn into_result(self) -> std::result::Result<String, RequestFailure> {
        match self {
            CompletionOutcome::Success { content } => Ok(content),
            CompletionOutcome::MalformedResponse(reason) => Err(RequestFailure::Validation(reason)),
            CompletionOutcome::TransportFailure(reason) => Err(RequestFailure::Transport(reason)),
        }
    }
}

// == Transport Trait ==
/// Network side of the two request tiers.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// `POST {base_url}/chat/completions` with a bearer credential.
    async fn send_direct(&self, api_key: &str, request: &ChatCompletionRequest) -> CompletionOutcome;

    /// `POST {proxy_url}/api/deepseek`.
    async fn send_proxy(&self, request: &ProxyRequest) -> CompletionOutcome;
}

// == HTTP Transport ==
/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    proxy_url: String,
}

impl HttpTransport {
    /// Creates a transport with the given endpoints and request timeout.
    pub fn new(
        base_url: impl Into<String>,
        proxy_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ContentError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: trim_slash(base_url.into()),
            proxy_url: trim_slash(proxy_url.into()),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.base_url.clone(),
            config.proxy_url.clone(),
            Duration::from_secs(config.http_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a chat completion request and returns the raw JSON body.
    ///
    /// Shared by the direct tier and the proxy server's upstream relay.
    pub async fn post_chat_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> std::result::Result<Value, RequestFailure> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(%url, model = %request.model, "sending direct completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| RequestFailure::Transport(format!("API request failed: {}", e)))?;

        decode_json(response, "API").await
    }

    async fn post_proxy(&self, request: &ProxyRequest) -> std::result::Result<Value, RequestFailure> {
        let url = format!("{}{}", self.proxy_url, PROXY_PATH);
        debug!(%url, "sending proxy completion request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| RequestFailure::Transport(format!("Proxy request failed: {}", e)))?;

        decode_json(response, "Proxy").await
    }
}

#[async_trait]
impl CompletionTransport for HttpTransport {
    async fn send_direct(&self, api_key: &str, request: &ChatCompletionRequest) -> CompletionOutcome {
        CompletionOutcome::from_result(self.post_chat_completion(api_key, request).await)
    }

    async fn send_proxy(&self, request: &ProxyRequest) -> CompletionOutcome {
        CompletionOutcome::from_result(self.post_proxy(request).await)
    }
}

async fn decode_json(
    response: reqwest::Response,
    tier: &str,
) -> std::result::Result<Value, RequestFailure> {
    let status = response.status();
    if !status.is_success() {
        return Err(RequestFailure::Transport(format!(
            "{} error: {}",
            tier,
            status.as_u16()
        )));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| RequestFailure::Transport(format!("{} returned an undecodable body: {}", tier, e)))
}

fn trim_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
