//! API Handlers
//!
//! Request handlers for the completion proxy.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{info, warn};

use super::mock::mock_completion;
use crate::client::HttpTransport;
use crate::config::Config;
use crate::error::{ContentError, Result};
use crate::models::{ChatCompletionRequest, HealthResponse, ProxyRequest, RequestParams};
use crate::prompt::detect_kind;

/// Persona used for relayed requests.
pub const SERVER_PERSONA: &str = "You are an expert Python teacher. Respond in Persian.";

const DEFAULT_RELAY_PARAMS: RequestParams = RequestParams {
    temperature: 0.7,
    max_tokens: 1500,
};

// == Upstream Relay ==
/// Forwards proxied prompts to the completion service with the server's credential.
pub struct UpstreamRelay {
    transport: HttpTransport,
    api_key: String,
    model: String,
}

impl UpstreamRelay {
    pub fn new(transport: HttpTransport, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Sends `request` upstream and returns the service's JSON body untouched.
    pub async fn complete(&self, request: &ProxyRequest) -> Result<Value> {
        let params = RequestParams {
            temperature: request
                .options
                .temperature
                .unwrap_or(DEFAULT_RELAY_PARAMS.temperature),
            max_tokens: request
                .options
                .max_tokens
                .unwrap_or(DEFAULT_RELAY_PARAMS.max_tokens),
        };
        let upstream = ChatCompletionRequest::new(&self.model, SERVER_PERSONA, &request.prompt, params);

        self.transport
            .post_chat_completion(&self.api_key, &upstream)
            .await
            .map_err(|cause| ContentError::Upstream(cause.to_string()))
    }
}

/// Application state shared across all handlers.
///
/// `relay` is None when the server has no credential; prompts are then
/// answered with mock completions.
#[derive(Clone)]
pub struct AppState {
    pub relay: Option<Arc<UpstreamRelay>>,
}

impl AppState {
    pub fn new(relay: Option<UpstreamRelay>) -> Self {
        Self {
            relay: relay.map(Arc::new),
        }
    }

    /// State for serving mock completions only.
    pub fn mock() -> Self {
        Self::new(None)
    }

    /// Relays upstream when `DEEPSEEK_API_KEY` is configured, mocks otherwise.
    pub fn from_config(config: &Config) -> Result<Self> {
        let relay = match &config.api_key {
            Some(api_key) => {
                let transport = HttpTransport::from_config(config)?;
                Some(UpstreamRelay::new(transport, api_key.clone(), config.model.clone()))
            }
            None => None,
        };
        Ok(Self::new(relay))
    }
}

/// Handler for POST /api/deepseek
///
/// Relays the prompt to the completion service, or answers with a canned
/// completion when no upstream credential is configured.
pub async fn completion_proxy_handler(
    State(state): State<AppState>,
    Json(req): Json<ProxyRequest>,
) -> Result<Response> {
    if let Some(error_msg) = req.validate() {
        return Err(ContentError::InvalidRequest(error_msg));
    }

    let preview: String = req.prompt.chars().take(100).collect();
    info!(prompt = %preview, "proxy completion request");

    match &state.relay {
        Some(relay) => {
            let body = relay.complete(&req).await?;
            info!("upstream completion received");
            Ok(Json(body).into_response())
        }
        None => {
            warn!("no upstream API key configured, using mock completion");
            Ok(Json(mock_completion(detect_kind(&req.prompt))).into_response())
        }
    }
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.relay.is_some()))
}
