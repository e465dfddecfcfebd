//! Request DTOs
//!
//! Caller-facing generation options and the outbound bodies for the direct
//! completion endpoint and the proxy.

use serde::{Deserialize, Serialize};

/// System persona sent with every direct completion request.
pub const CLIENT_PERSONA: &str = "You are an expert Python programming teacher teaching in Persian. \
Provide clear, concise, and practical explanations.";

/// Per-call options for lesson generation.
///
/// # Fields
/// - `temperature` / `max_tokens`: override the per-kind sampling defaults
/// - `difficulty`: learner level woven into the prompt (not part of the cache key)
/// - `force_refresh`: skip the cache lookup and overwrite the cached entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(rename = "forceRefresh")]
    pub force_refresh: bool,
}

impl GenerationOptions {
    /// Options that bypass the cache.
    pub fn refresh() -> Self {
        Self {
            force_refresh: true,
            ..Self::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Applies the caller's overrides on top of `defaults`.
    pub fn resolve(&self, defaults: RequestParams) -> RequestParams {
        RequestParams {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
        }
    }
}

/// Sampling parameters actually sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequestParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl RequestParams {
    pub fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// A single chat message in OpenAI-compatible format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body for `POST {base_url}/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

impl ChatCompletionRequest {
    /// Builds a non-streaming request with the given persona as system message.
    pub fn new(
        model: impl Into<String>,
        persona: &str,
        prompt: impl Into<String>,
        params: RequestParams,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::system(persona), ChatMessage::user(prompt)],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            stream: false,
        }
    }
}

/// Sampling options forwarded through the proxy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl From<RequestParams> for ProxyOptions {
    fn from(params: RequestParams) -> Self {
        Self {
            temperature: Some(params.temperature),
            max_tokens: Some(params.max_tokens),
        }
    }
}

/// Body for `POST /api/deepseek`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyRequest {
    pub prompt: String,
    pub options: ProxyOptions,
}

impl ProxyRequest {
    pub fn new(prompt: impl Into<String>, params: RequestParams) -> Self {
        Self {
            prompt: prompt.into(),
            options: params.into(),
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.prompt.trim().is_empty() {
            return Some("Prompt is required".to_string());
        }
        None
    }
}
