//! Response DTOs
//!
//! Completion response shape shared by the direct endpoint and the proxy,
//! plus the bodies the proxy server and client report back.

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;

/// Message payload of one completion choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceMessage {
    pub role: String,
    pub content: Option<String>,
}

/// One completion choice; only the first is ever consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Choice {
    pub index: u32,
    pub message: Option<ChoiceMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// `{choices: [{message: {content}}]}` as returned by both request tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatCompletionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// Creates a single-choice assistant response.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            id: None,
            model: None,
            choices: vec![Choice {
                index: 0,
                message: Some(ChoiceMessage {
                    role: "assistant".to_string(),
                    content: Some(content.into()),
                }),
                finish_reason: Some("stop".to_string()),
            }],
        }
    }

    /// Content of the first choice when present and non-empty.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

/// Snapshot returned by `ContentClient::status`.
#[derive(Debug, Clone, Serialize)]
pub struct ClientStatus {
    /// Whether a credential is configured for direct requests
    pub configured: bool,
    /// Number of cached lessons
    pub cache_size: usize,
    pub model: String,
    pub base_url: String,
    pub cache_stats: CacheStats,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Whether the proxy relays to the live service or answers with mock completions
    pub mode: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(relaying: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            mode: if relaying { "relay" } else { "mock" }.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
