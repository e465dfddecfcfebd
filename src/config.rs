//! Configuration Module
//!
//! Handles loading client, progress and proxy settings from environment variables.

use std::env;
use std::str::FromStr;

// == Defaults ==
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_PROXY_URL: &str = "http://localhost:3000";
pub const DEFAULT_MAX_CACHE_SIZE: usize = 100;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LESSONS_PER_CHAPTER: usize = 5;
pub const DEFAULT_TOTAL_LESSONS: usize = 80;
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Completion service credential; absent means every request goes through the proxy
    pub api_key: Option<String>,
    /// Base URL of the completion service (without `/chat/completions`)
    pub base_url: String,
    /// Model name sent with every completion request
    pub model: String,
    /// Base URL of the server hosting `/api/deepseek`
    pub proxy_url: String,
    /// Maximum number of generated lessons kept in the cache
    pub max_cache_size: usize,
    /// Per-request HTTP timeout in seconds
    pub http_timeout_secs: u64,
    /// Distinct completed lessons needed before a chapter counts as complete
    pub lessons_per_chapter: usize,
    /// Curriculum size used for the overall percentage
    pub total_lessons: usize,
    /// HTTP port of the proxy server
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEEPSEEK_API_KEY` - Completion service credential (default: none)
    /// - `DEEPSEEK_BASE_URL` - Completion service base URL (default: https://api.deepseek.com)
    /// - `DEEPSEEK_MODEL` - Model name (default: deepseek-chat)
    /// - `PROXY_URL` - Proxy server base URL (default: http://localhost:3000)
    /// - `MAX_CACHE_SIZE` - Cached lessons (default: 100)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout (default: 30)
    /// - `LESSONS_PER_CHAPTER` - Chapter completion threshold (default: 5)
    /// - `TOTAL_LESSONS` - Curriculum size (default: 80)
    /// - `SERVER_PORT` - Proxy server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("DEEPSEEK_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: env::var("DEEPSEEK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            model: env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            proxy_url: env::var("PROXY_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.into()),
            max_cache_size: parse_env("MAX_CACHE_SIZE", DEFAULT_MAX_CACHE_SIZE),
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS),
            lessons_per_chapter: parse_env("LESSONS_PER_CHAPTER", DEFAULT_LESSONS_PER_CHAPTER),
            total_lessons: parse_env("TOTAL_LESSONS", DEFAULT_TOTAL_LESSONS),
            server_port: parse_env("SERVER_PORT", DEFAULT_SERVER_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            max_cache_size: DEFAULT_MAX_CACHE_SIZE,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            lessons_per_chapter: DEFAULT_LESSONS_PER_CHAPTER,
            total_lessons: DEFAULT_TOTAL_LESSONS,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
