//! Content Client
//!
//! Orchestrates prompt building, the lesson cache, the request strategy and
//! the parser/fallback pair for the four generation operations.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::cache::{lesson_cache_key, CacheStats, LessonCache};
use crate::client::strategy::request_completion;
use crate::client::transport::{CompletionTransport, HttpTransport};
use crate::config::Config;
use crate::error::{ContentError, RequestFailure, Result};
use crate::fallback::fallback_content;
use crate::models::{ClientStatus, ContentKind, GeneratedLesson, GenerationOptions, RequestParams};
use crate::{parser, prompt};

// == Content Client ==
/// Client for AI-generated lesson material.
///
/// Cheap to clone; clones share the cache and credential. Construct one at
/// startup and hand it to whatever needs it.
#[derive(Clone)]
pub struct ContentClient {
    transport: Arc<dyn CompletionTransport>,
    /// Lookups need write access for hit/miss accounting
    cache: Arc<RwLock<LessonCache>>,
    api_key: Arc<RwLock<Option<String>>>,
    model: String,
    base_url: String,
}

impl ContentClient {
    // == Constructors ==
    /// Creates a client over an arbitrary transport.
    pub fn new(transport: Arc<dyn CompletionTransport>, config: &Config) -> Self {
        Self {
            transport,
            cache: Arc::new(RwLock::new(LessonCache::new(config.max_cache_size))),
            api_key: Arc::new(RwLock::new(config.api_key.clone())),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        }
    }

    /// Creates a client talking HTTP to the configured endpoints.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::new(Arc::new(transport), config))
    }

    // == Credential ==
    /// Configures the credential used for direct requests.
    pub async fn set_api_key(&self, api_key: impl Into<String>) {
        let api_key = api_key.into();
        *self.api_key.write().await = Some(api_key).filter(|key| !key.trim().is_empty());
        info!("completion API key configured");
    }

    // == Lesson ==
    /// Generates (or returns the cached) lesson for a chapter/lesson pair.
    ///
    /// Fails with `ContentError::Generation` when neither request tier
    /// produces a completion. Unparseable completions are not failures: they
    /// yield the fallback lesson, which is cached like any other result.
    pub async fn generate_lesson_content(
        &self,
        chapter_title: &str,
        lesson_title: &str,
        options: &GenerationOptions,
    ) -> Result<GeneratedLesson> {
        let key = lesson_cache_key(chapter_title, lesson_title);

        if !options.force_refresh {
            if let Some(cached) = self.cache.write().await.get(&key) {
                info!(%key, "using cached lesson content");
                return Ok(cached);
            }
        }

        info!(chapter = chapter_title, lesson = lesson_title, "requesting lesson content");
        let prompt = prompt::lesson_prompt(chapter_title, lesson_title, options);
        let params = options.resolve(ContentKind::Lesson.request_params());
        let lesson = self
            .attempt(ContentKind::Lesson, &prompt, params)
            .await
            .map_err(|cause| {
                error!(error = %cause, "lesson generation failed");
                ContentError::Generation(cause)
            })?;

        let evicted = self.cache.write().await.insert(key, lesson.clone());
        if !evicted.is_empty() {
            info!(count = evicted.len(), "trimmed lesson cache");
        }
        Ok(lesson)
    }

    // == Enhancement Family ==
    /// Deeper material for `topic`, built on `current_content`. Never fails.
    pub async fn generate_enhanced_content(
        &self,
        chapter_title: &str,
        lesson_title: &str,
        topic: &str,
        current_content: &str,
    ) -> GeneratedLesson {
        let prompt = prompt::enhanced_prompt(chapter_title, lesson_title, topic, current_content);
        self.generate_supplement(ContentKind::Enhanced, &prompt).await
    }

    /// `count` additional code examples for `topic`. Never fails.
    pub async fn generate_more_examples(
        &self,
        topic: &str,
        difficulty: &str,
        count: usize,
    ) -> GeneratedLesson {
        let prompt = prompt::examples_prompt(topic, difficulty, count);
        self.generate_supplement(ContentKind::Examples, &prompt).await
    }

    /// `count` additional exercises for `topic`. Never fails.
    pub async fn generate_exercises(
        &self,
        topic: &str,
        difficulty: &str,
        count: usize,
    ) -> GeneratedLesson {
        let prompt = prompt::exercises_prompt(topic, difficulty, count);
        self.generate_supplement(ContentKind::Exercises, &prompt).await
    }

    // == Status ==
    pub async fn status(&self) -> ClientStatus {
        let cache_stats = self.cache.read().await.stats();
        ClientStatus {
            configured: self.api_key.read().await.is_some(),
            cache_size: cache_stats.total_entries,
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            cache_stats,
        }
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Whether a lesson for this chapter/lesson pair is cached. Does not count as a lookup.
    pub async fn is_cached(&self, chapter_title: &str, lesson_title: &str) -> bool {
        self.cache
            .read()
            .await
            .contains_key(&lesson_cache_key(chapter_title, lesson_title))
    }

    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
        info!("lesson cache cleared");
    }

    // == Internals ==
    async fn complete(
        &self,
        prompt: &str,
        params: RequestParams,
    ) -> std::result::Result<String, RequestFailure> {
        let api_key = self.api_key.read().await.clone();
        request_completion(self.transport.as_ref(), api_key, &self.model, prompt, params).await
    }

    /// One strategy run plus parsing. Unparseable text already yields the
    /// kind's fallback here; only request failures are left to the caller.
    async fn attempt(
        &self,
        kind: ContentKind,
        prompt: &str,
        params: RequestParams,
    ) -> std::result::Result<GeneratedLesson, RequestFailure> {
        let text = self.complete(prompt, params).await?;
        Ok(parser::parse_or_fallback(&text, kind))
    }

    async fn generate_supplement(&self, kind: ContentKind, prompt: &str) -> GeneratedLesson {
        self.attempt(kind, prompt, kind.request_params())
            .await
            .unwrap_or_else(|cause| {
                warn!(kind = kind.as_str(), error = %cause, "using fallback content");
                fallback_content(kind)
            })
    }
}
