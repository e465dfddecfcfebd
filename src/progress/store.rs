//! Progress Store
//!
//! Records lesson completions and keeps chapter completion and the overall
//! percentage in step, persisting the whole record after every change.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::record::{lesson_key, ProgressRecord, ProgressSettings};
use crate::config::Config;
use crate::storage::{KeyValueStore, PrefixedStore};

/// Storage key of the progress record (before prefixing).
pub const PROGRESS_KEY: &str = "progress";

// == Progress Store ==
pub struct ProgressStore {
    storage: PrefixedStore,
    settings: ProgressSettings,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl ProgressStore {
    // == Constructors ==
    pub fn new(storage: Arc<dyn KeyValueStore>, settings: ProgressSettings) -> Self {
        Self {
            storage: PrefixedStore::new(storage),
            settings,
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_config(storage: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        Self::new(storage, ProgressSettings::from_config(config))
    }

    // == Record Completion ==
    /// Marks a lesson complete.
    ///
    /// Returns false without touching storage if the lesson was already
    /// recorded. Otherwise updates chapter completion, the overall
    /// percentage and the activity timestamp, persists, and returns true.
    pub async fn record_lesson_completion(&self, chapter_id: u32, lesson_id: u32) -> bool {
        let _guard = self.write_lock.lock().await;
        let mut record = self.load();
        let key = lesson_key(chapter_id, lesson_id);

        if record.has_lesson(&key) {
            debug!(lesson = %key, "lesson already recorded");
            return false;
        }
        record.completed_lessons.push(key.clone());

        let done_in_chapter = record.lessons_in_chapter(chapter_id).len();
        if self.settings.chapter_complete(done_in_chapter) && !record.has_chapter(chapter_id) {
            record.completed_chapters.push(chapter_id);
            info!(chapter = chapter_id, "chapter completed");
        }

        record.total_progress = self.settings.total_progress(record.completed_lessons.len());
        record.last_activity = Some(Utc::now());

        if !self.storage.set_json(PROGRESS_KEY, &record) {
            warn!(lesson = %key, "failed to persist progress");
        }
        info!(lesson = %key, total = record.total_progress, "lesson completed");
        true
    }

    // == Queries ==
    /// Completed lesson keys, optionally limited to one chapter.
    pub async fn completed_lessons(&self, chapter_id: Option<u32>) -> Vec<String> {
        let record = self.load();
        match chapter_id {
            Some(chapter_id) => record.lessons_in_chapter(chapter_id),
            None => record.completed_lessons,
        }
    }

    /// Current snapshot; an empty record if nothing has been stored yet.
    pub async fn progress(&self) -> ProgressRecord {
        self.load()
    }

    pub async fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.load().last_activity
    }

    fn load(&self) -> ProgressRecord {
        self.storage
            .get_json::<ProgressRecord>(PROGRESS_KEY)
            .unwrap_or_default()
    }
}
