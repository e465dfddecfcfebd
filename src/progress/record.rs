//! Persisted progress snapshot and the aggregation rules over it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_LESSONS_PER_CHAPTER, DEFAULT_TOTAL_LESSONS};

/// Storage key for a completed lesson, `"{chapter}.{lesson}"`.
pub fn lesson_key(chapter_id: u32, lesson_id: u32) -> String {
    format!("{}.{}", chapter_id, lesson_id)
}

// == Progress Record ==
/// Learner progress as written to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    /// Chapters with enough completed lessons, in completion order
    pub completed_chapters: Vec<u32>,
    /// `"{chapter}.{lesson}"` keys, each at most once, in completion order
    pub completed_lessons: Vec<String>,
    /// Overall percentage, 0-100
    pub total_progress: u8,
    pub last_activity: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    pub fn has_lesson(&self, key: &str) -> bool {
        self.completed_lessons.iter().any(|k| k == key)
    }

    pub fn has_chapter(&self, chapter_id: u32) -> bool {
        self.completed_chapters.contains(&chapter_id)
    }

    /// Completed lesson keys belonging to `chapter_id`, in completion order.
    pub fn lessons_in_chapter(&self, chapter_id: u32) -> Vec<String> {
        let prefix = format!("{}.", chapter_id);
        self.completed_lessons
            .iter()
            .filter(|key| key.starts_with(&prefix))
            .cloned()
            .collect()
    }
}

// == Progress Settings ==
/// Curriculum shape assumed by the aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSettings {
    pub lessons_per_chapter: usize,
    pub total_lessons: usize,
}

impl ProgressSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            lessons_per_chapter: config.lessons_per_chapter,
            total_lessons: config.total_lessons,
        }
    }

    /// `min(100, round(completed / total_lessons * 100))`.
    pub fn total_progress(&self, completed: usize) -> u8 {
        let total = self.total_lessons.max(1) as f64;
        let percent = (completed as f64 / total * 100.0).round();
        percent.min(100.0) as u8
    }

    pub fn chapter_complete(&self, lessons_done: usize) -> bool {
        lessons_done >= self.lessons_per_chapter
    }
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            lessons_per_chapter: DEFAULT_LESSONS_PER_CHAPTER,
            total_lessons: DEFAULT_TOTAL_LESSONS,
        }
    }
}
