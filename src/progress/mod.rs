//! Progress Module
//!
//! Lesson → chapter → overall completion tracking over durable storage.

mod record;
mod store;


pub use record::{lesson_key, ProgressRecord, ProgressSettings};
pub use store::{ProgressStore, PROGRESS_KEY};
