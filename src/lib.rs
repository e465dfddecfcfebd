//! Lesson Coach - AI-generated Python lessons for a tutoring mini-app
//!
//! A content client that asks a chat-completion service for lessons and
//! supplements, tries a direct connection before a credential-holding
//! proxy, caches lessons in a bounded FIFO cache and substitutes fixed
//! fallback content when generation fails. Also provides the proxy server
//! itself and a persistent per-learner progress store.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod parser;
pub mod progress;
pub mod prompt;
pub mod storage;

pub use api::AppState;
pub use client::ContentClient;
pub use config::Config;
pub use error::{ContentError, RequestFailure};
pub use progress::ProgressStore;
