//! Content Client Module
//!
//! Generates lesson material through a direct completion call with a proxied
//! retry, caching full lessons and degrading to canned content where allowed.

mod content;
pub mod strategy;
pub mod transport;

pub use content::ContentClient;
pub use strategy::request_completion;
pub use transport::{CompletionOutcome, CompletionTransport, HttpTransport, PROXY_PATH};
