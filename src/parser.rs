//! Completion text → structured lesson.
//!
//! Models wrap their JSON in prose or code fences, so the payload is located
//! first: a ```` ```json ```` fence wins, otherwise the span from the first
//! `{` to the last `}`. Any syntactically valid JSON object is accepted;
//! field types are coerced by the lesson model.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::error::ParseError;
use crate::fallback::fallback_content;
use crate::models::{ContentKind, GeneratedLesson};

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```json[ \t]*\r?\n(.*?)\r?\n[ \t]*```").expect("valid fence pattern")
});

static BRACED_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid object pattern"));

/// Locates the JSON candidate inside `text`, if any.
pub fn extract_payload(text: &str) -> Option<&str> {
    if let Some(captures) = JSON_FENCE.captures(text) {
        return captures.get(1).map(|m| m.as_str());
    }
    BRACED_OBJECT.find(text).map(|m| m.as_str())
}

/// Parses `text`, reporting why it failed.
pub fn try_parse(text: &str) -> Result<GeneratedLesson, ParseError> {
    let payload = extract_payload(text).ok_or(ParseError::NoPayload)?;
    let value: Value = serde_json::from_str(payload)?;
    if !value.is_object() {
        return Err(ParseError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

/// Parses `text`, substituting the fixed fallback lesson on any failure.
pub fn parse_response(text: &str) -> GeneratedLesson {
    parse_or_fallback(text, ContentKind::Lesson)
}

/// Parses `text`, substituting the fallback for `kind` on any failure.
pub fn parse_or_fallback(text: &str, kind: ContentKind) -> GeneratedLesson {
    try_parse(text).unwrap_or_else(|err| {
        warn!(kind = kind.as_str(), error = %err, "unparseable completion, using fallback content");
        fallback_content(kind)
    })
}
