//! Generated lesson content
//!
//! The shape the completion service is asked to produce and the rendering
//! layer consumes. Every field defaults so partial payloads still parse, and
//! mistyped fields are coerced instead of rejecting the whole lesson: null
//! becomes empty, other scalars are stringified, non-arrays become empty lists.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::requests::RequestParams;

/// One runnable code example inside a lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonExample {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(deserialize_with = "lenient_string")]
    pub explanation: String,
}

/// One practice exercise with its hint and worked solution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonExercise {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub question: String,
    #[serde(deserialize_with = "lenient_string")]
    pub difficulty: String,
    #[serde(deserialize_with = "lenient_string")]
    pub hint: String,
    #[serde(deserialize_with = "lenient_string")]
    pub solution: String,
}

/// Structured lesson returned by every generation operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedLesson {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub theory: String,
    #[serde(deserialize_with = "lenient_items")]
    pub examples: Vec<LessonExample>,
    #[serde(deserialize_with = "lenient_items")]
    pub exercises: Vec<LessonExercise>,
    #[serde(deserialize_with = "lenient_strings")]
    pub key_points: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub practical_applications: String,
}

// == Lenient Field Decoding ==
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

/// Items that are not objects are dropped.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

// == Content Kind ==
/// The four kinds of material the client can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Full lesson for a chapter/lesson pair
    Lesson,
    /// Deeper material layered on top of existing lesson content
    Enhanced,
    /// Additional code examples for a topic
    Examples,
    /// Additional practice exercises for a topic
    Exercises,
}

impl ContentKind {
    /// Default sampling parameters for this kind of request.
    pub fn request_params(self) -> RequestParams {
        match self {
            ContentKind::Lesson => RequestParams::new(0.7, 1500),
            ContentKind::Enhanced => RequestParams::new(0.8, 1000),
            ContentKind::Examples => RequestParams::new(0.7, 800),
            ContentKind::Exercises => RequestParams::new(0.6, 600),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Lesson => "lesson",
            ContentKind::Enhanced => "enhanced",
            ContentKind::Examples => "examples",
            ContentKind::Exercises => "exercises",
        }
    }
}
