//! Data models for lesson content and the completion wire format
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing lessons, completion requests and responses.

pub mod lesson;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use lesson::{ContentKind, GeneratedLesson, LessonExample, LessonExercise};
pub use requests::{
    ChatCompletionRequest, ChatMessage, GenerationOptions, ProxyOptions, ProxyRequest,
    RequestParams, CLIENT_PERSONA,
};
pub use responses::{ChatCompletionResponse, Choice, ChoiceMessage, ClientStatus, HealthResponse};
