//! Prompt construction
//!
//! Pure builders for the four request kinds. Each prompt ends with the exact
//! JSON shape the model must answer with, which is what the response parser
//! looks for.

use crate::models::{ContentKind, GenerationOptions};

/// Difficulty used when the caller does not specify one.
pub const DEFAULT_DIFFICULTY: &str = "beginner";

const LESSON_SCHEMA: &str = r#"{
  "title": "Lesson title",
  "theory": "Complete theory section",
  "examples": [
    {
      "title": "Example title",
      "code": "Python code",
      "explanation": "What the example shows"
    }
  ],
  "exercises": [
    {
      "title": "Exercise title",
      "question": "Exercise statement",
      "difficulty": "easy/medium",
      "hint": "Hint",
      "solution": "Full solution"
    }
  ],
  "key_points": ["Point 1", "Point 2"],
  "practical_applications": "Practical applications"
}"#;

const EXAMPLES_SCHEMA: &str = r#"{
  "examples": [
    {
      "title": "Example title",
      "code": "Python code",
      "explanation": "What the example shows"
    }
  ]
}"#;

const EXERCISES_SCHEMA: &str = r#"{
  "exercises": [
    {
      "title": "Exercise title",
      "question": "Exercise statement",
      "difficulty": "easy/medium/hard",
      "hint": "Hint",
      "solution": "Full solution"
    }
  ]
}"#;

const SCHEMA_INSTRUCTION: &str =
    "Reply with a single ```json fenced block using exactly this structure and no other text:";

// Phrases that only appear in one kind of prompt; `detect_kind` keys off them.
const LESSON_MARKER: &str = "complete lesson";
const ENHANCED_MARKER: &str = "supplementary advanced material";
const EXAMPLES_MARKER: &str = "new code examples";
const EXERCISES_MARKER: &str = "practice exercises";

/// Prompt for a full lesson.
pub fn lesson_prompt(chapter_title: &str, lesson_title: &str, options: &GenerationOptions) -> String {
    let difficulty = options.difficulty.as_deref().unwrap_or(DEFAULT_DIFFICULTY);
    format!(
        r#"As a professional Python teacher who teaches in Persian, write a {LESSON_MARKER} about "{lesson_title}" from the chapter "{chapter_title}".

Lesson requirements:
1. Theory explained in fluent, simple Persian
2. At least 3 runnable code examples, each with an explanation
3. 2 easy and 2 medium exercises with solutions
4. Key points and best practices
5. Practical use in real projects

Level: {difficulty}
Language: fluent Persian

{SCHEMA_INSTRUCTION}
{LESSON_SCHEMA}"#
    )
}

/// Prompt for deeper material on top of what the learner already has.
///
/// `current_content` is embedded verbatim as context.
pub fn enhanced_prompt(
    chapter_title: &str,
    lesson_title: &str,
    topic: &str,
    current_content: &str,
) -> String {
    format!(
        r#"As a Python teacher, write {ENHANCED_MARKER} about "{topic}" for the lesson "{lesson_title}" in the chapter "{chapter_title}".

Current content:
{current_content}

Please:
1. Add more advanced notes
2. Give more complex code samples
3. Explain common mistakes
4. List best practices
5. Suggest resources for further study

Language: Persian
Level: advanced

{SCHEMA_INSTRUCTION}
{LESSON_SCHEMA}"#
    )
}

/// Prompt for `count` extra code examples.
pub fn examples_prompt(topic: &str, difficulty: &str, count: usize) -> String {
    format!(
        r#"As a Python teacher, write {count} {EXAMPLES_MARKER} about "{topic}" for a {difficulty} learner.

Each one needs a short title, runnable code, and a Persian explanation of what it does.

Language: Persian

{SCHEMA_INSTRUCTION}
{EXAMPLES_SCHEMA}"#
    )
}

/// Prompt for `count` extra exercises.
pub fn exercises_prompt(topic: &str, difficulty: &str, count: usize) -> String {
    format!(
        r#"As a Python teacher, write {count} {EXERCISES_MARKER} about "{topic}" at {difficulty} level.

Give each one a title, the question, a hint, and a full worked solution.

Language: Persian

{SCHEMA_INSTRUCTION}
{EXERCISES_SCHEMA}"#
    )
}

/// Best-effort guess of which builder produced `prompt`.
///
/// Used by the proxy to pick a canned answer when it has no upstream credential.
pub fn detect_kind(prompt: &str) -> Option<ContentKind> {
    let lowered = prompt.to_lowercase();
    if lowered.contains(LESSON_MARKER) {
        Some(ContentKind::Lesson)
    } else if lowered.contains(ENHANCED_MARKER) {
        Some(ContentKind::Enhanced)
    } else if lowered.contains(EXERCISES_MARKER) {
        Some(ContentKind::Exercises)
    } else if lowered.contains(EXAMPLES_MARKER) {
        Some(ContentKind::Examples)
    } else {
        None
    }
}
