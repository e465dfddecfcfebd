//! Canned completions served when the proxy has no upstream credential.

use serde_json::json;

use crate::config::DEFAULT_MODEL;
use crate::models::{ChatCompletionResponse, ContentKind};

/// A completion shaped like the real service's, picked by request kind.
pub fn mock_completion(kind: Option<ContentKind>) -> ChatCompletionResponse {
    let content = match kind {
        Some(ContentKind::Lesson) | Some(ContentKind::Enhanced) => mock_lesson(),
        Some(ContentKind::Examples) => mock_examples(),
        Some(ContentKind::Exercises) => mock_exercises(),
        None => "This is a test response. The live service is used once an API key is configured."
            .to_string(),
    };

    let mut response = ChatCompletionResponse::from_content(content);
    response.id = Some("mock_completion".to_string());
    response.model = Some(DEFAULT_MODEL.to_string());
    response
}

fn mock_lesson() -> String {
    json!({
        "title": "Introduction to Python",
        "theory": "Python is a high-level, interpreted programming language...",
        "examples": [{
            "title": "Hello world",
            "code": "print(\"Hello, world!\")",
            "explanation": "The first Python program"
        }],
        "exercises": [{
            "title": "Print your name",
            "question": "Write a program that prints your name.",
            "difficulty": "easy",
            "hint": "Use the print function",
            "solution": "print(\"Your name\")"
        }],
        "key_points": ["Python is simple", "It is easy to learn"],
        "practical_applications": "Automation, web, data mining"
    })
    .to_string()
}

fn mock_examples() -> String {
    json!({
        "examples": [
            {
                "title": "Working with lists",
                "code": "fruits = ['apple', 'pear']\nfruits.append('plum')\nprint(fruits)",
                "explanation": "append adds an item to the end of a list"
            },
            {
                "title": "Nested loops",
                "code": "for i in range(3):\n    for j in range(3):\n        print(i, j)",
                "explanation": "The inner loop runs fully for every outer step"
            },
            {
                "title": "Recursive function",
                "code": "def fact(n):\n    return 1 if n <= 1 else n * fact(n - 1)\nprint(fact(5))",
                "explanation": "A function that calls itself on a smaller input"
            }
        ]
    })
    .to_string()
}

fn mock_exercises() -> String {
    json!({
        "exercises": [
            {
                "title": "Simple calculator",
                "question": "Read two numbers and an operator, then print the result.",
                "difficulty": "easy",
                "hint": "Use input() and if/elif",
                "solution": "a = float(input())\nop = input()\nb = float(input())\nprint(a + b if op == '+' else a - b)"
            },
            {
                "title": "Guess the number",
                "question": "Pick a random number and let the user guess until correct.",
                "difficulty": "medium",
                "hint": "random.randint and a while loop",
                "solution": "import random\nn = random.randint(1, 10)\nwhile int(input()) != n:\n    print('again')\nprint('correct')"
            },
            {
                "title": "Contact book",
                "question": "Store names and phone numbers and look one up by name.",
                "difficulty": "medium",
                "hint": "A dictionary maps names to numbers",
                "solution": "book = {'Ali': '0912'}\nprint(book.get(input(), 'not found'))"
            }
        ]
    })
    .to_string()
}
