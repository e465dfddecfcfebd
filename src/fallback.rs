//! Canned content served when live generation is unavailable or unusable.
//!
//! The payloads do not depend on the requested topic or difficulty.

use crate::models::{ContentKind, GeneratedLesson, LessonExample, LessonExercise};

/// Deterministic placeholder for the given request kind.
pub fn fallback_content(kind: ContentKind) -> GeneratedLesson {
    match kind {
        ContentKind::Lesson => fallback_lesson(),
        ContentKind::Enhanced => fallback_enhanced(),
        ContentKind::Examples => fallback_examples(),
        ContentKind::Exercises => fallback_exercises(),
    }
}

/// The lesson returned whenever a completion cannot be parsed.
pub fn fallback_lesson() -> GeneratedLesson {
    GeneratedLesson {
        title: "Learning Python".to_string(),
        theory: "In this lesson you get to know the basic concepts of Python...".to_string(),
        examples: vec![example(
            "First program",
            "print('Hello, world!')",
            "Your first Python program",
        )],
        exercises: vec![exercise(
            "Simple exercise",
            "Write a program that prints your name.",
            "easy",
            "Use the print function",
            "print('Your name')",
        )],
        key_points: vec![
            "Python is a simple language".to_string(),
            "It is a great place to start".to_string(),
        ],
        practical_applications: "Automation, data analysis, websites".to_string(),
    }
}

fn fallback_enhanced() -> GeneratedLesson {
    GeneratedLesson {
        title: "Going further".to_string(),
        theory: "Extra material is not available right now. Review the examples above and \
                 try changing them to see how the output changes."
            .to_string(),
        examples: vec![example(
            "List comprehension",
            "squares = [n * n for n in range(10)]\nprint(squares)",
            "Builds a list in a single expression instead of a loop",
        )],
        exercises: Vec::new(),
        key_points: vec![
            "Read error messages from the last line up".to_string(),
            "Prefer clear names over short ones".to_string(),
            "Test small pieces before combining them".to_string(),
        ],
        practical_applications: "Official Python tutorial: https://docs.python.org/3/tutorial/"
            .to_string(),
    }
}

fn fallback_examples() -> GeneratedLesson {
    GeneratedLesson {
        title: "More examples".to_string(),
        examples: vec![
            example(
                "Counting with range",
                "for i in range(1, 6):\n    print(i)",
                "Prints the numbers 1 through 5",
            ),
            example(
                "Summing a list",
                "numbers = [3, 5, 7]\nprint(sum(numbers))",
                "Adds every item in the list with the built-in sum",
            ),
            example(
                "Looping over a dictionary",
                "ages = {'Ali': 20, 'Sara': 22}\nfor name, age in ages.items():\n    print(name, age)",
                "items() yields key/value pairs",
            ),
        ],
        ..GeneratedLesson::default()
    }
}

fn fallback_exercises() -> GeneratedLesson {
    GeneratedLesson {
        title: "More exercises".to_string(),
        exercises: vec![
            exercise(
                "Even numbers",
                "Print every even number between 1 and 20.",
                "easy",
                "Use range with a step or the % operator",
                "for n in range(2, 21, 2):\n    print(n)",
            ),
            exercise(
                "Word count",
                "Count how many words a sentence contains.",
                "easy",
                "str.split() breaks text on whitespace",
                "sentence = 'python is fun'\nprint(len(sentence.split()))",
            ),
            exercise(
                "Largest item",
                "Find the largest number in a list without using max().",
                "medium",
                "Keep track of the biggest value seen so far",
                "numbers = [4, 9, 2]\nlargest = numbers[0]\nfor n in numbers:\n    if n > largest:\n        largest = n\nprint(largest)",
            ),
        ],
        ..GeneratedLesson::default()
    }
}

fn example(title: &str, code: &str, explanation: &str) -> LessonExample {
    LessonExample {
        title: title.to_string(),
        code: code.to_string(),
        explanation: explanation.to_string(),
    }
}

fn exercise(title: &str, question: &str, difficulty: &str, hint: &str, solution: &str) -> LessonExercise {
    LessonExercise {
        title: title.to_string(),
        question: question.to_string(),
        difficulty: difficulty.to_string(),
        hint: hint.to_string(),
        solution: solution.to_string(),
    }
}
