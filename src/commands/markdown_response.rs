//! Markdown response formatters for bot commands.
//!
//! This module provides functions to format bot responses in Markdown format
//! for display in Matrix chat rooms. Error messages are plain sentences so
//! they read the same with or without Markdown rendering.

use crate::trivia::{Difficulty, TriviaQuestion};

/// Separator between simplified category labels in the categories listing.
const CATEGORY_SEPARATOR: &str = ";\t";

/// Formats the help message showing the command syntax.
///
/// # Examples
///
/// ```
/// # use kerwhizz::commands::markdown_response::format_help;
/// let help = format_help();
/// assert!(help.contains("Commands:"));
/// ```
pub fn format_help() -> String {
    let body = "This is Kerwhizz, a bot designed to mediate quizzes in your room.\n\n\
        Commands:\n\
        - `!quiz`: show this help message\n\
        - `!quiz Categories`: list the categories to choose from\n\
        - `!quiz <N> <Difficulty> <Category>`: run a quiz\n    \
        - N: number of questions, between 1 and 10 (inclusive)\n    \
        - Difficulty: one of `Easy`, `Medium`, `Hard` or `Any`\n    \
        - Category: a category listed by `!quiz Categories`, or `Any`\n\n\
        Each question is followed by its answer a few seconds later.";

    body.to_owned()
}

/// Formats the list of simplified category labels, in the given order.
///
/// # Examples
///
/// ```
/// # use kerwhizz::commands::markdown_response::format_categories;
/// assert_eq!(format_categories(["Books", "Film"].into_iter()), "Books;\tFilm");
/// ```
pub fn format_categories<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<&str>>().join(CATEGORY_SEPARATOR)
}

/// Formats the error for a quiz command that does not have three arguments.
pub fn format_invalid_format() -> String {
    "Please enter your request as !quiz <num_questions> <difficulty> <category>.".to_owned()
}

/// Formats the error for a number of questions that is not a number.
pub fn format_not_a_number() -> String {
    "Please enter a number as the first argument.".to_owned()
}

/// Formats the error for a number of questions outside `1..=10`.
pub fn format_out_of_range() -> String {
    "Please enter a number between 1 and 10.".to_owned()
}

/// Formats the error for an unknown difficulty.
///
/// # Examples
///
/// ```
/// # use kerwhizz::commands::markdown_response::format_invalid_difficulty;
/// assert!(format_invalid_difficulty().ends_with("Easy, Medium, Hard, Any."));
/// ```
pub fn format_invalid_difficulty() -> String {
    format!(
        "Please enter a difficulty from the following: {}.",
        Difficulty::LABELS.join(", ")
    )
}

/// Formats the error for an unknown category.
pub fn format_invalid_category() -> String {
    "Please enter a valid category. See \"!quiz Categories\" for a list of available choices."
        .to_owned()
}

/// Formats a question followed by a bulleted list of its options.
///
/// # Examples
///
/// ```
/// # use kerwhizz::commands::markdown_response::format_question;
/// # use kerwhizz::trivia::TriviaQuestion;
/// let question = TriviaQuestion {
///     question: "2 + 2?".to_string(),
///     options: vec!["3".to_string(), "4".to_string()],
///     answer: "4".to_string(),
/// };
/// assert_eq!(format_question(&question), "**2 + 2?** \n- 3\n- 4");
/// ```
pub fn format_question(question: &TriviaQuestion) -> String {
    format!(
        "**{}** \n- {}",
        question.question,
        question.options.join("\n- ")
    )
}

/// Formats the reveal of an answer.
pub fn format_answer(answer: &str) -> String {
    format!("The answer is: **{}**", answer)
}

/// Formats the message sent when the trivia server could not be reached.
pub fn format_fetch_error() -> String {
    "Sorry, I could not fetch questions from the trivia server. Please try again later.".to_owned()
}

/// Formats the message sent when no question matches the filters.
pub fn format_no_questions() -> String {
    "No questions are available for this category and difficulty.".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_help() {
        let help = format_help();
        assert!(help.contains("!quiz Categories"));
        assert!(help.contains("!quiz <N> <Difficulty> <Category>"));
        assert!(help.contains("between 1 and 10"));
    }

    #[test]
    fn test_format_categories() {
        let labels = ["General Knowledge", " Books", " Film"];
        assert_eq!(
            format_categories(labels.into_iter()),
            "General Knowledge;\t Books;\t Film"
        );
    }

    #[test]
    fn test_format_categories_empty() {
        assert_eq!(format_categories(std::iter::empty()), "");
    }

    #[test]
    fn test_format_invalid_difficulty() {
        assert_eq!(
            format_invalid_difficulty(),
            "Please enter a difficulty from the following: Easy, Medium, Hard, Any."
        );
    }

    #[test]
    fn test_format_question() {
        let question = TriviaQuestion {
            question: "What is the capital of France?".to_string(),
            options: vec![
                "Lyon".to_string(),
                "Marseille".to_string(),
                "Nice".to_string(),
                "Paris".to_string(),
            ],
            answer: "Paris".to_string(),
        };

        assert_eq!(
            format_question(&question),
            "**What is the capital of France?** \n- Lyon\n- Marseille\n- Nice\n- Paris"
        );
    }

    #[test]
    fn test_format_answer() {
        assert_eq!(format_answer("Paris"), "The answer is: **Paris**");
    }
}
