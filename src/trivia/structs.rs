//! Decoded trivia data handed to the rest of the bot.
//!
//! The API payloads in [`response_structs`](crate::trivia::response_structs)
//! are HTML-encoded; everything in this module is plain text ready to be sent
//! to a room.

use std::fmt;

use html_escape::decode_html_entities;

use crate::trivia::response_structs::QuestionResponse;

/// Difficulty filter accepted by the question endpoint.
///
/// The user-facing `Any` label has no variant: it is represented as `None`
/// wherever a difficulty is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Labels accepted in the quiz command, in the order they are advertised.
    pub const LABELS: [&'static str; 4] = ["Easy", "Medium", "Hard", "Any"];

    /// Parses a user-facing label.
    ///
    /// Returns `Some(None)` for `Any`, `None` for an unknown label.
    /// Matching is case sensitive.
    pub fn from_label(label: &str) -> Option<Option<Difficulty>> {
        match label {
            "Easy" => Some(Some(Difficulty::Easy)),
            "Medium" => Some(Some(Difficulty::Medium)),
            "Hard" => Some(Some(Difficulty::Hard)),
            "Any" => Some(None),
            _ => None,
        }
    }

    /// Value of the `difficulty` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Filters of a question request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    /// Number of questions, between 1 and 10
    pub amount: u8,
    /// Category id, [`ANY_CATEGORY_ID`](crate::trivia::ANY_CATEGORY_ID) for no filter
    pub category_id: String,
    /// Difficulty filter, `None` for any difficulty
    pub difficulty: Option<Difficulty>,
}

impl fmt::Display for QuestionQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "amount={}, category_id={}, difficulty={:?}",
            self.amount, self.category_id, self.difficulty
        )
    }
}

/// A single question, decoded and ready to be asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaQuestion {
    /// Question text
    pub question: String,
    /// Incorrect answers followed by the correct one
    pub options: Vec<String>,
    /// Correct answer
    pub answer: String,
}

impl From<QuestionResponse> for TriviaQuestion {
    fn from(response: QuestionResponse) -> Self {
        let answer = unescape(&response.correct_answer);
        let options = response
            .incorrect_answers
            .iter()
            .map(|option| unescape(option))
            .chain(std::iter::once(answer.clone()))
            .collect();

        TriviaQuestion {
            question: unescape(&response.question),
            options,
            answer,
        }
    }
}

/// Decodes HTML entities such as `&quot;` or `&#039;`.
fn unescape(text: &str) -> String {
    decode_html_entities(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_label() {
        assert_eq!(Difficulty::from_label("Easy"), Some(Some(Difficulty::Easy)));
        assert_eq!(
            Difficulty::from_label("Medium"),
            Some(Some(Difficulty::Medium))
        );
        assert_eq!(Difficulty::from_label("Hard"), Some(Some(Difficulty::Hard)));
        assert_eq!(Difficulty::from_label("Any"), Some(None));
        assert_eq!(Difficulty::from_label("easy"), None);
        assert_eq!(Difficulty::from_label("Expert"), None);
    }

    #[test]
    fn test_difficulty_query_value() {
        assert_eq!(Difficulty::Easy.as_query(), "easy");
        assert_eq!(Difficulty::Medium.as_query(), "medium");
        assert_eq!(Difficulty::Hard.as_query(), "hard");
    }

    #[test]
    fn test_question_from_response_decodes_entities() {
        let response = QuestionResponse {
            question: "Who wrote &quot;Hamlet&quot;?".to_string(),
            correct_answer: "William Shakespeare".to_string(),
            incorrect_answers: vec![
                "Charles Dickens".to_string(),
                "Jane Austen".to_string(),
                "Mark Twain&#039;s cousin".to_string(),
            ],
        };

        let question = TriviaQuestion::from(response);

        assert_eq!(question.question, "Who wrote \"Hamlet\"?");
        assert_eq!(question.answer, "William Shakespeare");
        assert_eq!(
            question.options,
            vec![
                "Charles Dickens",
                "Jane Austen",
                "Mark Twain's cousin",
                "William Shakespeare"
            ]
        );
    }

    #[test]
    fn test_unescape_is_idempotent_on_plain_text() {
        let plain = "Which planet is known as the Red Planet?";
        assert_eq!(unescape(plain), plain);
        assert_eq!(unescape(&unescape(plain)), plain);

        let decoded = unescape("Tom &amp; Jerry");
        assert_eq!(decoded, "Tom & Jerry");
        assert_eq!(unescape(&decoded), decoded);
    }
}
