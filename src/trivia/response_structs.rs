//! Response structures for the Open Trivia Database endpoints.
//!
//! This module contains structures for deserializing JSON responses from
//! the trivia API. Text fields are still HTML-encoded at this stage.

use serde::Deserialize;

/// Response from `/api_category.php`.
#[derive(Deserialize, Debug)]
pub struct CategoriesResponse {
    /// Categories in the order the API lists them.
    pub trivia_categories: Vec<CategoryResponse>,
}

/// A category from `/api_category.php`.
#[derive(Deserialize, Debug, Clone)]
pub struct CategoryResponse {
    /// Numeric identifier used in the `category` query parameter.
    pub id: u32,
    /// Label, often formatted `Domain: Subtopic`.
    pub name: String,
}

/// Response from `/api.php`.
#[derive(Deserialize, Debug)]
pub struct QuestionsResponse {
    /// `0` on success, see <https://opentdb.com/api_config.php>.
    #[serde(default)]
    pub response_code: u8,
    /// Returned questions, possibly fewer than requested.
    pub results: Vec<QuestionResponse>,
}

/// A question from `/api.php`.
///
/// Only the fields the bot uses are deserialized; `type`, `difficulty` and
/// `category` are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct QuestionResponse {
    /// HTML-encoded question text.
    pub question: String,
    /// HTML-encoded correct answer.
    pub correct_answer: String,
    /// HTML-encoded wrong answers.
    pub incorrect_answers: Vec<String>,
}
