//! Open Trivia Database integration.
//!
//! This module provides everything the bot needs from the trivia question bank:
//! HTTP requests, response deserialization, the category catalog and the
//! decoded questions handed to the sequencer.
//!
//! # Modules
//!
//! - `requester` - HTTP client for the category listing and question endpoints
//! - `response_structs` - Raw JSON payloads returned by the API
//! - `structs` - Decoded questions and difficulty levels
//! - `categories` - Immutable category catalog built once at startup

mod categories;
mod requester;
mod response_structs;
mod structs;

use std::fmt;

pub use crate::trivia::categories::CategoryMap;
#[cfg(test)]
pub use crate::trivia::requester::MockRequester;
pub use crate::trivia::requester::{Requester, TriviaRequester};
pub use crate::trivia::structs::{Difficulty, QuestionQuery, TriviaQuestion};

/// Category id meaning "any category", never sent to the API.
pub const ANY_CATEGORY_ID: &str = "0";

/// Errors raised while talking to the trivia API.
#[derive(Debug)]
pub enum FetchError {
    /// The HTTP request failed or the body was not the expected JSON.
    Request(reqwest::Error),
    /// The API answered with a non-zero `response_code`.
    ///
    /// See <https://opentdb.com/api_config.php> for the meaning of each code.
    Api(u8),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "trivia request failed: {}", e),
            FetchError::Api(code) => write!(f, "trivia api returned response code {}", code),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Request(e) => Some(e),
            FetchError::Api(_) => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            FetchError::Api(2).to_string(),
            "trivia api returned response code 2"
        );
    }
}
