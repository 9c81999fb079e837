//! Command parsing and validation.
//!
//! This module converts Matrix message text into structured [`Command`] enums.
//! A quiz command carries three arguments separated by single spaces:
//! `!quiz <N> <Difficulty> <Category>`. The category is everything after the
//! second space, so it may itself contain spaces.

use log::debug;

use crate::commands::markdown_response::{
    format_invalid_category, format_invalid_difficulty, format_invalid_format,
    format_not_a_number, format_out_of_range,
};
use crate::trivia::{ANY_CATEGORY_ID, CategoryMap, Difficulty, QuestionQuery};

/// Prefix of every bot command.
pub const PREFIX: &str = "!quiz";
/// Argument listing the categories.
const CATEGORIES_ARGUMENT: &str = "Categories";
/// Argument meaning "no category filter".
const ANY_CATEGORY: &str = "Any";
/// Maximum number of questions per quiz.
const MAX_QUESTIONS: i64 = 10;

/// Represents a parsed bot command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Display help information
    Help,
    /// List the simplified category labels
    Categories,
    /// Run a quiz with validated filters
    Quiz(QuestionQuery),
}

/// A rejected quiz argument.
#[derive(Debug, PartialEq, Eq)]
pub enum ArgumentError {
    /// The number of questions is not an integer
    NotANumber,
    /// The number of questions is outside `1..=10`
    OutOfRange,
    /// The difficulty is not one of [`Difficulty::LABELS`]
    Difficulty,
    /// The category is neither a simplified label nor `Any`
    Category,
}

/// Errors that can occur during command parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParsingError {
    /// The message does not start with the command prefix
    NotQuiz,
    /// The quiz arguments could not be split in three
    InvalidFormat,
    /// One or more quiz arguments are invalid, in argument order
    InvalidArguments(Vec<ArgumentError>),
}

impl Command {
    /// Parses a message string into a Command.
    ///
    /// The message must start with `!quiz` followed by the end of the message
    /// or whitespace. Every argument check runs, so all applicable errors are
    /// reported at once; a command with any invalid argument is rejected.
    ///
    /// # Arguments
    ///
    /// * `body` - The message text to parse
    /// * `categories` - The category catalog used to resolve the category
    ///
    /// # Errors
    ///
    /// - The message is not a quiz command - [`CommandParsingError::NotQuiz`]
    /// - The arguments are not three tokens - [`CommandParsingError::InvalidFormat`]
    /// - Some arguments are invalid - [`CommandParsingError::InvalidArguments`]
    ///
    /// # Examples
    ///
    /// ```
    /// # use kerwhizz::commands::command::Command;
    /// # use kerwhizz::trivia::CategoryMap;
    /// let categories = CategoryMap::new([("General Knowledge", 9)]);
    /// let result = Command::parse("!quiz", &categories);
    /// assert!(matches!(result, Ok(Command::Help)));
    /// ```
    pub fn parse(body: &str, categories: &CategoryMap) -> Result<Self, CommandParsingError> {
        let Some(arguments) = body.strip_prefix(PREFIX) else {
            return Err(CommandParsingError::NotQuiz);
        };

        // Ignore words that only start with the prefix, like `!quizzes`
        if !arguments.is_empty() && !arguments.starts_with(char::is_whitespace) {
            return Err(CommandParsingError::NotQuiz);
        }

        let arguments = arguments.trim();
        debug!("parsing quiz arguments: {:?}", arguments);

        if arguments.is_empty() {
            return Ok(Command::Help);
        }
        if arguments == CATEGORIES_ARGUMENT {
            return Ok(Command::Categories);
        }

        let mut tokens = arguments.splitn(3, ' ');
        let (Some(amount), Some(difficulty), Some(category)) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(CommandParsingError::InvalidFormat);
        };

        Self::parse_quiz(amount, difficulty, category, categories).map(Command::Quiz)
    }

    fn parse_quiz(
        amount: &str,
        difficulty: &str,
        category: &str,
        categories: &CategoryMap,
    ) -> Result<QuestionQuery, CommandParsingError> {
        let mut errors = vec![];

        let amount = match amount.parse::<i64>() {
            Ok(amount) if (1..=MAX_QUESTIONS).contains(&amount) => Some(amount as u8),
            Ok(_) => {
                errors.push(ArgumentError::OutOfRange);
                None
            }
            Err(_) if is_integer(amount) => {
                errors.push(ArgumentError::OutOfRange);
                None
            }
            Err(_) => {
                errors.push(ArgumentError::NotANumber);
                None
            }
        };

        let difficulty = Difficulty::from_label(difficulty);
        if difficulty.is_none() {
            errors.push(ArgumentError::Difficulty);
        }

        let category_id = match category.trim() {
            ANY_CATEGORY => Some(ANY_CATEGORY_ID),
            label => categories.simplified_id(label),
        };
        if category_id.is_none() {
            errors.push(ArgumentError::Category);
        }

        match (amount, difficulty, category_id) {
            (Some(amount), Some(difficulty), Some(category_id)) => {
                let query = QuestionQuery {
                    amount,
                    category_id: category_id.to_owned(),
                    difficulty,
                };
                debug!("parsed quiz command - {}", query);
                Ok(query)
            }
            _ => {
                debug!("invalid quiz arguments: {:?}", errors);
                Err(CommandParsingError::InvalidArguments(errors))
            }
        }
    }
}

/// Whether `token` is an optionally signed run of ASCII digits, whatever its size.
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Formats a command error into user-friendly messages.
///
/// Returns one message per problem, in argument order, or `None` when the
/// message was not a quiz command and must not get an answer.
///
/// # Examples
///
/// ```
/// # use kerwhizz::commands::command::{format_command_error, CommandParsingError};
/// let messages = format_command_error(CommandParsingError::InvalidFormat);
/// assert_eq!(messages.unwrap().len(), 1);
/// ```
pub fn format_command_error(error: CommandParsingError) -> Option<Vec<String>> {
    match error {
        CommandParsingError::NotQuiz => None,
        CommandParsingError::InvalidFormat => Some(vec![format_invalid_format()]),
        CommandParsingError::InvalidArguments(errors) => Some(
            errors
                .iter()
                .map(|error| match error {
                    ArgumentError::NotANumber => format_not_a_number(),
                    ArgumentError::OutOfRange => format_out_of_range(),
                    ArgumentError::Difficulty => format_invalid_difficulty(),
                    ArgumentError::Category => format_invalid_category(),
                })
                .collect(),
        ),
    }
}
