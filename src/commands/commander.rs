//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, which serves as the main entry point
//! for processing bot commands. It coordinates command parsing and execution, routing
//! commands to their appropriate handlers.
//!
//! # Flow
//!
//! ```text
//! Matrix Message → parse() → Command → run_command() → Vec<Step>
//! ```
//!
//! [`Commander::handle`] chains both phases and is a pure function of the
//! message text and the state injected at construction; it never sends anything
//! itself.

use crate::{
    commands::{
        CommandParseError,
        actions::{handle_categories, handle_help, handle_quiz},
        command::{Command, format_command_error},
    },
    sequencer::{Step, Timings},
    trivia::{CategoryMap, Requester},
};

/// Command orchestrator for parsing and executing bot commands.
///
/// Holds the immutable state every command needs: the trivia requester, the
/// category catalog loaded at startup and the quiz timings.
///
/// # Command Prefix
///
/// All commands must start with the `!quiz` prefix. Messages without this prefix
/// are silently ignored (returning [`CommandParseError::NotForBot`]).
pub struct Commander<R: Requester> {
    /// Trivia server requester
    requester: R,
    /// Category catalog, read-only after startup
    categories: CategoryMap,
    /// Delays of the quiz sequence
    timings: Timings,
}

impl<R: Requester> Commander<R> {
    /// Creates a new Commander instance.
    ///
    /// # Arguments
    ///
    /// * `requester` - An implementation of the [Requester] trait to fetch questions
    /// * `categories` - The category catalog loaded at startup
    /// * `timings` - Delays between questions and answers
    pub fn new(requester: R, categories: CategoryMap, timings: Timings) -> Self {
        Commander {
            requester,
            categories,
            timings,
        }
    }

    /// Parses a Matrix message body into a structured command.
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - Successfully parsed and validated command
    /// * `Err(CommandParseError::NotForBot)` - Message is not a quiz command
    /// * `Err(CommandParseError::InvalidCommand)` - Invalid command, with one message per problem
    pub fn parse(&self, body: &str) -> Result<Command, CommandParseError> {
        Command::parse(body, &self.categories).map_err(|error| {
            match format_command_error(error) {
                Some(messages) => CommandParseError::InvalidCommand(messages),
                None => CommandParseError::NotForBot,
            }
        })
    }

    /// Executes a parsed command and returns the steps to send.
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Help`] → [`handle_help`]
    /// - [`Command::Categories`] → [`handle_categories`]
    /// - [`Command::Quiz`] → [`handle_quiz`]
    pub async fn run_command(&self, command: &Command) -> Vec<Step> {
        match command {
            Command::Help => handle_help(),
            Command::Categories => handle_categories(&self.categories),
            Command::Quiz(query) => handle_quiz(&self.requester, query, &self.timings).await,
        }
    }

    /// Parses and executes a message.
    ///
    /// Returns `None` when the message is not for the bot. Invalid commands
    /// produce one immediate step per error message and no trivia request.
    pub async fn handle(&self, body: &str) -> Option<Vec<Step>> {
        match self.parse(body) {
            Ok(command) => Some(self.run_command(&command).await),
            Err(CommandParseError::NotForBot) => None,
            Err(CommandParseError::InvalidCommand(messages)) => {
                Some(messages.into_iter().map(Step::now).collect())
            }
        }
    }
}
