//! Bot command parsing and response formatting.
//!
//! This module provides the complete command processing pipeline for the bot.
//!
//! # Overview
//!
//! 1. **Parsing** - Converting Matrix messages into structured [`command::Command`] enums
//! 2. **Validation** - Checking the quiz arguments against the category catalog
//! 3. **Execution** - Routing commands to specialized handlers
//! 4. **Response** - Formatting results as timed Markdown [`Step`](crate::sequencer::Step)s
//!
//! # Architecture
//!
//! ```text
//! Matrix Message
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: parse() + run_command(), or handle()
//! └─────────────┘
//!      │
//!      ├── parse() ──────────▶ command::Command
//!      │
//!      └── run_command() ────▶ Action Handlers
//!                               - handle_help
//!                               - handle_categories
//!                               - handle_quiz
//!                                     │
//!                                     ▼
//!                               Vec<Step>
//! ```
//!
//! # Command Structure
//!
//! | Command | Description |
//! |---------|-------------|
//! | `!quiz` | Display help information |
//! | `!quiz Categories` | List the categories |
//! | `!quiz <N> <Difficulty> <Category>` | Run a quiz of N questions |
//!
//! # Error Handling
//!
//! - **Silent Errors** ([`CommandParseError::NotForBot`]): messages that are not
//!   quiz commands. These never generate responses.
//! - **User Errors** ([`CommandParseError::InvalidCommand`]): invalid arguments.
//!   Every problem gets its own message and no question is requested.
//!
//! # Module Organization
//!
//! - [`commander`] - Main orchestrator for parsing and executing commands
//! - [`command`] - Command enum definitions, parsing and validation
//! - [`actions`] - Individual command handler implementations
//! - [`markdown_response`] - Response formatting utilities

mod actions;
mod command;
mod commander;
mod markdown_response;

pub use crate::commands::command::PREFIX;
pub use crate::commands::commander::Commander;

/// Errors that can occur during command parsing.
///
/// # Variants
///
/// * `NotForBot` - Message is not a quiz command.
///   Should be handled silently without responding to the user.
///
/// * `InvalidCommand` - Command syntax or arguments are invalid.
///   Contains one user-friendly message per problem, in argument order.
#[derive(Debug)]
pub enum CommandParseError {
    /// Message is not for this bot (silent error)
    NotForBot,
    /// Invalid command with error messages
    InvalidCommand(Vec<String>),
}
