//! Command action handlers.
//!
//! Individual handler functions for each bot command. Each handler returns
//! the ordered [`Step`](crate::sequencer::Step)s to send back to the room.
//!
//! # Available Handlers
//!
//! - [`handle_help`] - Display help information
//! - [`handle_categories`] - List the simplified category labels
//! - [`handle_quiz`] - Fetch questions and build the timed quiz sequence

mod categories;
mod help;
mod quiz;

pub use crate::commands::actions::{
    categories::handle_categories, help::handle_help, quiz::handle_quiz,
};
