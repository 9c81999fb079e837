//! Kerwhizz - A Matrix bot running trivia quizzes in chat rooms.
//!
//! This is the main entry point for the Kerwhizz bot, which bridges Matrix
//! messaging with the Open Trivia Database.
//!
//! # Overview
//!
//! Kerwhizz joins the rooms it is invited to and listens for `!quiz` commands.
//! A quiz posts multiple-choice questions one by one, reveals each answer after
//! a pause, and moves on to the next question.
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! trivia:
//!   url: "https://opentdb.com"
//!   answer_wait_time: 10
//!   next_question_wait_time: 3
//!
//! matrix:
//!   user_id: "@kerwhizz:matrix.org"
//!   device_id: "KERWHIZZ"
//!   access_token: "syt_..."
//! ```
//!
//! Any value can be overridden with a `KERWHIZZ_` environment variable:
//!
//! ```bash
//! export KERWHIZZ_MATRIX__ACCESS_TOKEN="syt_..."
//! ```
//!
//! # Usage
//!
//! ```bash
//! kerwhizz --config config.yaml
//! ```
//!
//! # Bot Commands
//!
//! - `!quiz` - Display help information
//! - `!quiz Categories` - List the available categories
//! - `!quiz <N> <Difficulty> <Category>` - Run a quiz of 1 to 10 questions
//!
//! # Architecture
//!
//! - [`bot`] - Startup sequence and message loop
//! - [`commands`] - Command parsing, validation and responses
//! - [`config`] - YAML configuration with environment variable support
//! - [`matrix`] - Matrix client integration and session restoration
//! - [`sequencer`] - Timed delivery of response messages
//! - [`trivia`] - Trivia server API client and category catalog
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod commands;
mod config;
mod matrix;
mod sequencer;
mod trivia;

/// Command-line arguments for the Kerwhizz bot.
///
/// # Examples
///
/// ```bash
/// kerwhizz --config config.yaml
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// See the [`config`] module for the expected format.
    #[arg(short, long)]
    config: String,
}

/// Main entry point for the Kerwhizz bot.
///
/// 1. Configures the logger with `info` level by default
/// 2. Parses command-line arguments
/// 3. Loads the configuration file and its environment overrides
/// 4. Loads the category catalog and restores the Matrix session
/// 5. Runs the Matrix sync loop until it fails
///
/// Any startup failure is logged and ends the process.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug kerwhizz --config config.yaml
/// ```
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting kerwhizz {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    let bot = match Bot::new(config).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return;
        }
    };

    if let Err(e) = bot.start().await {
        error!("Bot stopped: {}", e);
    }
}
