//! Bot module wiring Matrix messaging to the quiz commands.
//!
//! This module provides the main [`Bot`] implementation that connects a Matrix
//! client with the trivia server. It owns the startup sequence and the message
//! loop.
//!
//! # Startup
//!
//! 1. Load the category catalog from the trivia server (fatal on failure)
//! 2. Restore the Matrix session from the access token
//!
//! # Command Processing Flow
//!
//! ```text
//! Matrix Message → Commander::handle → Vec<Step> → sequencer::play → Matrix Room
//! ```
//!
//! Each message is handled in its own task so the Matrix sync loop is never
//! blocked. Handling is serialized by a single lock held until the last step
//! of a command is sent: one quiz runs at a time and later commands wait for it
//! to finish. A running quiz cannot be cancelled.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::Mutex;

use crate::{
    commands::{Commander, PREFIX},
    config::Config,
    matrix::{MatrixClient, UserCredentials},
    sequencer::{ChannelSink, play},
    trivia::{CategoryMap, Requester, TriviaRequester},
};

/// Context for processing a Matrix message.
struct MessageContext {
    /// The message body text
    body: String,
    /// The Matrix room ID where the message was sent
    room_id: String,
    /// The Matrix user ID who sent the message
    sender_id: String,
    /// Thread-safe reference to the Matrix client
    matrix_client: Arc<MatrixClient>,
    /// Thread-safe reference to the command handler
    commander: Arc<Commander<TriviaRequester>>,
    /// Lock serializing command handling
    quiz_lock: Arc<Mutex<()>>,
}

/// Main bot structure that integrates Matrix messaging with the trivia server.
pub struct Bot {
    /// Matrix client for receiving messages and sending responses.
    matrix_client: Arc<MatrixClient>,

    /// Command parser and executor, holding the category catalog.
    commander: Arc<Commander<TriviaRequester>>,

    /// Held for the whole handling of a command.
    quiz_lock: Arc<Mutex<()>>,
}

impl Bot {
    /// Creates a new Bot instance from configuration.
    ///
    /// The category catalog is loaded before connecting to Matrix, so an
    /// unreachable trivia server stops the bot before it joins any room.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The category catalog cannot be loaded
    /// - The Matrix session cannot be restored
    pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
        let timings = config.trivia.timings();
        let requester = TriviaRequester::new(&config.trivia.url);

        let categories = CategoryMap::load(&requester).await?;
        if categories.is_empty() {
            warn!("trivia server returned no category, only `Any` can be used");
        }

        let commander = Arc::new(Commander::new(requester, categories, timings));

        let matrix_client = Arc::new(
            MatrixClient::new(&UserCredentials {
                user_id: config.matrix.user_id,
                device_id: config.matrix.device_id,
                access_token: config.matrix.access_token,
            })
            .await?,
        );

        Ok(Bot {
            matrix_client,
            commander,
            quiz_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Starts the bot and processes messages until the sync loop ends.
    ///
    /// # Errors
    ///
    /// Returns the error that ended the Matrix sync loop.
    pub async fn start(self) -> Result<(), anyhow::Error> {
        let matrix_client = Arc::clone(&self.matrix_client);
        let commander = Arc::clone(&self.commander);
        let quiz_lock = Arc::clone(&self.quiz_lock);

        // Create message handler closure
        let on_message = move |body: String, room_id: String, sender_id: String| {
            let ctx = MessageContext {
                body,
                room_id,
                sender_id,
                matrix_client: Arc::clone(&matrix_client),
                commander: Arc::clone(&commander),
                quiz_lock: Arc::clone(&quiz_lock),
            };
            Self::handle_matrix_message(ctx)
        };

        info!("listening for {} commands", PREFIX);
        self.matrix_client.sync(on_message).await
    }

    /// Handles an incoming Matrix message in a new task.
    ///
    /// Messages that are not quiz commands are dropped without taking the lock.
    fn handle_matrix_message(ctx: MessageContext) {
        tokio::spawn(async move {
            if !ctx.body.starts_with(PREFIX) {
                return;
            }

            debug!("command from {} in {}", ctx.sender_id, ctx.room_id);
            handle_command(
                ctx.commander.as_ref(),
                &ctx.quiz_lock,
                ctx.matrix_client.as_ref(),
                &ctx.room_id,
                &ctx.body,
            )
            .await;
        });
    }
}

/// Handles one command and sends its steps to `room_id`.
///
/// `quiz_lock` is held until the last step is sent, so commands are played
/// one after another in the order they took the lock.
async fn handle_command<R: Requester, S: ChannelSink>(
    commander: &Commander<R>,
    quiz_lock: &Mutex<()>,
    sink: &S,
    room_id: &str,
    body: &str,
) {
    let _guard = quiz_lock.lock().await;

    let Some(steps) = commander.handle(body).await else {
        return;
    };

    debug!("answering in {} with {} messages", room_id, steps.len());
    play(sink, room_id, steps).await;
}
