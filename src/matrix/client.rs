//! Matrix client wrapper for bot messaging and synchronization.
//!
//! This module provides a high-level [`MatrixClient`] interface that wraps the
//! Matrix SDK client and handles message sending and synchronization.

use log::{debug, error, info, warn};
use matrix_sdk::{
    Client,
    ruma::{RoomId, events::room::message::RoomMessageEventContent},
};

use crate::{
    matrix::{UserCredentials, session::restore_client, sync::MatrixSync},
    sequencer::ChannelSink,
};

/// Display name of the bot account.
const DISPLAY_NAME: &str = "Kerwhizz";

/// High-level Matrix client for bot messaging operations.
pub struct MatrixClient {
    /// Synchronization service for handling real-time events
    matrix_sync: MatrixSync,
    /// Underlying Matrix SDK client
    client: Client,
}

impl MatrixClient {
    /// Creates and initializes a new Matrix client.
    ///
    /// Restores the session of the credentials (see [`restore_client`]) and
    /// sets the bot display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be restored. Failing to set the
    /// display name is only logged.
    pub async fn new(user_credentials: &UserCredentials) -> Result<Self, anyhow::Error> {
        let client = restore_client(user_credentials).await?;

        if let Err(e) = client.account().set_display_name(Some(DISPLAY_NAME)).await {
            warn!("failed to set display name: {:?}", e);
        }

        let matrix_sync = MatrixSync::new(&client);

        Ok(MatrixClient {
            matrix_sync,
            client,
        })
    }

    /// Starts the Matrix synchronization loop.
    ///
    /// This method begins syncing with the Matrix server and invokes the provided
    /// callback for each incoming text message. The sync loop runs indefinitely.
    ///
    /// # Arguments
    ///
    /// * `on_message` - Callback invoked for each text message with parameters:
    ///   - `body`: The message text content
    ///   - `room_id`: The room where the message was sent
    ///   - `sender_id`: The user who sent the message
    ///
    /// # Errors
    ///
    /// Returns the error that ended the sync loop.
    pub async fn sync<F>(&self, on_message: F) -> Result<(), anyhow::Error>
    where
        F: Fn(String, String, String) + Send + Sync + 'static + Clone,
    {
        match self.matrix_sync.sync(on_message).await {
            Ok(_) => {
                info!("matrix sync ended successfully");
                Ok(())
            }
            Err(e) => {
                error!("matrix sync ended with error: {:?}", e);
                Err(e)
            }
        }
    }

    /// Internal helper to send message content to a room.
    ///
    /// Errors are logged, never returned.
    async fn send(&self, room_id: &str, content: RoomMessageEventContent) {
        let room_id_obj = match RoomId::parse(room_id) {
            Ok(room_id_obj) => room_id_obj,
            Err(e) => {
                error!("invalid room id {}: {:?}", room_id, e);
                return;
            }
        };

        let Some(room) = self.client.get_room(&room_id_obj) else {
            warn!("room {} is not known by the client", room_id);
            return;
        };

        if let Err(e) = room.send(content).await {
            error!("Failed to send message: {:?}", e);
        }
    }
}

impl ChannelSink for MatrixClient {
    /// Sends a Markdown message to a room.
    async fn send_text(&self, room_id: &str, text: &str) {
        debug!("send to {}: {}", room_id, text);
        self.send(room_id, RoomMessageEventContent::text_markdown(text))
            .await;
    }
}
