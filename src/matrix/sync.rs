//! Matrix client synchronization and event handling.
//!
//! This module provides the [`MatrixSync`] struct for managing the Matrix client's
//! synchronization loop and handling real-time events from the homeserver.
//!
//! # Overview
//!
//! The [`MatrixSync::sync`] method:
//! 1. Performs an initial sync to catch up on offline events (especially invites)
//! 2. Sets up event handlers for auto-joining rooms and message processing
//! 3. Enters a continuous sync loop
//!
//! Messages sent before the bot started are skipped because the message
//! handler is registered after the initial sync.

use anyhow::Result;
use std::sync::Arc;

use log::{error, info, warn};
use matrix_sdk::{
    Client, Room, RoomState,
    config::SyncSettings,
    ruma::{
        api::client::filter::FilterDefinition,
        events::room::{
            member::StrippedRoomMemberEvent,
            message::{MessageType, OriginalSyncRoomMessageEvent},
        },
    },
};
use tokio::time::{Duration, sleep};

/// Seconds to wait before retrying a failed initial sync.
const INITIAL_SYNC_RETRY_DELAY: u64 = 5;

/// Manages Matrix client synchronization and event processing.
pub struct MatrixSync {
    /// The matrix client
    client: Client,
}

impl MatrixSync {
    /// Creates a new MatrixSync instance.
    ///
    /// This does not start the synchronization process; call [`MatrixSync::sync`]
    /// to begin syncing.
    pub fn new(client: &Client) -> Self {
        MatrixSync {
            client: client.to_owned(),
        }
    }

    /// Starts the synchronization process and enters an infinite loop.
    ///
    /// # Arguments
    ///
    /// * `on_message` - Callback invoked for each text message in a joined room
    ///   that was not sent by the bot itself.
    ///   Parameters are: `(body, room_id, sender_id)`
    ///
    /// # Errors
    ///
    /// Returns an error if the sync loop encounters a fatal error.
    /// A failing initial sync is retried until it succeeds.
    pub async fn sync<F>(&self, on_message: F) -> Result<()>
    where
        F: Fn(String, String, String) + Send + Sync + 'static + Clone,
    {
        info!("start syncing");

        // Auto join rooms when invited
        self.client.add_event_handler(auto_join_rooms);

        // Enable room members lazy-loading
        // See <https://spec.matrix.org/v1.6/client-server-api/#lazy-loading-room-members>.
        let filter = FilterDefinition::with_lazy_loading();
        let mut sync_settings = SyncSettings::default().filter(filter.into());

        // First sync to only get the invitations received while the bot was offline
        let response = loop {
            match self.client.sync_once(sync_settings.clone()).await {
                Ok(response) => break response,
                Err(error) => {
                    error!("an error occurred during initial sync: {error}");
                    error!("trying again in {INITIAL_SYNC_RETRY_DELAY}s");
                    sleep(Duration::from_secs(INITIAL_SYNC_RETRY_DELAY)).await;
                }
            }
        };

        let on_message_arc = Arc::new(on_message);

        // Listen to incoming room messages. Because we are listening after the sync_once, we only get new messages.
        self.client.add_event_handler({
            let on_message = Arc::clone(&on_message_arc);
            move |event: OriginalSyncRoomMessageEvent, room: Room| async move {
                on_room_message(event, room, &on_message).await
            }
        });

        // Since we called `sync_once` before we entered our sync loop we must pass
        // that sync token to `sync`
        sync_settings = sync_settings.token(response.next_batch);
        self.client.sync(sync_settings).await?;

        Ok(())
    }
}

/// Automatically joins rooms when the bot receives an invitation.
///
/// # References
///
/// See <https://github.com/matrix-org/synapse/issues/4345> for the Synapse issue
/// that necessitates the retry logic.
async fn auto_join_rooms(room_member: StrippedRoomMemberEvent, client: Client, room: Room) {
    let Some(user_id) = client.user_id() else {
        warn!("could not get user id from client");
        return;
    };

    // Ignore if the invite is not for us
    if room_member.state_key != user_id {
        return;
    }

    tokio::spawn(async move {
        info!("auto joining room {}", room.room_id());
        let mut delay = 2;

        while let Err(err) = room.join().await {
            // retry autojoin due to synapse sending invites, before the
            // invited user can join for more information see
            // https://github.com/matrix-org/synapse/issues/4345
            error!(
                "failed to join room {} ({err:?}), retrying in {delay}s",
                room.room_id()
            );

            sleep(Duration::from_secs(delay)).await;
            delay *= 2;

            if delay > 3600 {
                error!("can't join room {} ({err:?})", room.room_id());
                return;
            }
        }
        info!("successfully joined room {}", room.room_id());
    });
}

/// Handles incoming room messages and delegates to the user callback.
///
/// Messages from non-joined rooms, non-text messages and messages sent by
/// the bot itself are ignored.
async fn on_room_message<F>(event: OriginalSyncRoomMessageEvent, room: Room, on_message: &Arc<F>)
where
    F: Fn(String, String, String) + Send + Sync + 'static,
{
    // Ignore messages from non-joined rooms
    if room.state() != RoomState::Joined {
        return;
    }

    // Never answer ourselves
    if event.sender == room.own_user_id() {
        return;
    }

    // Only handle text messages
    let MessageType::Text(text_content) = event.content.msgtype else {
        return;
    };

    on_message(
        text_content.body,
        room.room_id().to_string(),
        event.sender.to_string(),
    );
}
