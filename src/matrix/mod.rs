//! Matrix protocol integration for the bot.
//!
//! This module provides the chat platform capability the bot relies on:
//! - Session restoration from an access token
//! - Real-time event synchronization, with auto-join on invite
//! - Markdown message sending
//!
//! # Architecture
//!
//! The module is structured around the [`client::MatrixClient`] which coordinates:
//! - **Session**: building an authenticated client via the session submodule
//! - **Sync**: real-time event handling via the sync submodule
//!
//! # Examples
//!
//! ```no_run
//! use kerwhizz::matrix::{UserCredentials, MatrixClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let credentials = UserCredentials {
//!     user_id: "@bot:example.com".to_string(),
//!     device_id: "KERWHIZZ".to_string(),
//!     access_token: "syt_token".to_string(),
//! };
//!
//! let client = MatrixClient::new(&credentials).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod session;
mod sync;

pub use crate::matrix::client::MatrixClient;

/// User credentials for a Matrix account
#[derive(Debug, Clone)]
pub struct UserCredentials {
    /// User ID of the matrix account
    pub user_id: String,
    /// Device ID the access token was issued for
    pub device_id: String,
    /// Access token of the matrix account
    pub access_token: String,
}
