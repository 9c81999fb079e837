//! Matrix session restoration from an access token.
//!
//! The bot never logs in with a password: it is given an access token and the
//! device it belongs to, and restores that session on a fresh client. Nothing
//! is persisted; the SDK state lives in memory for the process lifetime.

use log::{debug, info};
use matrix_sdk::{
    Client, SessionMeta, SessionTokens, authentication::matrix::MatrixSession,
    ruma::OwnedUserId,
};

use crate::matrix::UserCredentials;

/// Builds the SDK session described by the credentials.
///
/// # Errors
///
/// Returns an error if the user ID is not a valid Matrix user ID.
fn user_session(user_credentials: &UserCredentials) -> Result<MatrixSession, anyhow::Error> {
    let user_id: OwnedUserId = user_credentials.user_id.clone().try_into()?;

    Ok(MatrixSession {
        meta: SessionMeta {
            user_id,
            device_id: user_credentials.device_id.as_str().into(),
        },
        tokens: SessionTokens {
            access_token: user_credentials.access_token.clone(),
            refresh_token: None,
        },
    })
}

/// Creates a Matrix client and restores the session of the credentials.
///
/// The homeserver is discovered from the server name of the user ID.
///
/// # Errors
///
/// Returns an error if:
/// - The user ID is invalid
/// - The homeserver cannot be discovered
/// - The session cannot be restored (revoked or invalid token)
pub async fn restore_client(user_credentials: &UserCredentials) -> Result<Client, anyhow::Error> {
    info!(
        "restoring matrix session for user {}",
        user_credentials.user_id
    );

    let session = user_session(user_credentials)?;
    let client = Client::builder()
        .server_name(session.meta.user_id.server_name())
        .build()
        .await?;

    debug!("matrix client created");

    client.restore_session(session).await?;

    // Fails early when the token is revoked or belongs to another user
    let whoami = client.whoami().await?;
    debug!("authenticated as {}", whoami.user_id);

    info!("matrix session restored successfully");
    Ok(client)
}
