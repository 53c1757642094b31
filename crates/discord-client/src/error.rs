//! Discord client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscordError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] serenity::Error),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Gateway task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
