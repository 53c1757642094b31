//! Common test utilities for integration tests.

use async_trait::async_trait;
use discord_bot::Responder;
use discord_client::{Author, BotMessage, DiscordError};
use std::sync::Mutex;

/// Build a guild message from a human user.
pub fn user_message(text: &str) -> BotMessage {
    BotMessage {
        id: 900_000_000_000_000_001,
        channel_id: 800_000_000_000_000_001,
        guild_id: Some(700_000_000_000_000_001),
        author: Author {
            id: 600_000_000_000_000_001,
            name: "Test User".into(),
            is_bot: false,
        },
        text: text.into(),
    }
}

/// Build a message authored by a bot account.
pub fn bot_message(text: &str) -> BotMessage {
    let mut msg = user_message(text);
    msg.author.is_bot = true;
    msg
}

/// Responder that records every reply as `(channel_id, text)`.
#[derive(Default)]
pub struct RecordingResponder {
    replies: Mutex<Vec<(u64, String)>>,
}

impl RecordingResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replies(&self) -> Vec<(u64, String)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn reply(&self, message: &BotMessage, text: &str) -> Result<(), DiscordError> {
        self.replies
            .lock()
            .unwrap()
            .push((message.channel_id, text.to_string()));
        Ok(())
    }
}
