//! Discord HTTP client.

use crate::error::DiscordError;
use crate::types::BotMessage;
use serenity::builder::{CreateAllowedMentions, CreateMessage};
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Discord REST client used for outbound replies.
#[derive(Clone)]
pub struct DiscordClient {
    http: Arc<Http>,
}

impl DiscordClient {
    /// Create a new Discord client.
    pub fn new(token: &str) -> Self {
        Self {
            http: Arc::new(Http::new(token)),
        }
    }

    /// Fetch the bot's own username. Fails when the token is rejected.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<String, DiscordError> {
        let user = self.http.get_current_user().await?;
        Ok(user.name.clone())
    }

    /// Send a message to a channel.
    #[instrument(skip(self, message))]
    pub async fn send(&self, channel_id: u64, message: &str) -> Result<(), DiscordError> {
        if channel_id == 0 {
            return Err(DiscordError::SendFailed("invalid channel id 0".into()));
        }

        ChannelId::new(channel_id)
            .send_message(self.http.as_ref(), outgoing(message))
            .await
            .map_err(|e| {
                warn!("Send failed: {}", e);
                DiscordError::SendFailed(e.to_string())
            })?;

        debug!("Sent message to channel {}", channel_id);
        Ok(())
    }

    /// Reply to a message on the channel it arrived on.
    pub async fn reply(&self, original: &BotMessage, message: &str) -> Result<(), DiscordError> {
        self.send(original.channel_id, message).await
    }
}

/// Build an outgoing message that cannot ping users, roles or `@everyone`.
///
/// Replies may contain user-supplied text (`!echo`), so mentions are never
/// resolved.
fn outgoing(message: &str) -> CreateMessage {
    CreateMessage::new()
        .content(message)
        .allowed_mentions(CreateAllowedMentions::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outgoing_disables_mentions() {
        let body = serde_json::to_value(outgoing("Echo:  @everyone <@123>")).unwrap();

        assert_eq!(body["content"], "Echo:  @everyone <@123>");
        assert_eq!(body["allowed_mentions"]["parse"], serde_json::json!([]));
        assert_eq!(body["allowed_mentions"]["users"], serde_json::json!([]));
        assert_eq!(body["allowed_mentions"]["roles"], serde_json::json!([]));
    }
}
