//! Discord message types.

use serenity::model::channel::Message;
use serenity::model::gateway::Ready;

/// Author of an incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Discord user ID.
    pub id: u64,
    /// Username at the time the message was sent.
    pub name: String,
    /// Whether the author is a bot account (including this bot).
    pub is_bot: bool,
}

/// Parsed message for bot processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMessage {
    /// Message ID.
    pub id: u64,
    /// Channel the message arrived on. Replies go back here.
    pub channel_id: u64,
    /// Guild ID, absent for direct messages.
    pub guild_id: Option<u64>,
    /// Message author.
    pub author: Author,
    /// The message text as typed.
    pub text: String,
}

impl BotMessage {
    /// Extract bot message from a gateway message.
    pub fn from_message(msg: &Message) -> Self {
        Self {
            id: msg.id.get(),
            channel_id: msg.channel_id.get(),
            guild_id: msg.guild_id.map(|g| g.get()),
            author: Author {
                id: msg.author.id.get(),
                name: msg.author.name.clone(),
                is_bot: msg.author.bot,
            },
            text: msg.content.clone(),
        }
    }

    /// Whether the message was written by a bot account.
    pub fn is_from_bot(&self) -> bool {
        self.author.is_bot
    }

    /// Whether this is a direct message rather than a guild message.
    pub fn is_direct(&self) -> bool {
        self.guild_id.is_none()
    }
}

/// Session details reported once the gateway connection is ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyInfo {
    pub user_id: u64,
    pub username: String,
    pub guild_count: usize,
}

impl ReadyInfo {
    pub fn from_ready(ready: &Ready) -> Self {
        Self {
            user_id: ready.user.id.get(),
            username: ready.user.name.clone(),
            guild_count: ready.guilds.len(),
        }
    }
}

/// Event forwarded from the gateway to the bot.
#[derive(Debug, Clone)]
pub enum GatewayEvent {
    /// The session is established.
    Ready(ReadyInfo),
    /// A message was created in a channel the bot can see.
    Message(BotMessage),
}
