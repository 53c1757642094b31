//! Gateway receiver that turns serenity callbacks into a stream.

use crate::error::DiscordError;
use crate::types::*;
use serenity::all::{Context, EventHandler, GatewayIntents, Message, Ready, ShardManager};
use serenity::{async_trait, Client};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::Stream;
use tracing::{debug, error, info};

const EVENT_BUFFER: usize = 64;

/// Intents needed to read message text in guilds and direct messages.
pub fn default_intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
}

/// Event handler that forwards gateway events into a channel.
struct Forwarder {
    tx: mpsc::Sender<GatewayEvent>,
}

impl Forwarder {
    async fn forward(&self, event: GatewayEvent) {
        if self.tx.send(event).await.is_err() {
            debug!("Receiver dropped, discarding gateway event");
        }
    }
}

#[async_trait]
impl EventHandler for Forwarder {
    async fn message(&self, _ctx: Context, msg: Message) {
        let bot_msg = BotMessage::from_message(&msg);
        debug!(
            "Received: {} from {}",
            bot_msg.text.chars().take(50).collect::<String>(),
            bot_msg.author.name
        );
        self.forward(GatewayEvent::Message(bot_msg)).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        self.forward(GatewayEvent::Ready(ReadyInfo::from_ready(&ready)))
            .await;
    }
}

/// Message receiver backed by a running gateway connection.
pub struct MessageReceiver {
    events: mpsc::Receiver<GatewayEvent>,
    shard_manager: Arc<ShardManager>,
    gateway: JoinHandle<Result<(), DiscordError>>,
}

impl MessageReceiver {
    /// Connect to the gateway and start receiving events in the background.
    pub async fn connect(token: &str, intents: GatewayIntents) -> Result<Self, DiscordError> {
        let (tx, events) = mpsc::channel(EVENT_BUFFER);

        let mut client = Client::builder(token, intents)
            .event_handler(Forwarder { tx })
            .await?;

        let shard_manager = client.shard_manager.clone();
        let gateway = tokio::spawn(async move {
            client.start().await.map_err(|e| {
                error!("Gateway error: {}", e);
                DiscordError::from(e)
            })
        });

        info!("Gateway client started");

        Ok(Self {
            events,
            shard_manager,
            gateway,
        })
    }

    /// Handle used to shut the gateway down while the stream is consumed.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shard_manager: self.shard_manager.clone(),
        }
    }

    /// Receive gateway events as an async stream.
    ///
    /// The stream ends when the gateway task stops; call [`join`](Self::join)
    /// afterwards to learn why.
    pub fn stream(&mut self) -> impl Stream<Item = GatewayEvent> + '_ {
        let events = &mut self.events;

        async_stream::stream! {
            while let Some(event) = events.recv().await {
                yield event;
            }
            debug!("Gateway event channel closed");
        }
    }

    /// Wait for the gateway task and return its outcome.
    pub async fn join(self) -> Result<(), DiscordError> {
        join_gateway(self.gateway).await
    }
}

async fn join_gateway(
    gateway: JoinHandle<Result<(), DiscordError>>,
) -> Result<(), DiscordError> {
    gateway.await?
}

/// Closes every shard of a running gateway connection.
#[derive(Clone)]
pub struct ShutdownHandle {
    shard_manager: Arc<ShardManager>,
}

impl ShutdownHandle {
    pub async fn shutdown(&self) {
        info!("Closing gateway shards");
        self.shard_manager.shutdown_all().await;
    }
}
