//! Command registry and dispatcher.

use crate::commands::*;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use discord_client::{BotMessage, DiscordClient, DiscordError};
use std::collections::HashMap;
use tracing::debug;

/// Outbound side of dispatch: sends a reply for a message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Responder: Send + Sync {
    async fn reply(&self, message: &BotMessage, text: &str) -> Result<(), DiscordError>;
}

#[async_trait]
impl Responder for DiscordClient {
    async fn reply(&self, message: &BotMessage, text: &str) -> Result<(), DiscordError> {
        DiscordClient::reply(self, message, text).await
    }
}

/// Maps triggers to command handlers.
///
/// Populated once at startup and read-only afterwards.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: Vec<Box<dyn CommandHandler>>,
    by_trigger: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in command, `!help` last.
    pub fn with_builtin_commands() -> AppResult<Self> {
        let mut registry = Self::new();
        registry.register(Box::new(HelloHandler::new()))?;
        registry.register(Box::new(PingHandler::new()))?;
        registry.register(Box::new(InfoHandler::new()))?;
        registry.register(Box::new(DiceHandler::new()))?;
        registry.register(Box::new(EchoHandler::new()))?;
        registry.register(Box::new(RollHandler::new()))?;

        let help = HelpHandler::new(registry.commands());
        registry.register(Box::new(help))?;
        Ok(registry)
    }

    /// Register a handler. Triggers are unique.
    pub fn register(&mut self, handler: Box<dyn CommandHandler>) -> AppResult<()> {
        let trigger = handler.trigger().to_lowercase();
        if self.by_trigger.contains_key(&trigger) {
            return Err(AppError::DuplicateTrigger(trigger));
        }

        self.by_trigger.insert(trigger, self.handlers.len());
        self.handlers.push(handler);
        Ok(())
    }

    /// Registered handlers in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn CommandHandler> {
        self.handlers.iter().map(|h| h.as_ref())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Find the handler selected by a message text.
    ///
    /// The text is trimmed and lower-cased. Handlers without arguments need
    /// an exact match; handlers with arguments match when the text starts
    /// with their trigger, the longest such trigger winning.
    pub fn lookup(&self, text: &str) -> Option<&dyn CommandHandler> {
        let normalized = text.trim().to_lowercase();
        if let Some(&index) = self.by_trigger.get(&normalized) {
            return self.handlers.get(index).map(|h| h.as_ref());
        }

        self.commands()
            .filter(|h| h.accepts_arguments() && normalized.starts_with(h.trigger()))
            .max_by_key(|h| h.trigger().len())
    }

    /// Compute the reply for a message, if any.
    pub fn respond(&self, message: &BotMessage) -> Option<String> {
        if message.is_from_bot() {
            return None;
        }

        let handler = self.lookup(&message.text)?;
        debug!("Dispatching {} for {}", handler.name(), message.author.name);
        Some(handler.execute(message))
    }

    /// Handle one inbound message, sending at most one reply.
    ///
    /// Returns whether a reply was sent.
    pub async fn dispatch(
        &self,
        message: &BotMessage,
        responder: &dyn Responder,
    ) -> AppResult<bool> {
        match self.respond(message) {
            Some(reply) => {
                responder.reply(message, &reply).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
