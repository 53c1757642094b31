//! Hello command - liveness greeting.

use crate::commands::CommandHandler;
use discord_client::BotMessage;

pub struct HelloHandler;

impl HelloHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelloHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for HelloHandler {
    fn name(&self) -> &str {
        "hello"
    }

    fn description(&self) -> &str {
        "Säger hej"
    }

    fn trigger(&self) -> &str {
        "!hello"
    }

    fn execute(&self, _message: &BotMessage) -> String {
        "Hello! I'm alive! 🤖".into()
    }
}
