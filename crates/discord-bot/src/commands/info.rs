//! Info command - describes the bot.

use crate::commands::CommandHandler;
use discord_client::BotMessage;

pub struct InfoHandler;

impl InfoHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InfoHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for InfoHandler {
    fn name(&self) -> &str {
        "info"
    }

    fn description(&self) -> &str {
        "Informerar om bot"
    }

    fn trigger(&self) -> &str {
        "!info"
    }

    fn execute(&self, _message: &BotMessage) -> String {
        "Jag är en bot som hjälper denna server att fungera.".into()
    }
}
