//! Echo command - repeats whatever follows the trigger.

use crate::commands::{strip_trigger, CommandHandler};
use discord_client::BotMessage;

pub struct EchoHandler;

impl EchoHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EchoHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for EchoHandler {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Ger ett eko av användarens meddelande"
    }

    fn trigger(&self) -> &str {
        "!echo"
    }

    fn accepts_arguments(&self) -> bool {
        true
    }

    fn execute(&self, message: &BotMessage) -> String {
        format!("Echo: {}", strip_trigger(&message.text, self.trigger()))
    }
}
