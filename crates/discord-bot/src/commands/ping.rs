//! Ping command - replies with pong.

use crate::commands::CommandHandler;
use discord_client::BotMessage;

pub struct PingHandler;

impl PingHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for PingHandler {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        "svarar med pong"
    }

    fn trigger(&self) -> &str {
        "!ping"
    }

    fn execute(&self, _message: &BotMessage) -> String {
        "Pong!".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::message;

    #[test]
    fn test_ping_has_name_and_description() {
        let handler = PingHandler::new();
        assert_eq!(handler.name(), "ping");
        assert_eq!(handler.description(), "svarar med pong");
        assert!(!handler.accepts_arguments());
    }

    #[test]
    fn test_ping_responds_with_pong() {
        let handler = PingHandler::new();
        assert_eq!(handler.execute(&message("!ping")), "Pong!");
    }
}
