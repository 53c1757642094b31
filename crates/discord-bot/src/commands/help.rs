//! Help command - lists available commands.

use crate::commands::CommandHandler;
use discord_client::BotMessage;

const TRIGGER: &str = "!help";
const DESCRIPTION: &str = "Visar alla kommandon";

pub struct HelpHandler {
    text: String,
}

impl HelpHandler {
    /// Build the help text from the other registered handlers.
    pub fn new<'a>(handlers: impl IntoIterator<Item = &'a dyn CommandHandler>) -> Self {
        let mut text = String::from("**Kommandon:**");
        for handler in handlers {
            text.push_str(&format!(
                "\n- {} - {}",
                handler.trigger(),
                handler.description()
            ));
        }
        text.push_str(&format!("\n- {TRIGGER} - {DESCRIPTION}"));

        Self { text }
    }
}

impl CommandHandler for HelpHandler {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn trigger(&self) -> &str {
        TRIGGER
    }

    fn execute(&self, _message: &BotMessage) -> String {
        self.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::message;
    use crate::commands::{EchoHandler, PingHandler};

    #[test]
    fn test_help_lists_handlers_in_order() {
        let ping = PingHandler::new();
        let echo = EchoHandler::new();
        let handlers: [&dyn CommandHandler; 2] = [&ping, &echo];
        let help = HelpHandler::new(handlers);

        assert_eq!(
            help.execute(&message("!help")),
            "**Kommandon:**\n\
             - !ping - svarar med pong\n\
             - !echo - Ger ett eko av användarens meddelande\n\
             - !help - Visar alla kommandon"
        );
    }

    #[test]
    fn test_help_with_no_other_handlers() {
        let help = HelpHandler::new(std::iter::empty());
        assert_eq!(
            help.execute(&message("!help")),
            "**Kommandon:**\n- !help - Visar alla kommandon"
        );
    }
}
