//! Bot command handlers.

mod dice;
mod echo;
mod hello;
mod help;
mod info;
mod ping;
mod roll;

pub use dice::DiceHandler;
pub use echo::EchoHandler;
pub use hello::HelloHandler;
pub use help::HelpHandler;
pub use info::InfoHandler;
pub use ping::PingHandler;
pub use roll::{roll_dice, DiceRoll, RollError, RollHandler};

use discord_client::BotMessage;

/// Command handler trait.
pub trait CommandHandler: Send + Sync {
    /// Command name (e.g., "ping", "echo").
    fn name(&self) -> &str;

    /// Short human-readable description shown by `!help`.
    fn description(&self) -> &str;

    /// Command trigger (e.g., "!ping"). Always lower-case.
    fn trigger(&self) -> &str;

    /// Whether text may follow the trigger.
    ///
    /// Handlers that return false only match when the trimmed message is
    /// exactly the trigger.
    fn accepts_arguments(&self) -> bool {
        false
    }

    /// Produce the reply for a matched message.
    fn execute(&self, message: &BotMessage) -> String;
}

/// Return the text following `trigger` at the start of `text`.
///
/// Leading whitespace before the trigger is skipped and the trigger is
/// compared ignoring ASCII case. Everything after the trigger is returned
/// untouched, including whitespace. If `text` does not start with the
/// trigger, the whole text is returned.
pub fn strip_trigger<'a>(text: &'a str, trigger: &str) -> &'a str {
    let start = text.trim_start();
    match start.get(..trigger.len()) {
        Some(head) if head.eq_ignore_ascii_case(trigger) => &start[trigger.len()..],
        _ => text,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trigger_keeps_remainder_whitespace() {
        assert_eq!(strip_trigger("!echo hello world", "!echo"), " hello world");
        assert_eq!(strip_trigger("!echo   spaced  ", "!echo"), "   spaced  ");
    }

    #[test]
    fn test_strip_trigger_only_first_occurrence() {
        assert_eq!(strip_trigger("!echo !echo", "!echo"), " !echo");
    }

    #[test]
    fn test_strip_trigger_ignores_case_and_leading_space() {
        assert_eq!(strip_trigger("  !ECHO hi", "!echo"), " hi");
    }

    #[test]
    fn test_strip_trigger_without_trigger() {
        assert_eq!(strip_trigger("hello", "!echo"), "hello");
        assert_eq!(strip_trigger("!ec", "!echo"), "!ec");
    }

    #[test]
    fn test_strip_trigger_non_ascii_boundary() {
        // Byte 5 falls inside a multi-byte char; must not panic.
        assert_eq!(strip_trigger("!ech\u{e5}x", "!echo"), "!ech\u{e5}x");
    }

    #[test]
    fn test_strip_trigger_does_not_mutate_input() {
        let original = String::from("!echo hi");
        let remainder = strip_trigger(&original, "!echo");
        assert_eq!(remainder, " hi");
        assert_eq!(original, "!echo hi");
    }
}
