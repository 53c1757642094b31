//! Dice command - rolls a single six-sided die.

use crate::commands::CommandHandler;
use discord_client::BotMessage;
use rand::Rng;

const SIDES: u32 = 6;

pub struct DiceHandler;

impl DiceHandler {
    pub fn new() -> Self {
        Self
    }

    fn roll_with<R: Rng + ?Sized>(rng: &mut R) -> String {
        format!("Du slog: {}", rng.gen_range(1..=SIDES))
    }
}

impl Default for DiceHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for DiceHandler {
    fn name(&self) -> &str {
        "dice"
    }

    fn description(&self) -> &str {
        "Slår en tärning"
    }

    fn trigger(&self) -> &str {
        "!dice"
    }

    fn execute(&self, _message: &BotMessage) -> String {
        Self::roll_with(&mut rand::thread_rng())
    }
}
