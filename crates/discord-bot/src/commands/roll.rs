//! Roll command - dice notation such as `d20` or `2d6`.
//!
//! Grammar: `[count]d<sides>`, where `count` defaults to 1. An empty
//! argument rolls `1d6`. Malformed notation is answered with an error
//! reply rather than ignored.

use crate::commands::{strip_trigger, CommandHandler};
use discord_client::BotMessage;
use rand::Rng;
use std::fmt;
use thiserror::Error;

pub const MAX_DICE: u32 = 100;
pub const MAX_SIDES: u32 = 1000;

const DEFAULT_SIDES: u32 = 6;

/// Reasons a dice notation is rejected. Displayed to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("Ogiltig tärningsnotation `{0}`")]
    Malformed(String),

    #[error("Antalet tärningar måste vara mellan 1 och {}", MAX_DICE)]
    DiceCount,

    #[error("Antalet sidor måste vara mellan 1 och {}", MAX_SIDES)]
    Sides,
}

/// A parsed `NdM` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRoll {
    pub count: u32,
    pub sides: u32,
}

impl DiceRoll {
    /// Parse dice notation. Surrounding whitespace and case are ignored.
    pub fn parse(notation: &str) -> Result<Self, RollError> {
        let trimmed = notation.trim();
        if trimmed.is_empty() {
            return Ok(Self {
                count: 1,
                sides: DEFAULT_SIDES,
            });
        }

        let malformed = || RollError::Malformed(trimmed.to_string());
        let lower = trimmed.to_ascii_lowercase();
        let (count, sides) = lower.split_once('d').ok_or_else(malformed)?;

        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(count) || sides.is_empty() || !is_digits(sides) {
            return Err(malformed());
        }

        // All-digit strings only fail to parse on overflow.
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| RollError::DiceCount)?
        };
        let sides = sides.parse::<u32>().map_err(|_| RollError::Sides)?;

        if !(1..=MAX_DICE).contains(&count) {
            return Err(RollError::DiceCount);
        }
        if !(1..=MAX_SIDES).contains(&sides) {
            return Err(RollError::Sides);
        }

        Ok(Self { count, sides })
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// Roll every die and return the individual results.
pub fn roll_dice<R: Rng + ?Sized>(roll: DiceRoll, rng: &mut R) -> Vec<u32> {
    (0..roll.count)
        .map(|_| rng.gen_range(1..=roll.sides))
        .collect()
}

fn format_roll(roll: DiceRoll, results: &[u32]) -> String {
    let total: u64 = results.iter().map(|&r| u64::from(r)).sum();
    let listed = results
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("🎲 Rullade {roll}: {listed} = **{total}**")
}

pub struct RollHandler;

impl RollHandler {
    pub fn new() -> Self {
        Self
    }

    fn reply_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        let args = strip_trigger(text, self.trigger());
        match DiceRoll::parse(args) {
            Ok(roll) => format_roll(roll, &roll_dice(roll, rng)),
            Err(e) => format!("❌ {e}. Exempel: !roll d20, !roll 2d6"),
        }
    }
}

impl Default for RollHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler for RollHandler {
    fn name(&self) -> &str {
        "roll"
    }

    fn description(&self) -> &str {
        "Roll dice (e.g. !roll d20, !roll 2d6)"
    }

    fn trigger(&self) -> &str {
        "!roll"
    }

    fn accepts_arguments(&self) -> bool {
        true
    }

    fn execute(&self, message: &BotMessage) -> String {
        self.reply_with(&message.text, &mut rand::thread_rng())
    }
}
