//! Discord gateway and REST client.

mod client;
mod error;
mod receiver;
mod types;

pub use client::DiscordClient;
pub use error::DiscordError;
pub use receiver::{default_intents, MessageReceiver, ShutdownHandle};
pub use serenity::all::GatewayIntents;
pub use types::*;
