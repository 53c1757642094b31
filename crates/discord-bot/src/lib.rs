//! Prefix-command Discord bot.

pub mod commands;
pub mod config;
pub mod error;
pub mod registry;
pub mod status;

pub use registry::{CommandRegistry, Responder};
