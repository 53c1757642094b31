//! Discord command bot - main entry point.

use anyhow::Context;
use discord_bot::config::Config;
use discord_bot::error::AppResult;
use discord_bot::status::ready_lines;
use discord_bot::CommandRegistry;
use discord_client::{default_intents, DiscordClient, GatewayEvent, MessageReceiver};
use secrecy::ExposeSecret;
use tokio::signal;
use tokio_stream::StreamExt;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log_level);

    info!("Starting Discord bot...");

    let registry = CommandRegistry::with_builtin_commands()?;
    info!("Registered {} command handlers", registry.len());

    let token = config.token.expose_secret();
    let discord = DiscordClient::new(token);

    match discord.current_user().await {
        Ok(name) => info!("Token accepted for {}", name),
        Err(e) => {
            error!("Discord rejected the bot token: {}", e);
            return Err(e.into());
        }
    }

    let mut receiver = MessageReceiver::connect(token, default_intents()).await?;
    let shutdown = receiver.shutdown_handle();
    let mut stream = Box::pin(receiver.stream());

    // Main message loop; breaks with whether the gateway stopped on its own
    let gateway_stopped = loop {
        tokio::select! {
            event = stream.next() => match event {
                Some(GatewayEvent::Ready(ready)) => {
                    for line in ready_lines(&ready) {
                        info!("{}", line);
                    }
                }
                Some(GatewayEvent::Message(message)) => {
                    if let Err(e) = registry.dispatch(&message, &discord).await {
                        error!("Failed to send reply: {}", e);
                    }
                }
                None => break true,
            },
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                shutdown.shutdown().await;
                break false;
            }
        }
    };

    drop(stream);
    if gateway_stopped {
        warn!("Gateway stream ended");
        receiver.join().await?;
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
