//! Human-readable status lines logged at startup.

use discord_client::ReadyInfo;

/// Lines announcing that the bot is connected and how to try it.
pub fn ready_lines(ready: &ReadyInfo) -> [String; 3] {
    [
        format!("✅ Bot inloggad som: {}", ready.username),
        format!(
            "📡 Bot är online och lyssnar på kommandon! ({} servrar)",
            ready.guild_count
        ),
        "💬 Testa: !hello".to_string(),
    ]
}
