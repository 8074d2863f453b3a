//! `wfl` ("win, fair, lose") reaction trigger.
//!
//! A message containing the word `wfl` in the trigger channel gets the guild's
//! `W1`, `F1` and `L1` custom emojis as reactions. Reactions are rate limited per
//! channel.

use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

use regex::Regex;
use serenity::all::{Context, Message};
use tokio::sync::Mutex;

pub const REACTION_EMOJIS: [&str; 3] = ["W1", "F1", "L1"];

static TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bwfl\b").expect("trigger regex is valid"));

pub fn is_trigger(content: &str) -> bool {
    TRIGGER.is_match(content)
}

/// Per-channel cooldown between trigger reactions.
pub struct TriggerCooldown {
    window: Duration,
    last_reaction: Mutex<HashMap<u64, Instant>>,
}

impl TriggerCooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_reaction: Mutex::new(HashMap::new()),
        }
    }

    /// Records a reaction at `now` unless the channel is still cooling down.
    ///
    /// # Returns
    /// - `true` - The caller should react; the cooldown restarts at `now`
    /// - `false` - A reaction happened within the window
    pub async fn should_react(&self, channel_id: u64, now: Instant) -> bool {
        let mut last_reaction = self.last_reaction.lock().await;

        match last_reaction.get(&channel_id) {
            Some(previous) if now.saturating_duration_since(*previous) < self.window => false,
            _ => {
                last_reaction.insert(channel_id, now);
                true
            }
        }
    }
}

/// Reacts to a message with the guild's trigger emojis.
///
/// Emojis missing from the guild are logged and skipped.
pub async fn add_reactions(ctx: &Context, message: &Message) {
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let emojis = match guild_id.emojis(&ctx.http).await {
        Ok(emojis) => emojis,
        Err(e) => {
            tracing::error!("Failed to fetch emojis for guild {}: {}", guild_id, e);
            return;
        }
    };

    for name in REACTION_EMOJIS {
        let Some(emoji) = emojis.iter().find(|emoji| emoji.name == name) else {
            tracing::warn!("Guild {} has no emoji named {}", guild_id, name);
            continue;
        };

        if let Err(e) = message.react(&ctx.http, emoji.clone()).await {
            tracing::error!(
                "Failed to react with {} to message {}: {}",
                name,
                message.id,
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_word_only() {
        assert!(is_trigger("wfl"));
        assert!(is_trigger("is this a WFL?"));
        assert!(is_trigger("my trade, wfl pls"));
        assert!(!is_trigger("wflx"));
        assert!(!is_trigger("awfl trade"));
    }

    #[tokio::test]
    async fn cooldown_is_per_channel() {
        let cooldown = TriggerCooldown::new(Duration::from_secs(1));
        let start = Instant::now();

        assert!(cooldown.should_react(1, start).await);
        assert!(!cooldown.should_react(1, start + Duration::from_millis(500)).await);
        assert!(cooldown.should_react(2, start + Duration::from_millis(500)).await);
        assert!(cooldown.should_react(1, start + Duration::from_secs(1)).await);
    }
}
