use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;
use std::time::Duration;

use crate::server::{
    bot::trigger::TriggerCooldown, config::Config, service::catalog::PetCatalog,
};

pub mod message;
pub mod ready;

/// Minimum time between trigger reactions in one channel.
const TRIGGER_COOLDOWN: Duration = Duration::from_secs(1);

/// Channel routing for the bot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotSettings {
    pub pet_value_channel_ids: Vec<u64>,
    pub trigger_channel_id: Option<u64>,
}

impl BotSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            pet_value_channel_ids: config.pet_value_channel_ids.clone(),
            trigger_channel_id: config.trigger_channel_id,
        }
    }

    pub fn is_pet_value_channel(&self, channel_id: u64) -> bool {
        self.pet_value_channel_ids.contains(&channel_id)
    }

    pub fn is_trigger_channel(&self, channel_id: u64) -> bool {
        self.trigger_channel_id == Some(channel_id)
    }
}

/// Discord bot event handler
pub struct Handler {
    pub catalog: PetCatalog,
    pub settings: BotSettings,
    pub cooldown: TriggerCooldown,
}

impl Handler {
    pub fn new(catalog: PetCatalog, settings: BotSettings) -> Self {
        Self {
            catalog,
            settings,
            cooldown: TriggerCooldown::new(TRIGGER_COOLDOWN),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_channels() {
        let settings = BotSettings {
            pet_value_channel_ids: vec![10, 20],
            trigger_channel_id: Some(30),
        };

        assert!(settings.is_pet_value_channel(20));
        assert!(!settings.is_pet_value_channel(30));
        assert!(settings.is_trigger_channel(30));
        assert!(!BotSettings::default().is_trigger_channel(30));
    }
}
