//! Discord announcements of admin catalog changes.

use serenity::{
    all::{ChannelId, CreateMessage},
    http::Http,
};
use std::sync::Arc;

use crate::server::{bot::embed, model::pet::PetChange};

/// Posts admin catalog changes to the configured update channel.
///
/// Without a configured channel every notification is dropped.
#[derive(Clone)]
pub struct PetChangeNotifier {
    /// Discord HTTP client shared with the bot
    http: Arc<Http>,
    channel_id: Option<ChannelId>,
}

impl PetChangeNotifier {
    /// Creates a new PetChangeNotifier instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `channel_id` - Non-zero id of the channel receiving announcements
    pub fn new(http: Arc<Http>, channel_id: Option<u64>) -> Self {
        Self {
            http,
            channel_id: channel_id.map(ChannelId::new),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.channel_id.is_some()
    }

    /// Announces a change in the background.
    ///
    /// The request outlives the HTTP call that made the change. Failures are
    /// logged and never reach the caller.
    pub fn notify(&self, change: PetChange) {
        let Some(channel_id) = self.channel_id else {
            return;
        };
        let http = self.http.clone();

        tokio::spawn(async move {
            let message = CreateMessage::new().embed(embed::pet_change(&change));
            let name = change.record().name.clone();

            match channel_id.send_message(&http, message).await {
                Ok(_) => tracing::info!("Announced change to pet {} in {}", name, channel_id),
                Err(e) => tracing::error!(
                    "Failed to announce change to pet {} in {}: {}",
                    name,
                    channel_id,
                    e
                ),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_without_channel() {
        let http = Arc::new(Http::new("token"));

        assert!(!PetChangeNotifier::new(http.clone(), None).is_enabled());
        assert!(PetChangeNotifier::new(http, Some(1414528231834386545)).is_enabled());
    }
}
