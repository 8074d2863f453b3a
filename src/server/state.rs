//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use crate::server::service::{catalog::PetCatalog, pet_notification::PetChangeNotifier};

/// Application state containing shared resources and dependencies.
///
/// `PetCatalog` holds its database connection and an `Arc` to the in-memory catalog,
/// and `PetChangeNotifier` an `Arc<Http>`, so cloning the state is cheap and every
/// clone sees the same catalog.
#[derive(Clone)]
pub struct AppState {
    /// Shared pet catalog, also written to by the Discord bot.
    pub catalog: PetCatalog,
    /// Announces admin catalog changes through the bot's HTTP client.
    pub notifier: PetChangeNotifier,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `catalog` - Loaded pet catalog handle
    /// - `notifier` - Discord announcer for admin changes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(catalog: PetCatalog, notifier: PetChangeNotifier) -> Self {
        Self { catalog, notifier }
    }
}
