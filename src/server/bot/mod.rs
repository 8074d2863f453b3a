//! Discord bot integration.
//!
//! The bot watches configured channels for pet value postings and merges them into
//! the shared catalog, answers `gs.` commands, and reacts to the `wfl` trigger in
//! the trigger channel.
//!
//! The bot is initialized during server startup and runs in a separate tokio task
//! to avoid blocking the HTTP server. It shares the [`PetCatalog`] handle with the
//! HTTP layer, so updates are visible to both immediately.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `MESSAGE_CONTENT` - Read message text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.
//!
//! [`PetCatalog`]: crate::server::service::catalog::PetCatalog

pub mod command;
pub mod embed;
pub mod handler;
pub mod start;
pub mod trigger;
