//! Business logic between the bot, the HTTP controllers and the data layer.
//!
//! The extractor, resolver and calculators are pure functions over domain models.
//! [`catalog::PetCatalog`] is the only stateful service; it owns the shared catalog
//! and its persistence. [`pet_notification::PetChangeNotifier`] announces admin
//! catalog changes on Discord.

pub mod calculator;
pub mod catalog;
pub mod extract;
pub mod pet_notification;
pub mod resolve;
pub mod valuation;
pub mod weight;
