//! Small shared helpers used across services and the bot.

pub mod parse;
pub mod similarity;
pub mod text;
