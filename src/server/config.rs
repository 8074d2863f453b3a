use std::path::PathBuf;

use crate::server::{
    error::{config::ConfigError, AppError},
    util::parse::{parse_id, parse_id_list},
};

const DEFAULT_HTTP_BIND_ADDR: &str = "0.0.0.0:5000";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,

    /// Channels whose messages are scanned for pet value postings.
    pub pet_value_channel_ids: Vec<u64>,
    /// Channel where the `wfl` reaction trigger runs.
    pub trigger_channel_id: Option<u64>,
    /// Channel receiving announcements of admin catalog changes.
    pub pet_update_channel_id: Option<u64>,

    pub http_bind_addr: String,
    /// Legacy JSON catalog imported into an empty database.
    pub pet_seed_file: Option<PathBuf>,
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let pet_value_channel_ids = match optional("PET_VALUE_CHANNEL_IDS") {
            Some(value) => parse_id_list("PET_VALUE_CHANNEL_IDS", &value)?,
            None => Vec::new(),
        };
        let trigger_channel_id = optional("TRIGGER_CHANNEL_ID")
            .map(|value| parse_id("TRIGGER_CHANNEL_ID", &value))
            .transpose()?;
        let pet_update_channel_id = optional("PET_UPDATE_CHANNEL_ID")
            .map(|value| parse_id("PET_UPDATE_CHANNEL_ID", &value))
            .transpose()?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            pet_value_channel_ids,
            trigger_channel_id,
            pet_update_channel_id,
            http_bind_addr: optional("HTTP_BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_HTTP_BIND_ADDR.to_string()),
            pet_seed_file: optional("PET_SEED_FILE").map(PathBuf::from),
        })
    }
}
