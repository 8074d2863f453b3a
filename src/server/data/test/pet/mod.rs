use crate::server::{data::pet::PetRepository, model::pet::PetRecord};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod delete_by_key;
mod get_all;
mod upsert;

fn record(name: &str, value: &str) -> PetRecord {
    PetRecord {
        name: name.to_string(),
        value: value.to_string(),
        demand: Some("High".to_string()),
        image_url: None,
        last_updated: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
        message_id: None,
    }
}
