//! Legacy JSON catalog import.
//!
//! The legacy file is a JSON object mapping a key to
//! `{name, value, demand, image_url?, last_updated?, message_id?}`. Values and
//! message ids may be numbers or strings. Object order is the catalog order.

use chrono::{DateTime, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::server::model::pet::PetRecord;

#[derive(Debug, Deserialize)]
struct SeedEntry {
    name: Option<String>,
    value: Option<Value>,
    demand: Option<String>,
    image_url: Option<String>,
    last_updated: Option<String>,
    message_id: Option<Value>,
}

/// Renders a JSON scalar the way it was posted.
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Accepts RFC 3339 and naive ISO 8601 timestamps, the latter read as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Parses a legacy catalog file into records in file order.
///
/// Entries without a name fall back to their key. Entries without a value are
/// skipped with a warning.
///
/// # Returns
/// - `Ok(Vec<PetRecord>)` - Parsed records
/// - `Err(serde_json::Error)` - Not a JSON object of entries
pub fn parse_seed(contents: &str) -> Result<Vec<PetRecord>, serde_json::Error> {
    let entries: IndexMap<String, SeedEntry> = serde_json::from_str(contents)?;
    let now = Utc::now();

    let records = entries
        .into_iter()
        .filter_map(|(key, entry)| {
            let Some(value) = entry.value.and_then(scalar_to_string) else {
                tracing::warn!("Skipping seed entry {} without a value", key);
                return None;
            };

            Some(PetRecord {
                name: non_empty(entry.name).unwrap_or(key),
                value,
                demand: non_empty(entry.demand),
                image_url: non_empty(entry.image_url),
                last_updated: entry
                    .last_updated
                    .as_deref()
                    .and_then(parse_timestamp)
                    .unwrap_or(now),
                message_id: entry.message_id.and_then(scalar_to_string),
            })
        })
        .collect();

    Ok(records)
}
