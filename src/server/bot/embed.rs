//! Shared embed building blocks for bot replies and catalog announcements.

use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::server::model::pet::{PetChange, PetRecord};

/// Accent color of every bot embed.
pub const COLOR: u32 = 0xFFC916;
pub const ERROR_COLOR: u32 = 0xE74C3C;

/// Emoji shown next to a demand label.
pub fn demand_emoji(demand: Option<&str>) -> &'static str {
    match demand.map(str::trim) {
        Some("High") => "🔥",
        Some("Medium") => "📈",
        Some("Low") => "📉",
        Some("Extremely High") => "💎",
        Some("Terrible") => "💀",
        _ => "📊",
    }
}

/// Error reply with a title and a single explanatory line.
pub fn error(title: &str, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("❌ {}", title))
        .description(description)
        .color(ERROR_COLOR)
}

/// Builds the embed showing one pet record.
///
/// # Arguments
/// - `record` - Pet to display
/// - `footer` - Footer text, typically the match confidence
pub fn pet_record(record: &PetRecord, footer: String) -> CreateEmbed {
    let demand = record.demand.as_deref().unwrap_or("Unknown");

    let mut embed = CreateEmbed::new()
        .title(format!("🐾 {}", record.name))
        .color(COLOR)
        .field("💰 Value", &record.value, true)
        .field(
            "📊 Demand",
            format!("{} {}", demand_emoji(record.demand.as_deref()), demand),
            true,
        )
        .field(
            "🕒 Last Updated",
            format!("<t:{}:R>", record.last_updated.timestamp()),
            false,
        )
        .footer(CreateEmbedFooter::new(footer));

    if let Some(image_url) = &record.image_url {
        embed = embed.thumbnail(image_url);
    }

    embed
}

fn details(record: &PetRecord) -> String {
    format!(
        "**Value:** {}\n**Demand:** {}",
        record.value,
        record.demand.as_deref().unwrap_or("N/A")
    )
}

fn changed_fields(before: &PetRecord, after: &PetRecord) -> Vec<String> {
    let fields = [
        ("Value", Some(before.value.as_str()), Some(after.value.as_str())),
        ("Demand", before.demand.as_deref(), after.demand.as_deref()),
        ("Image", before.image_url.as_deref(), after.image_url.as_deref()),
    ];

    fields
        .into_iter()
        .filter(|(_, old, new)| old != new)
        .map(|(label, old, new)| {
            format!(
                "**{}:** {} → {}",
                label,
                old.unwrap_or("N/A"),
                new.unwrap_or("N/A")
            )
        })
        .collect()
}

/// Builds the announcement of an admin catalog change.
pub fn pet_change(change: &PetChange) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("🐾 Pet Database Update")
        .color(COLOR)
        .timestamp(Timestamp::now())
        .footer(CreateEmbedFooter::new("🌐 Updated via Admin API"));

    match change {
        PetChange::Added(record) => embed
            .field("➕ New Pet Added", format!("**{}**", record.name), false)
            .field("📊 Pet Details", details(record), true),
        PetChange::Updated { before, after } => {
            let embed = embed.field("✏️ Pet Updated", format!("**{}**", after.name), false);
            let changes = changed_fields(before, after);
            if changes.is_empty() {
                embed
            } else {
                embed.field("📈 Changes Made", changes.join("\n"), false)
            }
        }
        PetChange::Deleted(record) => embed
            .field("🗑️ Pet Deleted", format!("**{}**", record.name), false)
            .field("📊 Previous Details", details(record), true),
    }
}
