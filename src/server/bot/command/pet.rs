use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::server::{
    bot::{
        command::PET_VALUE_USAGE,
        embed::{self, COLOR},
    },
    model::{
        catalog::Catalog,
        resolution::{PetMatch, Resolution},
    },
};

pub const PETS_PER_PAGE: usize = 15;

fn match_footer(best: &PetMatch) -> String {
    format!("Info: ({} match)", best.confidence)
}

/// Renders the outcome of a pet value lookup.
///
/// # Arguments
/// - `query` - Name as the user typed it
/// - `resolution` - Resolver outcome
/// - `examples` - Catalog names suggested when nothing matched
pub fn value_embed(query: &str, resolution: Resolution, examples: &[String]) -> CreateEmbed {
    match resolution {
        Resolution::Exact(best) => embed::pet_record(&best.record, match_footer(&best)),
        Resolution::Ambiguous {
            best_guess,
            alternatives,
        } => {
            let mut reply = embed::pet_record(&best_guess.record, match_footer(&best_guess))
                .description(format!("Closest match for **{}**", query));

            if !alternatives.is_empty() {
                let suggestions = alternatives
                    .iter()
                    .map(|alternative| {
                        format!("• {} ({})", alternative.record.name, alternative.confidence)
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                reply = reply.field("🤔 Did you mean", suggestions, false);
            }

            reply
        }
        Resolution::NotFound => {
            let mut reply = embed::error(
                "Pet Not Found",
                format!("No pet named **{}** is in the database.", query),
            );

            if !examples.is_empty() {
                reply = reply.field("Try one of", examples.join(", "), false);
            }

            reply
        }
    }
}

pub fn invalid_query_embed() -> CreateEmbed {
    embed::error("Missing Pet Name", PET_VALUE_USAGE)
}

/// Renders one page of the catalog in insertion order.
pub fn list_embed(catalog: &Catalog, page: usize) -> CreateEmbed {
    if catalog.is_empty() {
        return embed::error("No Pets", "No pets found in database.");
    }

    let Some(page) = catalog.page(page, PETS_PER_PAGE) else {
        return embed::error(
            "Invalid Page",
            format!(
                "Invalid page number. Pages available: 1-{}",
                catalog.total_pages(PETS_PER_PAGE)
            ),
        );
    };

    let lines = page
        .records
        .iter()
        .map(|record| {
            format!(
                "{} **{}** - {}",
                embed::demand_emoji(record.demand.as_deref()),
                record.name,
                record.value
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut reply = CreateEmbed::new()
        .title("🐾 Pet Database")
        .description(lines)
        .color(COLOR)
        .field("📊 Total Pets", page.total_records.to_string(), true)
        .field(
            "📄 Page",
            format!("{}/{}", page.page, page.total_pages),
            true,
        );

    if page.page < page.total_pages {
        reply = reply.footer(CreateEmbedFooter::new(format!(
            "Use gs.petlist {} for the next page",
            page.page + 1
        )));
    }

    reply
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::Value;

    use super::*;
    use crate::server::model::{pet::PetRecord, resolution::Confidence};

    fn record(name: &str, value: &str) -> PetRecord {
        PetRecord {
            name: name.to_string(),
            value: value.to_string(),
            demand: Some("High".to_string()),
            image_url: None,
            last_updated: Utc::now(),
            message_id: None,
        }
    }

    fn pet_match(name: &str, confidence: u8) -> PetMatch {
        PetMatch {
            record: record(name, "100"),
            confidence: Confidence::new(confidence),
        }
    }

    fn json(embed: &CreateEmbed) -> Value {
        serde_json::to_value(embed).unwrap()
    }

    #[test]
    fn exact_match_shows_confidence_footer() {
        let embed = json(&value_embed(
            "frost",
            Resolution::Exact(pet_match("Frost Dragon", 100)),
            &[],
        ));

        assert_eq!(embed["title"], "🐾 Frost Dragon");
        assert_eq!(embed["footer"]["text"], "Info: (100% match)");
    }

    #[test]
    fn ambiguous_match_lists_alternatives() {
        let embed = json(&value_embed(
            "dragon",
            Resolution::Ambiguous {
                best_guess: pet_match("Dragon Fly", 80),
                alternatives: vec![pet_match("Dragon Fox", 80)],
            },
            &[],
        ));

        let fields = embed["fields"].as_array().unwrap();
        let did_you_mean = fields
            .iter()
            .find(|field| field["name"] == "🤔 Did you mean")
            .unwrap();
        assert_eq!(did_you_mean["value"], "• Dragon Fox (80%)");
        assert_eq!(embed["footer"]["text"], "Info: (80% match)");
    }

    #[test]
    fn not_found_suggests_examples() {
        let examples = vec!["Cat".to_string(), "Dog".to_string()];
        let embed = json(&value_embed("zebra", Resolution::NotFound, &examples));

        assert!(embed["description"].as_str().unwrap().contains("zebra"));
        assert_eq!(embed["fields"][0]["value"], "Cat, Dog");
    }

    #[test]
    fn lists_pages_of_fifteen() {
        let catalog = Catalog::from_records(
            (1..=20).map(|i| record(&format!("Pet {}", i), &i.to_string())),
        );

        let first = json(&list_embed(&catalog, 1));
        let lines = first["description"].as_str().unwrap().lines().count();
        assert_eq!(lines, PETS_PER_PAGE);
        assert_eq!(first["footer"]["text"], "Use gs.petlist 2 for the next page");

        let second = json(&list_embed(&catalog, 2));
        assert_eq!(second["description"].as_str().unwrap().lines().count(), 5);
        assert!(second["description"]
            .as_str()
            .unwrap()
            .starts_with("🔥 **Pet 16** - 16"));
    }

    #[test]
    fn out_of_range_page_reports_valid_range() {
        let catalog = Catalog::from_records([record("Cat", "5")]);

        let embed = json(&list_embed(&catalog, 4));
        assert_eq!(
            embed["description"],
            "Invalid page number. Pages available: 1-1"
        );
    }

    #[test]
    fn empty_catalog_has_message() {
        let embed = json(&list_embed(&Catalog::new(), 1));
        assert_eq!(embed["description"], "No pets found in database.");
    }
}
