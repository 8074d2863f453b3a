use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::server::{
    bot::embed::{self, COLOR},
    model::weight::WeightTable,
    service::weight::{predict_at, progression},
};

/// Renders a weight prediction.
///
/// With a target age a single prediction is shown, otherwise a progression of
/// up to ten ages around the current one.
pub fn weight_embed(age: i64, weight: f64, target_age: Option<i64>) -> CreateEmbed {
    let reply = CreateEmbed::new()
        .title("⚖️ Pet Weight Prediction")
        .color(COLOR)
        .field("Current", format!("Age {}: {:.2} kg", age, weight), false);

    match target_age {
        Some(target_age) => match predict_at(age, weight, target_age) {
            Ok(point) => reply.field(
                "Predicted",
                format!("Age {}: {:.2} kg", point.age, point.weight),
                false,
            ),
            Err(e) => embed::error("Invalid Input", e.to_string()),
        },
        None => match progression(age, weight) {
            Ok(table) => reply
                .field("Progression", progression_lines(&table), false)
                .footer(CreateEmbedFooter::new(
                    "Add a target age for a single prediction",
                )),
            Err(e) => embed::error("Invalid Input", e.to_string()),
        },
    }
}

fn progression_lines(table: &WeightTable) -> String {
    table
        .points
        .iter()
        .map(|point| {
            let marker = if point.age == table.current_age {
                " ←"
            } else {
                ""
            };
            format!("Age {}: {:.2} kg{}", point.age, point.weight, marker)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
