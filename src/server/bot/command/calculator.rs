use serenity::all::CreateEmbed;

use crate::server::{
    bot::embed::{self, COLOR},
    service::calculator::{evaluate, format_result},
};

pub fn calculate_embed(expression: &str) -> CreateEmbed {
    match evaluate(expression) {
        Ok(result) => CreateEmbed::new()
            .title("🧮 Calculator")
            .color(COLOR)
            .field("Expression", format!("`{}`", expression), false)
            .field("Result", format!("**{}**", format_result(result)), false),
        Err(e) => embed::error("Calculation Error", e.to_string()),
    }
}
