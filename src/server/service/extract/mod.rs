//! Extraction of pet value postings from free-form chat text.
//!
//! [`extract`] is pure: it filters out system messages, game bot chatter and text
//! without any pet vocabulary, then tries each [`ExtractionRule`] in priority order.
//! The first rule yielding at least one valid candidate decides the whole message.

pub mod clean;
pub mod rule;

use crate::server::model::pet::Candidate;

pub use rule::ExtractionRule;

/// Substrings of game bot messages that are never pet postings.
const GAME_WORDS: &[&str] = &[
    "wordbomb",
    "trivia",
    "akinator",
    "pokemon",
    "countryball",
    "higher lower",
    "word chain",
    "rhyme time",
    "scramble",
    "hangman",
    "twenty questions",
    "truth or dare",
    "never have i ever",
    "would you rather",
    "counting",
    "rock paper scissors",
    "tic tac toe",
    "connect 4",
    "chess",
    "checkers",
];

/// At least one of these must appear for text to be considered a posting.
const ANCHORS: &[&str] = &[
    "value", "demand", "pet", "🐾", "🪙", "high", "medium", "low", "extremely", "image:", "┆",
];

/// Parses pet value candidates out of a message.
///
/// # Arguments
/// - `text` - Message content
/// - `is_system_message` - True for bot, webhook or non-regular messages
///
/// # Returns
/// - `Vec<Candidate>` - Candidates in order of appearance, empty when nothing matched.
///   `is_single_pet_message` is true iff exactly one candidate was produced.
pub fn extract(text: &str, is_system_message: bool) -> Vec<Candidate> {
    if is_system_message {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    if GAME_WORDS.iter().any(|word| lowered.contains(word)) {
        return Vec::new();
    }
    if !ANCHORS.iter().any(|anchor| lowered.contains(anchor)) {
        return Vec::new();
    }

    for rule in ExtractionRule::ORDER {
        let mut candidates = rule.try_parse(text);
        if candidates.is_empty() {
            continue;
        }

        let single = candidates.len() == 1;
        for candidate in &mut candidates {
            candidate.is_single_pet_message = single;
        }
        return candidates;
    }

    Vec::new()
}
