//! Cleaning of names and fields captured by the extraction rules.

use regex::Regex;
use std::sync::LazyLock;

static LOSSLESS_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^lossless\b\s*").expect("valid lossless prefix regex"));

/// Fragments left over when an image's `lossless` marker leaks into a name.
const NOISE_FRAGMENTS: &[&str] = &["lossless", "losless", "loss", "less"];

/// Field labels that a loose rule can capture as a name.
const FIELD_LABELS: &[&str] = &["value", "demand", "image", "tier", "trend"];

const MIN_NAME_CHARS: usize = 2;

/// Cleans a captured pet name.
///
/// Keeps alphanumerics, whitespace, `-` and `'`, collapses whitespace and strips a
/// leading `lossless` qualifier.
///
/// # Returns
/// - `Some(String)` - Usable display name
/// - `None` - Name is empty, too short, a noise fragment or a field label
pub fn clean_name(raw: &str) -> Option<String> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '\'')
        .collect();
    let collapsed = kept.split_whitespace().collect::<Vec<_>>().join(" ");
    let name = LOSSLESS_PREFIX
        .replace(&collapsed, "")
        .trim_matches(|c: char| c == '-' || c.is_whitespace())
        .to_string();

    let lowered = name.to_lowercase();
    if name.chars().count() < MIN_NAME_CHARS
        || NOISE_FRAGMENTS.contains(&lowered.as_str())
        || FIELD_LABELS.contains(&lowered.as_str())
    {
        return None;
    }

    Some(name)
}

/// Trims whitespace and markdown emphasis around a captured value or demand.
///
/// # Returns
/// - `Some(String)` - Non-empty field
/// - `None` - Nothing left after trimming
pub fn clean_field(raw: &str) -> Option<String> {
    let field = raw
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '*' | '_' | '`' | '~'))
        .to_string();

    (!field.is_empty()).then_some(field)
}
