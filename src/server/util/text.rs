//! Text normalization shared by the catalog, the resolver and the extractor.

/// Normalizes a pet name or query into its catalog key.
///
/// Lower-cases, collapses internal whitespace to single spaces and trims.
///
/// # Arguments
/// - `input` - Raw name or query text
///
/// # Returns
/// - `String` - Normalized key, empty when `input` is blank
pub fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Removes the `quality=lossless` query parameter from an image URL.
///
/// Other query parameters are preserved in order. A query string left empty is
/// dropped together with its `?`.
///
/// # Arguments
/// - `url` - Image URL as posted
///
/// # Returns
/// - `String` - URL without the lossless quality parameter
pub fn strip_lossless_quality(url: &str) -> String {
    let url = url.trim();
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let kept: Vec<&str> = query
        .split('&')
        .filter(|param| !param.is_empty() && !param.eq_ignore_ascii_case("quality=lossless"))
        .collect();

    if kept.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, kept.join("&"))
    }
}
