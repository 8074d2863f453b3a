//! Fuzzy resolution of a user query against a catalog snapshot.
//!
//! Scoring per catalog entry:
//! - exact normalized key: 100, returned immediately
//! - otherwise the best of containment (`100 * shorter / longer`), Levenshtein ratio
//!   and token overlap, capped at 99
//!
//! Entries below [`CONFIDENCE_FLOOR`] are dropped. The rest are ranked by confidence
//! with ties going to the earlier catalog entry.

use crate::server::{
    error::resolve::ResolveError,
    model::{
        catalog::Catalog,
        resolution::{Confidence, PetMatch, Resolution},
    },
    util::{
        similarity::{containment_ratio, similarity},
        text::normalize,
    },
};

/// Minimum confidence for a match to be reported at all.
pub const CONFIDENCE_FLOOR: u8 = 50;
/// Minimum confidence for a fuzzy match to be accepted without asking.
pub const AUTO_ACCEPT: u8 = 80;
/// The runner-up must trail an auto-accepted match by more than this.
pub const AMBIGUITY_MARGIN: u8 = 5;
pub const MAX_ALTERNATIVES: usize = 4;
/// Highest confidence a non-exact match can reach.
const FUZZY_CAP: u8 = 99;

/// Confidence that `query` refers to `key`. Both must be normalized.
pub fn score(query: &str, key: &str) -> Confidence {
    if query == key {
        return Confidence::EXACT;
    }

    let containment = containment_ratio(query, key).unwrap_or(0);
    Confidence::new(containment.max(similarity(query, key)).min(FUZZY_CAP))
}

/// Resolves a pet name query.
///
/// # Arguments
/// - `query` - Raw user input
/// - `catalog` - Consistent catalog snapshot
///
/// # Returns
/// - `Ok(Resolution::Exact)` - Exact hit, or a clear fuzzy winner
/// - `Ok(Resolution::Ambiguous)` - Candidates cleared the floor but none was accepted
/// - `Ok(Resolution::NotFound)` - Nothing cleared the floor
/// - `Err(ResolveError::InvalidQuery)` - Query is empty or whitespace
pub fn resolve(query: &str, catalog: &Catalog) -> Result<Resolution, ResolveError> {
    let query = normalize(query);
    if query.is_empty() {
        return Err(ResolveError::InvalidQuery);
    }

    if let Some(record) = catalog.get(&query) {
        return Ok(Resolution::Exact(PetMatch {
            record: record.clone(),
            confidence: Confidence::EXACT,
        }));
    }

    let mut ranked: Vec<_> = catalog
        .iter()
        .map(|(key, record)| (score(&query, key), record))
        .filter(|(confidence, _)| confidence.percent() >= CONFIDENCE_FLOOR)
        .collect();
    // Stable sort keeps catalog order among equal confidences.
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    let mut matches = ranked.into_iter().map(|(confidence, record)| PetMatch {
        record: record.clone(),
        confidence,
    });

    let Some(best) = matches.next() else {
        return Ok(Resolution::NotFound);
    };
    let alternatives: Vec<PetMatch> = matches.take(MAX_ALTERNATIVES).collect();

    let best_percent = best.confidence.percent();
    let clear_lead = alternatives
        .first()
        .is_none_or(|runner_up| best_percent - runner_up.confidence.percent() > AMBIGUITY_MARGIN);

    if best_percent >= AUTO_ACCEPT && clear_lead {
        return Ok(Resolution::Exact(best));
    }

    Ok(Resolution::Ambiguous {
        best_guess: best,
        alternatives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::pet::PetRecord;
    use chrono::Utc;

    fn catalog(entries: &[(&str, &str)]) -> Catalog {
        Catalog::from_records(entries.iter().map(|(name, value)| PetRecord {
            name: name.to_string(),
            value: value.to_string(),
            demand: None,
            image_url: None,
            last_updated: Utc::now(),
            message_id: None,
        }))
    }

    fn best_name(resolution: &Resolution) -> Option<&str> {
        match resolution {
            Resolution::Exact(best) => Some(best.record.name.as_str()),
            Resolution::Ambiguous { best_guess, .. } => Some(best_guess.record.name.as_str()),
            Resolution::NotFound => None,
        }
    }

    #[test]
    fn empty_query_is_invalid() {
        let catalog = catalog(&[("Dragon", "100")]);

        assert_eq!(resolve("", &catalog), Err(ResolveError::InvalidQuery));
        assert_eq!(resolve("   ", &catalog), Err(ResolveError::InvalidQuery));
    }

    #[test]
    fn every_entry_resolves_exactly_by_its_normalized_name() {
        let catalog = catalog(&[("Golden Dragon", "1"), ("T-Rex", "2"), ("Turtle", "3")]);

        for record in catalog.records() {
            let resolution = resolve(&normalize(&record.name), &catalog).unwrap();
            match resolution {
                Resolution::Exact(best) => {
                    assert_eq!(best.record.name, record.name);
                    assert_eq!(best.confidence, Confidence::EXACT);
                }
                other => panic!("expected exact match, got {:?}", other),
            }
        }
    }

    #[test]
    fn close_typo_is_auto_accepted() {
        let catalog = catalog(&[("turtle", "100"), ("t-rex", "5000")]);

        let resolution = resolve("trex", &catalog).unwrap();

        match resolution {
            Resolution::Exact(best) => {
                assert_eq!(best.record.name, "t-rex");
                assert_eq!(best.confidence.percent(), 80);
            }
            other => panic!("expected exact match, got {:?}", other),
        }
        assert!(score("trex", "turtle").percent() < CONFIDENCE_FLOOR);
    }

    #[test]
    fn unrelated_query_is_not_found() {
        let catalog = catalog(&[("turtle", "100"), ("t-rex", "5000")]);

        assert_eq!(resolve("xyzabc123", &catalog), Ok(Resolution::NotFound));
    }

    #[test]
    fn close_runner_up_makes_result_ambiguous() {
        let catalog = catalog(&[("dragon fly", "1"), ("dragon fox", "2")]);

        let resolution = resolve("dragon f", &catalog).unwrap();

        match resolution {
            Resolution::Ambiguous {
                best_guess,
                alternatives,
            } => {
                assert_eq!(best_guess.record.name, "dragon fly");
                assert_eq!(alternatives.len(), 1);
                assert_eq!(alternatives[0].record.name, "dragon fox");
            }
            other => panic!("expected ambiguous result, got {:?}", other),
        }
    }

    #[test]
    fn equal_confidence_prefers_earlier_entry() {
        let catalog = catalog(&[("cat b", "1"), ("cat a", "2")]);

        let resolution = resolve("cat", &catalog).unwrap();

        assert_eq!(best_name(&resolution), Some("cat b"));
    }

    #[test]
    fn weak_single_match_is_ambiguous_not_exact() {
        let catalog = catalog(&[("dragon", "1")]);

        let resolution = resolve("drag", &catalog).unwrap();

        match resolution {
            Resolution::Ambiguous {
                best_guess,
                alternatives,
            } => {
                assert_eq!(best_guess.confidence.percent(), 67);
                assert!(alternatives.is_empty());
            }
            other => panic!("expected ambiguous result, got {:?}", other),
        }
    }

    #[test]
    fn nothing_below_floor_is_reported_and_alternatives_are_capped() {
        let catalog = catalog(&[
            ("cat a", "1"),
            ("cat b", "2"),
            ("cat c", "3"),
            ("cat d", "4"),
            ("cat e", "5"),
            ("cat f", "6"),
            ("elephant", "7"),
        ]);

        let resolution = resolve("cat", &catalog).unwrap();

        match resolution {
            Resolution::Ambiguous {
                best_guess,
                alternatives,
            } => {
                assert!(best_guess.confidence.percent() >= CONFIDENCE_FLOOR);
                assert_eq!(alternatives.len(), MAX_ALTERNATIVES);
                assert!(alternatives
                    .iter()
                    .all(|m| m.confidence.percent() >= CONFIDENCE_FLOOR));
                assert!(alternatives.iter().all(|m| m.record.name != "elephant"));
            }
            other => panic!("expected ambiguous result, got {:?}", other),
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let catalog = catalog(&[("dragon fly", "1"), ("dragon fish", "2"), ("dragon", "3")]);

        let first = resolve("dragn", &catalog);
        for _ in 0..10 {
            assert_eq!(resolve("dragn", &catalog), first);
        }
    }
}
