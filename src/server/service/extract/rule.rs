//! Ordered posting layouts recognized by the extractor.
//!
//! Layouts are matched per line. Markdown emphasis around a line is tolerated, and a
//! bracketed posting may carry any prefix before its opening parenthesis.

use regex::Regex;
use std::sync::LazyLock;

use crate::server::{
    model::pet::Candidate,
    service::extract::clean::{clean_field, clean_name},
    util::text::strip_lossless_quality,
};

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[^\n(]*?\((?P<name>[^()\n]+)\)[ \t]*-[ \t]*(?P<value>[^┆|\n]+?)[ \t]*[┆|][ \t]*demand[ \t]*:[ \t]*(?P<demand>[^┆|\n]+?)(?:[ \t]*[┆|][ \t]*image[ \t]*:[ \t]*(?P<image>\S+?))?[*_~`]*[ \t]*\r?$",
    )
    .expect("valid bracketed rule regex")
});

static PIPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?P<name>[^()┆|:\n]+?)[ \t]+-[ \t]+(?P<value>[^┆|\n]+?)[ \t]*[┆|][ \t]*demand[ \t]*:[ \t]*(?P<demand>[^┆|\n]+?)(?:[ \t]*[┆|][ \t]*image[ \t]*:[ \t]*(?P<image>\S+?))?[*_~`]*[ \t]*\r?$",
    )
    .expect("valid piped rule regex")
});

static COLON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?P<name>[^()┆|:\n]+?)[ \t]*:[ \t]*(?P<value>[^()┆|:\n]+?)[ \t]*\((?P<demand>[^()\n]+)\)[*_~`]*[ \t]*\r?$",
    )
    .expect("valid colon rule regex")
});

static DASHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?P<name>[^()┆|:\n]+?)[ \t]+-[ \t]+[*_~`]*(?P<value>\d[^┆|\n]*?|n/a)[*_~`]*[ \t]*\r?$",
    )
    .expect("valid dashed rule regex")
});

/// A posting layout, tried in [`ExtractionRule::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionRule {
    /// `(NAME) - VALUE ┆ Demand: DEMAND [┆ Image: URL]`
    Bracketed,
    /// `NAME - VALUE ┆ Demand: DEMAND [┆ Image: URL]`
    Piped,
    /// `NAME: VALUE (DEMAND)`
    Colon,
    /// `NAME - VALUE` where VALUE starts with a digit or is `N/A`. No demand.
    Dashed,
}

impl ExtractionRule {
    /// Priority order. The first rule producing a valid candidate decides a message.
    pub const ORDER: [ExtractionRule; 4] = [
        ExtractionRule::Bracketed,
        ExtractionRule::Piped,
        ExtractionRule::Colon,
        ExtractionRule::Dashed,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Bracketed => &BRACKETED,
            Self::Piped => &PIPED,
            Self::Colon => &COLON,
            Self::Dashed => &DASHED,
        }
    }

    /// Parses every line of `text` matching this layout.
    ///
    /// Matches whose name or value is unusable after cleaning are skipped. Returned
    /// candidates are in order of appearance with `is_single_pet_message` unset.
    pub fn try_parse(self, text: &str) -> Vec<Candidate> {
        self.pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let raw_name = clean_name(caps.name("name")?.as_str())?;
                let value = clean_field(caps.name("value")?.as_str())?;

                Some(Candidate {
                    raw_name,
                    value,
                    demand: caps.name("demand").and_then(|m| clean_field(m.as_str())),
                    is_single_pet_message: false,
                    image_url: caps
                        .name("image")
                        .map(|m| strip_lossless_quality(m.as_str())),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracketed_captures_optional_image() {
        let candidates = ExtractionRule::Bracketed.try_parse(
            "(Golden Dragon) - 5,000 ┆ Demand: Extremely High ┆ Image: https://cdn.example/d.png?format=webp&quality=lossless",
        );

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].raw_name, "Golden Dragon");
        assert_eq!(candidates[0].value, "5,000");
        assert_eq!(candidates[0].demand.as_deref(), Some("Extremely High"));
        assert_eq!(
            candidates[0].image_url.as_deref(),
            Some("https://cdn.example/d.png?format=webp")
        );
    }

    #[test]
    fn bracketed_accepts_prefix_and_markdown() {
        for line in [
            "**(Dragon) - 5000 ┆ Demand: High**",
            "🐾 (Dragon) - 5000 ┆ Demand: High",
            "New value: (Dragon) - 5000 ┆ Demand: High",
        ] {
            let candidates = ExtractionRule::Bracketed.try_parse(line);

            assert_eq!(candidates.len(), 1, "{}", line);
            assert_eq!(candidates[0].raw_name, "Dragon");
            assert_eq!(candidates[0].value, "5000");
            assert_eq!(candidates[0].demand.as_deref(), Some("High"));
        }
    }

    #[test]
    fn bracketed_keeps_markdown_out_of_image() {
        let candidates = ExtractionRule::Bracketed
            .try_parse("__(Dragon)- (5000)┆ Demand: (High) ┆Image:https://cdn.example/d.png__");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].value, "(5000)");
        assert_eq!(
            candidates[0].image_url.as_deref(),
            Some("https://cdn.example/d.png")
        );
    }

    #[test]
    fn colon_and_dashed_tolerate_emphasis() {
        let colon = ExtractionRule::Colon.try_parse("**Dragon: 5000 (High)**");
        assert_eq!(colon.len(), 1);
        assert_eq!(colon[0].raw_name, "Dragon");

        let dashed = ExtractionRule::Dashed.try_parse("Dragon - **5000**");
        assert_eq!(dashed.len(), 1);
        assert_eq!(dashed[0].value, "5000");
    }

    #[test]
    fn piped_keeps_hyphenated_names() {
        let candidates =
            ExtractionRule::Piped.try_parse("T-Rex - 5000 ┆ Demand: High\nUnicorn - 300 ┆ Demand: Low");

        let names: Vec<_> = candidates.iter().map(|c| c.raw_name.as_str()).collect();
        assert_eq!(names, vec!["T-Rex", "Unicorn"]);
        assert!(candidates.iter().all(|c| c.image_url.is_none()));
    }

    #[test]
    fn piped_does_not_match_bracketed_lines() {
        assert!(ExtractionRule::Piped
            .try_parse("(Dragon) - 5000 ┆ Demand: High")
            .is_empty());
    }

    #[test]
    fn colon_reads_demand_from_parentheses() {
        let candidates = ExtractionRule::Colon.try_parse("Dragon: 5000 (High)");

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].value, "5000");
        assert_eq!(candidates[0].demand.as_deref(), Some("High"));
    }

    #[test]
    fn colon_skips_label_names() {
        assert!(ExtractionRule::Colon.try_parse("Demand: High (rising)").is_empty());
    }

    #[test]
    fn dashed_requires_numeric_or_na_value() {
        let candidates =
            ExtractionRule::Dashed.try_parse("Dragon - 5000\nUnicorn - n/a\nNotes - soon");

        let parsed: Vec<_> = candidates
            .iter()
            .map(|c| (c.raw_name.as_str(), c.value.as_str(), c.demand.clone()))
            .collect();
        assert_eq!(parsed, vec![("Dragon", "5000", None), ("Unicorn", "n/a", None)]);
    }
}
