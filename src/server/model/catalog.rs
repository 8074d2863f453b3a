//! In-memory pet catalog.
//!
//! An insertion-ordered map from normalized name to [`PetRecord`]. Re-inserting a
//! key replaces the record in place, so a pet keeps its catalog position across
//! updates. The catalog does no I/O; persistence is handled by
//! [`PetCatalog`](crate::server::service::catalog::PetCatalog).

use indexmap::IndexMap;

use crate::server::{
    model::pet::{Candidate, IngestContext, PetRecord},
    util::text::normalize,
};

/// One page of catalog records.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    /// 1-based page number
    pub page: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub records: Vec<&'a PetRecord>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: IndexMap<String, PetRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from records in insertion order.
    ///
    /// A later record with the same normalized name replaces the earlier one at the
    /// earlier position.
    pub fn from_records(records: impl IntoIterator<Item = PetRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Looks up a record by name, ignoring case and extra whitespace.
    pub fn get(&self, name: &str) -> Option<&PetRecord> {
        self.records.get(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates `(key, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PetRecord)> {
        self.records.iter().map(|(key, record)| (key.as_str(), record))
    }

    /// Iterates records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &PetRecord> {
        self.records.values()
    }

    pub fn total_pages(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.records.len().div_ceil(per_page)
    }

    /// Returns a 1-based page of records.
    ///
    /// # Returns
    /// - `Some(CatalogPage)` - `page` is within `1..=total_pages`
    /// - `None` - Page out of range or the catalog is empty
    pub fn page(&self, page: usize, per_page: usize) -> Option<CatalogPage<'_>> {
        let total_pages = self.total_pages(per_page);
        if page == 0 || page > total_pages {
            return None;
        }

        let records = self
            .records
            .values()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Some(CatalogPage {
            page,
            total_pages,
            total_records: self.records.len(),
            records,
        })
    }

    /// The first `count` display names in insertion order.
    pub fn sample_names(&self, count: usize) -> Vec<String> {
        self.records
            .values()
            .take(count)
            .map(|record| record.name.clone())
            .collect()
    }

    /// Computes the record a candidate merges into, without mutating the catalog.
    ///
    /// An existing record keeps its display name. `value`, `demand`, `message_id`
    /// and `last_updated` always come from the candidate and context. The image is
    /// cleared for multi-pet postings. For a single-pet posting it is the posting's
    /// `Image:` URL, else the message's only image, else the stored image.
    pub fn merged_record(&self, candidate: &Candidate, context: &IngestContext) -> PetRecord {
        let existing = self.records.get(&normalize(&candidate.raw_name));

        let image_url = if candidate.is_single_pet_message {
            candidate
                .image_url
                .clone()
                .or_else(|| context.attachment_image.clone())
                .or_else(|| existing.and_then(|record| record.image_url.clone()))
        } else {
            None
        };

        PetRecord {
            name: existing
                .map(|record| record.name.clone())
                .unwrap_or_else(|| candidate.raw_name.clone()),
            value: candidate.value.clone(),
            demand: candidate.demand.clone(),
            image_url,
            last_updated: context.timestamp,
            message_id: context.message_id.clone(),
        }
    }

    /// Inserts or replaces a record under its normalized name.
    pub fn insert(&mut self, record: PetRecord) {
        self.records.insert(record.key(), record);
    }

    /// Removes a record by name, keeping the order of the remaining records.
    pub fn remove(&mut self, name: &str) -> Option<PetRecord> {
        self.records.shift_remove(&normalize(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(name: &str, value: &str, image_url: Option<&str>) -> PetRecord {
        PetRecord {
            name: name.to_string(),
            value: value.to_string(),
            demand: Some("High".to_string()),
            image_url: image_url.map(str::to_string),
            last_updated: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            message_id: None,
        }
    }

    fn candidate(name: &str, value: &str, single: bool, image_url: Option<&str>) -> Candidate {
        Candidate {
            raw_name: name.to_string(),
            value: value.to_string(),
            demand: Some("Low".to_string()),
            is_single_pet_message: single,
            image_url: image_url.map(str::to_string),
        }
    }

    fn context() -> IngestContext {
        IngestContext {
            message_id: Some("42".to_string()),
            attachment_image: None,
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn reinserting_key_keeps_position() {
        let mut catalog = Catalog::from_records([
            record("Dragon", "100", None),
            record("Unicorn", "200", None),
        ]);

        catalog.insert(record("  DRAGON ", "300", None));

        let values: Vec<_> = catalog.records().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["300", "200"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut catalog = Catalog::from_records([
            record("Dragon", "100", None),
            record("Unicorn", "200", None),
            record("Cat", "5", None),
        ]);

        let removed = catalog.remove("UNICORN");

        assert_eq!(removed.map(|r| r.name), Some("Unicorn".to_string()));
        assert_eq!(catalog.sample_names(5), vec!["Dragon", "Cat"]);
        assert_eq!(catalog.remove("unicorn"), None);
    }

    #[test]
    fn merge_overwrites_fields_and_keeps_display_name() {
        let catalog = Catalog::from_records([record("Golden Dragon", "100", None)]);

        let merged = catalog.merged_record(&candidate("golden dragon", "500", true, None), &context());

        assert_eq!(merged.name, "Golden Dragon");
        assert_eq!(merged.value, "500");
        assert_eq!(merged.demand.as_deref(), Some("Low"));
        assert_eq!(merged.message_id.as_deref(), Some("42"));
        assert_eq!(merged.last_updated, context().timestamp);
    }

    #[test]
    fn multi_pet_merge_clears_image() {
        let catalog = Catalog::from_records([record("Dragon", "100", Some("https://img/a.png"))]);

        let merged = catalog.merged_record(
            &candidate("Dragon", "500", false, Some("https://img/b.png")),
            &context(),
        );

        assert_eq!(merged.image_url, None);
    }

    #[test]
    fn single_pet_merge_prefers_text_then_attachment_then_stored_image() {
        let catalog = Catalog::from_records([record("Dragon", "100", Some("https://img/stored.png"))]);
        let mut ctx = context();
        ctx.attachment_image = Some("https://img/attached.png".to_string());

        let from_text = catalog.merged_record(
            &candidate("Dragon", "1", true, Some("https://img/text.png")),
            &ctx,
        );
        assert_eq!(from_text.image_url.as_deref(), Some("https://img/text.png"));

        let from_attachment = catalog.merged_record(&candidate("Dragon", "1", true, None), &ctx);
        assert_eq!(
            from_attachment.image_url.as_deref(),
            Some("https://img/attached.png")
        );

        let kept = catalog.merged_record(&candidate("Dragon", "1", true, None), &context());
        assert_eq!(kept.image_url.as_deref(), Some("https://img/stored.png"));
    }

    #[test]
    fn pages_are_one_based_and_bounded() {
        let catalog = Catalog::from_records(
            (1..=17).map(|i| record(&format!("Pet {}", i), &i.to_string(), None)),
        );

        assert_eq!(catalog.total_pages(15), 2);
        let second = catalog.page(2, 15).unwrap();
        assert_eq!(second.records.len(), 2);
        assert_eq!(second.records[0].name, "Pet 16");
        assert!(catalog.page(0, 15).is_none());
        assert!(catalog.page(3, 15).is_none());
        assert!(Catalog::new().page(1, 15).is_none());
    }

    #[test]
    fn sample_names_follow_insertion_order() {
        let catalog = Catalog::from_records([
            record("Zebra", "1", None),
            record("Ant", "2", None),
            record("Moth", "3", None),
        ]);

        assert_eq!(catalog.sample_names(2), vec!["Zebra", "Ant"]);
        assert_eq!(catalog.sample_names(10).len(), 3);
    }
}
