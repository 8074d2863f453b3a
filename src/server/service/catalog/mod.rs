//! Shared, persistence-backed pet catalog handle.
//!
//! [`PetCatalog`] owns the in-memory [`Catalog`] behind a tokio `RwLock` together with
//! the database connection. Readers take a snapshot through [`PetCatalog::read`].
//! An ingest holds the write lock for its whole duration and stores each merged
//! record before inserting it in memory, so readers see either the state before a
//! record's update or after it. Admin writes follow the same order: the row is
//! stored or deleted first, then the in-memory catalog changes.

pub mod seed;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::server::{
    data::pet::PetRepository,
    error::{resolve::ResolveError, AppError},
    model::{
        catalog::Catalog,
        pet::{Candidate, CreatePetParams, IngestContext, PetChange, PetRecord, UpdatePetParams},
        resolution::Resolution,
    },
    service::{extract::clean::clean_name, resolve::resolve},
};

/// Number of example names offered when a lookup finds nothing.
pub const EXAMPLE_NAME_COUNT: usize = 5;

#[derive(Clone)]
pub struct PetCatalog {
    db: DatabaseConnection,
    catalog: Arc<RwLock<Catalog>>,
}

impl PetCatalog {
    /// Loads the catalog from the database.
    ///
    /// # Arguments
    /// - `db` - Database connection with migrations applied
    ///
    /// # Returns
    /// - `Ok(PetCatalog)` - Handle with every stored pet in insertion order
    /// - `Err(AppError::DbErr)` - Failed to read the pet table
    pub async fn load(db: DatabaseConnection) -> Result<Self, AppError> {
        let records = PetRepository::new(&db).get_all().await?;
        let catalog = Catalog::from_records(records);

        tracing::info!("Loaded {} pets into the catalog", catalog.len());

        Ok(Self {
            db,
            catalog: Arc::new(RwLock::new(catalog)),
        })
    }

    /// Acquires a read snapshot of the catalog.
    pub async fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().await
    }

    /// Resolves a query against the current catalog.
    ///
    /// # Returns
    /// - `Ok((Resolution, examples))` - Outcome plus example names for `NotFound`
    /// - `Err(ResolveError::InvalidQuery)` - Query is empty or whitespace
    pub async fn resolve(&self, query: &str) -> Result<(Resolution, Vec<String>), ResolveError> {
        let catalog = self.read().await;
        let resolution = resolve(query, &catalog)?;
        let examples = match resolution {
            Resolution::NotFound => catalog.sample_names(EXAMPLE_NAME_COUNT),
            _ => Vec::new(),
        };
        Ok((resolution, examples))
    }

    /// Merges extracted candidates into the catalog and persists them.
    ///
    /// Candidates are applied in order. A database failure stops the ingest; records
    /// merged before the failure stay applied.
    ///
    /// # Arguments
    /// - `candidates` - Output of the extractor for one message
    /// - `context` - Message id, timestamp and attachment image of that message
    ///
    /// # Returns
    /// - `Ok(Vec<PetRecord>)` - The stored records
    /// - `Err(AppError::DbErr)` - Failed to persist a record
    pub async fn ingest(
        &self,
        candidates: Vec<Candidate>,
        context: &IngestContext,
    ) -> Result<Vec<PetRecord>, AppError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut catalog = self.catalog.write().await;
        let repo = PetRepository::new(&self.db);
        let mut stored = Vec::with_capacity(candidates.len());

        for candidate in &candidates {
            let record = catalog.merged_record(candidate, context);
            let record = repo.upsert(&record).await?;
            tracing::debug!("Updated pet {} to value {}", record.name, record.value);

            catalog.insert(record.clone());
            stored.push(record);
        }

        Ok(stored)
    }

    /// Adds a pet through the admin API.
    ///
    /// # Returns
    /// - `Ok(PetChange::Added)` - The stored pet
    /// - `Err(AppError::BadRequest)` - Name is blank or its key is already taken
    /// - `Err(AppError::DbErr)` - Failed to persist the pet
    pub async fn create(&self, params: CreatePetParams) -> Result<PetChange, AppError> {
        if clean_name(&params.name).is_none() {
            return Err(AppError::BadRequest(format!(
                "Invalid pet name {:?}",
                params.name
            )));
        }

        let mut catalog = self.catalog.write().await;
        if let Some(existing) = catalog.get(&params.name) {
            return Err(AppError::BadRequest(format!(
                "Pet {} already exists",
                existing.name
            )));
        }

        let record = params.into_record(Utc::now());
        let record = PetRepository::new(&self.db).upsert(&record).await?;
        catalog.insert(record.clone());

        tracing::info!("Added pet {} ({})", record.name, record.key());

        Ok(PetChange::Added(record))
    }

    /// Replaces fields of an existing pet through the admin API.
    ///
    /// # Arguments
    /// - `key` - Pet name or key, normalized before the lookup
    /// - `params` - Fields to replace
    ///
    /// # Returns
    /// - `Ok(PetChange::Updated)` - The record before and after the update
    /// - `Err(AppError::NotFound)` - No pet with that key
    /// - `Err(AppError::BadRequest)` - The new value is blank
    /// - `Err(AppError::DbErr)` - Failed to persist the pet
    pub async fn update(&self, key: &str, params: UpdatePetParams) -> Result<PetChange, AppError> {
        if params.value.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::BadRequest("Pet value cannot be empty".to_string()));
        }

        let mut catalog = self.catalog.write().await;
        let Some(before) = catalog.get(key).cloned() else {
            return Err(AppError::NotFound(format!("Pet {} not found", key)));
        };

        let after = params.apply(&before, Utc::now());
        let after = PetRepository::new(&self.db).upsert(&after).await?;
        catalog.insert(after.clone());

        tracing::info!("Updated pet {} ({})", after.name, after.key());

        Ok(PetChange::Updated { before, after })
    }

    /// Removes a pet through the admin API.
    ///
    /// # Returns
    /// - `Ok(PetChange::Deleted)` - The removed record
    /// - `Err(AppError::NotFound)` - No pet with that key
    /// - `Err(AppError::DbErr)` - Failed to delete the row
    pub async fn delete(&self, key: &str) -> Result<PetChange, AppError> {
        let mut catalog = self.catalog.write().await;
        let Some(removed) = catalog.get(key).cloned() else {
            return Err(AppError::NotFound(format!("Pet {} not found", key)));
        };

        PetRepository::new(&self.db).delete_by_key(key).await?;
        catalog.remove(key);

        tracing::info!("Deleted pet {} ({})", removed.name, removed.key());

        Ok(PetChange::Deleted(removed))
    }

    /// Imports a legacy JSON catalog if no pets are stored yet.
    ///
    /// # Arguments
    /// - `path` - Path to the legacy `pet_values.json` file
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of distinct pets imported, 0 when the table already had pets
    /// - `Err(AppError)` - Failed to read or parse the file, or to store a pet
    pub async fn import_seed(&self, path: &Path) -> Result<usize, AppError> {
        let repo = PetRepository::new(&self.db);
        if repo.count().await? > 0 {
            tracing::info!("Catalog already populated, skipping seed {}", path.display());
            return Ok(0);
        }

        let contents = tokio::fs::read_to_string(path).await?;
        let records = seed::parse_seed(&contents)?;

        // Entries whose names normalize to the same key merge into one pet.
        let imported = records
            .iter()
            .map(PetRecord::key)
            .collect::<HashSet<_>>()
            .len();

        let mut catalog = self.catalog.write().await;
        for record in &records {
            let record = repo.upsert(record).await?;
            catalog.insert(record);
        }

        tracing::info!("Imported {} pets from {}", imported, path.display());

        Ok(imported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use test_utils::{builder::TestBuilder, factory};

    fn candidate(name: &str, value: &str, single: bool) -> Candidate {
        Candidate {
            raw_name: name.to_string(),
            value: value.to_string(),
            demand: Some("High".to_string()),
            is_single_pet_message: single,
            image_url: None,
        }
    }

    fn context() -> IngestContext {
        IngestContext {
            message_id: Some("900".to_string()),
            attachment_image: Some("https://cdn.example/only.png".to_string()),
            timestamp: Utc.with_ymd_and_hms(2025, 7, 1, 8, 30, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn loads_stored_pets_in_order() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_pet_named(db, "Zebra", "1").await?;
        factory::create_pet_named(db, "Ant", "2").await?;

        let pets = PetCatalog::load(db.clone()).await?;

        let catalog = pets.read().await;
        assert_eq!(catalog.sample_names(5), vec!["Zebra", "Ant"]);

        Ok(())
    }

    #[tokio::test]
    async fn ingest_persists_before_exposing_records() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_pet_named(db, "Dragon", "100").await?;
        let pets = PetCatalog::load(db.clone()).await?;

        let stored = pets
            .ingest(
                vec![candidate("dragon", "500", true), candidate("Unicorn", "300", true)],
                &context(),
            )
            .await?;

        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].name, "Dragon");
        assert_eq!(
            stored[0].image_url.as_deref(),
            Some("https://cdn.example/only.png")
        );

        let persisted = PetRepository::new(db).get_all().await?;
        let in_memory: Vec<PetRecord> = pets.read().await.records().cloned().collect();
        assert_eq!(persisted, in_memory);
        assert_eq!(in_memory[0].value, "500");
        assert_eq!(in_memory[1].name, "Unicorn");

        Ok(())
    }

    #[tokio::test]
    async fn resolve_offers_examples_when_nothing_matches() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_pet_named(db, "Dragon", "100").await?;
        let pets = PetCatalog::load(db.clone()).await?;

        let (resolution, examples) = pets.resolve("xyzabc123").await?;
        assert_eq!(resolution, Resolution::NotFound);
        assert_eq!(examples, vec!["Dragon"]);

        let (resolution, examples) = pets.resolve("dragon").await?;
        assert!(matches!(resolution, Resolution::Exact(_)));
        assert!(examples.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn seed_import_only_fills_empty_table() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let pets = PetCatalog::load(db.clone()).await?;

        let path = std::env::temp_dir().join(format!(
            "valueboard-seed-{}.json",
            std::process::id()
        ));
        tokio::fs::write(
            &path,
            r#"{"zebra": {"name": "Zebra", "value": 10, "demand": "Low"},
                "ant": {"name": "Ant", "value": "N/A", "demand": "High"}}"#,
        )
        .await?;

        assert_eq!(pets.import_seed(&path).await?, 2);
        assert_eq!(pets.import_seed(&path).await?, 0);
        tokio::fs::remove_file(&path).await?;

        assert_eq!(pets.read().await.sample_names(5), vec!["Zebra", "Ant"]);
        assert_eq!(PetRepository::new(db).count().await?, 2);

        Ok(())
    }

    #[tokio::test]
    async fn seed_import_counts_merged_names_once() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let pets = PetCatalog::load(db.clone()).await?;

        let path = std::env::temp_dir().join(format!(
            "valueboard-seed-dupes-{}.json",
            std::process::id()
        ));
        tokio::fs::write(
            &path,
            r#"{"dragon": {"name": "Dragon", "value": 10},
                "DRAGON": {"name": "DRAGON ", "value": 20},
                "cat": {"name": "Cat", "value": 5}}"#,
        )
        .await?;

        let imported = pets.import_seed(&path).await?;
        tokio::fs::remove_file(&path).await?;

        assert_eq!(imported, 2);
        assert_eq!(PetRepository::new(db).count().await?, 2);

        Ok(())
    }

    fn new_pet(name: &str) -> CreatePetParams {
        CreatePetParams {
            name: name.to_string(),
            value: "700".to_string(),
            demand: Some("Medium".to_string()),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn create_stores_and_rejects_duplicates() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_pet_named(db, "Dragon", "100").await?;
        let pets = PetCatalog::load(db.clone()).await?;

        let change = pets.create(new_pet("Frost Unicorn")).await?;
        assert!(matches!(change, PetChange::Added(ref record) if record.name == "Frost Unicorn"));

        let persisted = PetRepository::new(db).get_all().await?;
        assert_eq!(persisted.len(), 2);
        assert_eq!(pets.read().await.sample_names(5), vec!["Dragon", "Frost Unicorn"]);

        let duplicate = pets.create(new_pet("  DRAGON ")).await;
        assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

        let blank = pets.create(new_pet("  ")).await;
        assert!(matches!(blank, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_fields_in_place() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_pet_named(db, "Dragon", "100").await?;
        factory::create_pet_named(db, "Cat", "5").await?;
        let pets = PetCatalog::load(db.clone()).await?;

        let change = pets
            .update(
                "dragon",
                UpdatePetParams {
                    value: Some("150".to_string()),
                    demand: Some(Some("High".to_string())),
                    image_url: None,
                },
            )
            .await?;

        let PetChange::Updated { before, after } = change else {
            panic!("expected an update");
        };
        assert_eq!(before.value, "100");
        assert_eq!(after.value, "150");
        assert_eq!(after.demand.as_deref(), Some("High"));

        let persisted = PetRepository::new(db).get_all().await?;
        let in_memory: Vec<PetRecord> = pets.read().await.records().cloned().collect();
        assert_eq!(persisted, in_memory);
        assert_eq!(in_memory[0].value, "150");

        let missing = pets.update("unicorn", UpdatePetParams::default()).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_from_database_and_memory() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::create_pet_named(db, "Dragon", "100").await?;
        factory::create_pet_named(db, "Cat", "5").await?;
        let pets = PetCatalog::load(db.clone()).await?;

        let change = pets.delete("DRAGON").await?;
        assert!(matches!(change, PetChange::Deleted(_)));
        assert_eq!(change.record().name, "Dragon");

        assert_eq!(PetRepository::new(db).count().await?, 1);
        assert_eq!(pets.read().await.sample_names(5), vec!["Cat"]);

        let missing = pets.delete("dragon").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        Ok(())
    }
}
