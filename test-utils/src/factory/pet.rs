//! Pet factory for creating test catalog entities.
//!
//! This module provides factory methods for creating pet rows with sensible
//! defaults. The factory derives `pet_key` from the name unless one is set
//! explicitly.

use crate::factory::helpers::{next_id, pet_key};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pet::PetFactory;
///
/// let pet = PetFactory::new(&db)
///     .name("Dragon")
///     .value("5000")
///     .demand(Some("High"))
///     .build()
///     .await?;
/// ```
pub struct PetFactory<'a> {
    db: &'a DatabaseConnection,
    pet_key: Option<String>,
    name: String,
    value: String,
    demand: Option<String>,
    image_url: Option<String>,
    message_id: Option<String>,
    last_updated: DateTime<Utc>,
}

impl<'a> PetFactory<'a> {
    /// Creates a new PetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pet {id}"` where id is auto-incremented
    /// - value: `"{id}00"`
    /// - demand: `Some("Medium")`
    /// - image_url, message_id: `None`
    /// - last_updated: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PetFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            pet_key: None,
            name: format!("Pet {}", id),
            value: format!("{}00", id),
            demand: Some("Medium".to_string()),
            image_url: None,
            message_id: None,
            last_updated: Utc::now(),
        }
    }

    /// Sets the display name. The key follows unless overridden with `key`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Overrides the normalized catalog key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.pet_key = Some(key.into());
        self
    }

    /// Sets the stored value string.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the demand label.
    pub fn demand(mut self, demand: Option<&str>) -> Self {
        self.demand = demand.map(str::to_string);
        self
    }

    /// Sets the image URL.
    pub fn image_url(mut self, image_url: Option<&str>) -> Self {
        self.image_url = image_url.map(str::to_string);
        self
    }

    /// Sets the id of the message that produced the row.
    pub fn message_id(mut self, message_id: Option<&str>) -> Self {
        self.message_id = message_id.map(str::to_string);
        self
    }

    /// Sets the last update timestamp.
    pub fn last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = last_updated;
        self
    }

    /// Builds and inserts the pet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pet::Model)` - Created pet entity
    /// - `Err(DbErr)` - Database error during insert, including a duplicate key
    pub async fn build(self) -> Result<entity::pet::Model, DbErr> {
        let key = self.pet_key.unwrap_or_else(|| pet_key(&self.name));

        entity::pet::ActiveModel {
            pet_key: ActiveValue::Set(key),
            name: ActiveValue::Set(self.name),
            value: ActiveValue::Set(self.value),
            demand: ActiveValue::Set(self.demand),
            image_url: ActiveValue::Set(self.image_url),
            message_id: ActiveValue::Set(self.message_id),
            last_updated: ActiveValue::Set(self.last_updated),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pet with default values.
///
/// Shorthand for `PetFactory::new(db).build().await`.
pub async fn create_pet(db: &DatabaseConnection) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db).build().await
}

/// Creates a pet with the given name and value.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Display name
/// - `value` - Stored value string
///
/// # Returns
/// - `Ok(entity::pet::Model)` - Created pet entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_pet_named(
    db: &DatabaseConnection,
    name: &str,
    value: &str,
) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db).name(name).value(value).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_pet_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Pet).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let pet = create_pet(db).await?;

        assert!(pet.name.starts_with("Pet "));
        assert_eq!(pet.pet_key, pet.name.to_lowercase());
        assert_eq!(pet.demand.as_deref(), Some("Medium"));
        assert!(pet.image_url.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn derives_key_from_name() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Pet).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let pet = PetFactory::new(db)
            .name("  Golden   Dragon ")
            .value("N/A")
            .demand(None)
            .build()
            .await?;

        assert_eq!(pet.pet_key, "golden dragon");
        assert_eq!(pet.value, "N/A");
        assert!(pet.demand.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_key() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Pet).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        create_pet_named(db, "Dragon", "100").await?;
        let duplicate = create_pet_named(db, "dragon", "200").await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
