//! Pet data repository for database operations.
//!
//! This module provides the `PetRepository` for reading, upserting and deleting pet
//! catalog rows, with conversion between entity models and domain models at the
//! infrastructure boundary.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{model::pet::PetRecord, util::text::normalize};

/// Repository providing database operations for the pet catalog.
pub struct PetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetRepository<'a> {
    /// Creates a new PetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PetRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every pet in insertion order.
    ///
    /// Rows are ordered by their autoincrement id, which is assigned on first insert
    /// and kept by upserts, so the order matches the catalog's insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<PetRecord>)` - All pets, oldest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<PetRecord>, DbErr> {
        let entities = entity::prelude::Pet::find()
            .order_by_asc(entity::pet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PetRecord::from_entity).collect())
    }

    /// Inserts a pet or updates the row with the same normalized key.
    ///
    /// On conflict every column except `id` and `pet_key` is overwritten, so an
    /// update keeps the row's original position.
    ///
    /// # Arguments
    /// - `record` - The merged record to store
    ///
    /// # Returns
    /// - `Ok(PetRecord)` - The stored record
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, record: &PetRecord) -> Result<PetRecord, DbErr> {
        let entity = entity::prelude::Pet::insert(entity::pet::ActiveModel {
            pet_key: ActiveValue::Set(record.key()),
            name: ActiveValue::Set(record.name.clone()),
            value: ActiveValue::Set(record.value.clone()),
            demand: ActiveValue::Set(record.demand.clone()),
            image_url: ActiveValue::Set(record.image_url.clone()),
            message_id: ActiveValue::Set(record.message_id.clone()),
            last_updated: ActiveValue::Set(record.last_updated),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::pet::Column::PetKey)
                .update_columns([
                    entity::pet::Column::Name,
                    entity::pet::Column::Value,
                    entity::pet::Column::Demand,
                    entity::pet::Column::ImageUrl,
                    entity::pet::Column::MessageId,
                    entity::pet::Column::LastUpdated,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(PetRecord::from_entity(entity))
    }

    /// Deletes a pet by its normalized key.
    ///
    /// # Arguments
    /// - `name` - Pet name or key, normalized before the delete
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No pet with that key
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_key(&self, name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Pet::delete_many()
            .filter(entity::pet::Column::PetKey.eq(normalize(name)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts stored pets.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows in the pet table
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Pet::find().count(self.db).await
    }
}
