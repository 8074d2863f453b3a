use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(pk_auto(Pet::Id))
                    .col(string(Pet::PetKey))
                    .col(string(Pet::Name))
                    .col(string(Pet::Value))
                    .col(string_null(Pet::Demand))
                    .col(string_null(Pet::ImageUrl))
                    .col(string_null(Pet::MessageId))
                    .col(timestamp(Pet::LastUpdated))
                    .to_owned(),
            )
            .await?;

        // Normalized names are the catalog key
        manager
            .create_index(
                Index::create()
                    .name("idx_pet_pet_key")
                    .table(Pet::Table)
                    .col(Pet::PetKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_pet_pet_key")
                    .table(Pet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Pet {
    Table,
    Id,
    PetKey,
    Name,
    Value,
    Demand,
    ImageUrl,
    MessageId,
    LastUpdated,
}
