use sea_orm::entity::prelude::*;

/// A pet value record. `id` order is the catalog's insertion order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub pet_key: String,
    pub name: String,
    pub value: String,
    pub demand: Option<String>,
    pub image_url: Option<String>,
    pub message_id: Option<String>,
    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
