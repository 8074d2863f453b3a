//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let pet = factory::pet::create_pet(&db).await?;
//!
//!     // Customize through the builder
//!     let dragon = factory::pet::PetFactory::new(&db)
//!         .name("Dragon")
//!         .value("5000")
//!         .demand(Some("High"))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `pet` - Create pet catalog entities
//! - `helpers` - Shared id generation

pub mod helpers;
pub mod pet;

pub use pet::{create_pet, create_pet_named};
