//! Valueboard Test Utils
//!
//! Shared testing utilities for the valueboard application. Provides a builder for
//! test contexts backed by in-memory SQLite databases and factories for inserting
//! entities with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Pet;
//!
//! #[tokio::test]
//! async fn test_pet_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Pet)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
