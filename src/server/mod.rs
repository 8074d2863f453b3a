//! Server-side backend: Discord bot, HTTP API and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Extraction, resolution, calculators and the shared catalog
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the pet catalog)
//! - **Startup** (`startup`) - Logging, database and catalog initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Bot** (`bot/`) - Discord event handlers, commands and the reaction trigger
//!
//! # Message Flow
//!
//! 1. **Bot** receives a message from a monitored channel
//! 2. **Extractor** parses pet value candidates from the text
//! 3. **PetCatalog** merges each candidate, persists it, then updates memory
//! 4. Commands and the HTTP API read catalog snapshots through the **Resolver**

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
