//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. The catalog and resolution types
//! here are plain values with no I/O, so the extractor and resolver can work on them
//! synchronously.

pub mod catalog;
pub mod pet;
pub mod resolution;
pub mod valuation;
pub mod weight;
