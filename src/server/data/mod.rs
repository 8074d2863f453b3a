//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. All queries, inserts and updates on
//! the catalog table go through [`pet::PetRepository`].

pub mod pet;

#[cfg(test)]
mod test;
