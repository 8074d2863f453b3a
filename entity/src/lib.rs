//! SeaORM entity definitions for the valueboard database.

pub mod pet;
pub mod prelude;
