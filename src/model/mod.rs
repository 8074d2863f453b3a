//! Data transfer objects exchanged over the public JSON API.

pub mod api;
pub mod calculator;
pub mod pet;
