//! HTTP request handlers.
//!
//! Controllers convert DTOs to domain parameters, call into the service layer and
//! convert the results back to DTOs. Every handler is documented for OpenAPI with
//! `#[utoipa::path]` and registered in [`router`](crate::server::router).

pub mod calculator;
pub mod pet;
