//! Wire-level DTOs shared by every endpoint.
//!
//! Everything here serializes as camelCase JSON and derives `ToSchema` so the
//! OpenAPI document stays in sync with the handlers.

pub mod api;
pub mod appointment;
pub mod task;
pub mod user;
pub mod vessel;
