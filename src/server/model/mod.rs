//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the service boundary and
//! transformed to DTOs at the controller boundary. Enum-backed columns are typed
//! here, so a model that exists has already passed validation.

pub mod appointment;
pub mod enums;
pub mod params;
pub mod task;
pub mod user;
pub mod vessel;
