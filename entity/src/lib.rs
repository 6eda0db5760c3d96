//! SeaORM entities for the port-call schema.

pub mod prelude;

pub mod app_user;
pub mod appointment;
pub mod task;
pub mod vessel;
