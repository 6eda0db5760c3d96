//! Database access layer.
//!
//! [`repository::Repository`] executes specifications for any entity and
//! [`unit_of_work::UnitOfWork`] groups writes across repositories into one transaction.
//! Entity-specific repositories cover what the generic one cannot express: eager loading
//! of appointment relations and account lookups. Repositories hand back SeaORM models;
//! conversion into domain models happens in the service layer.

pub mod appointment;
pub mod repository;
pub mod unit_of_work;
pub mod user;

#[cfg(test)]
mod test;
