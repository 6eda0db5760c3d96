//! Business logic between the controllers and the data layer.
//!
//! Services build specifications from request parameters, run them through the
//! repositories and convert the rows into domain models. Every write happens inside a
//! [`UnitOfWork`], so a failed request leaves nothing half-written.

pub mod appointment;
pub mod auth;
pub mod task;
pub mod user;
pub mod vessel;

use crate::server::{data::unit_of_work::UnitOfWork, error::AppError};

#[cfg(test)]
mod test;

/// Commits `uow`, treating a commit that touched no rows as a failed save.
async fn complete(uow: UnitOfWork) -> Result<(), AppError> {
    match uow.complete().await? {
        0 => Err(AppError::PersistenceFailed),
        _ => Ok(()),
    }
}
