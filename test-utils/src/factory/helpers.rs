//! Shared helper utilities for factory methods.

use sea_orm::{ConnectionTrait, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a vessel and one appointment for it.
///
/// # Returns
/// - `Ok((vessel, appointment))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies<C: ConnectionTrait>(
    db: &C,
) -> Result<(entity::vessel::Model, entity::appointment::Model), DbErr> {
    let vessel = crate::factory::vessel::create_vessel(db).await?;
    let appointment = crate::factory::appointment::create_appointment(db, vessel.id).await?;

    Ok((vessel, appointment))
}

/// Creates a vessel, an appointment for it and one task on that appointment.
///
/// # Returns
/// - `Ok((vessel, appointment, task))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_task_with_dependencies<C: ConnectionTrait>(
    db: &C,
) -> Result<
    (
        entity::vessel::Model,
        entity::appointment::Model,
        entity::task::Model,
    ),
    DbErr,
> {
    let (vessel, appointment) = create_appointment_with_dependencies(db).await?;
    let task = crate::factory::task::create_task(db, appointment.id).await?;

    Ok((vessel, appointment, task))
}
