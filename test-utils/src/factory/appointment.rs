//! Appointment factory for creating test appointment entities.
//!
//! Enum-backed fields take raw integer codes so tests can also seed rows that
//! bypass write-time validation.

use crate::{factory::helpers::next_id, fixture};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, IntoActiveModel};

/// Factory for creating test appointments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let appointment = AppointmentFactory::new(db, vessel.id)
///     .port(2)
///     .status(3)
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    model: entity::appointment::Model,
}

impl<'a, C: ConnectionTrait> AppointmentFactory<'a, C> {
    /// Creates a new factory from the fixture defaults with a unique DUV number.
    pub fn new(db: &'a C, vessel_id: i32) -> Self {
        let mut model = fixture::appointment::entity(vessel_id);
        model.duv_number = format!("DUV-{:04}", next_id());
        Self { db, model }
    }

    pub fn appointment_type(mut self, code: i32) -> Self {
        self.model.appointment_type = code;
        self
    }

    pub fn operation_type(mut self, code: i32) -> Self {
        self.model.operation_type = code;
        self
    }

    pub fn port(mut self, code: i32) -> Self {
        self.model.port = code;
        self
    }

    pub fn status(mut self, code: i32) -> Self {
        self.model.status = code;
        self
    }

    /// Sets the estimated time of arrival and shifts berthing and sailing
    /// estimates to one and two days after it.
    pub fn estimated_time_of_arrival(mut self, eta: DateTime<Utc>) -> Self {
        self.model.estimated_time_of_arrival = eta;
        self.model.estimated_time_of_berthing = eta + Duration::days(1);
        self.model.estimated_time_of_sailing = eta + Duration::days(2);
        self
    }

    pub fn estimated_time_of_berthing(mut self, etb: DateTime<Utc>) -> Self {
        self.model.estimated_time_of_berthing = etb;
        self
    }

    /// Builds and inserts the appointment entity into the database.
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        let mut active = self.model.into_active_model().reset_all();
        active.id = ActiveValue::NotSet;
        active.insert(self.db).await
    }
}

/// Creates an appointment with default values for the given vessel.
pub async fn create_appointment<C: ConnectionTrait>(
    db: &C,
    vessel_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, vessel_id).build().await
}
