use sea_orm::{DatabaseConnection, IntoActiveModel};

use crate::server::{
    data::{appointment::AppointmentRepository, unit_of_work::UnitOfWork},
    error::AppError,
    model::{
        appointment::{Appointment, AppointmentParams},
        params::AppointmentsSpecificationParams,
    },
    service::complete,
    specification::appointment::{
        appointment_with_vessel_specification, appointments_specification,
    },
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Filtered appointments with their vessel and tasks.
    ///
    /// Returns `NotFound` when nothing matches, including for filter codes that
    /// don't exist.
    pub async fn list(
        &self,
        params: &AppointmentsSpecificationParams,
    ) -> Result<Vec<Appointment>, AppError> {
        let repo = AppointmentRepository::new(self.db);

        let rows = repo.list_with_spec(&appointments_specification(params)).await?;

        if rows.is_empty() {
            return Err(AppError::NotFound(None));
        }

        rows.into_iter()
            .map(Appointment::from_relations)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    /// Gets an appointment by ID with its vessel and tasks
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Appointment>, AppError> {
        let repo = AppointmentRepository::new(self.db);

        repo.get_with_spec(&appointment_with_vessel_specification(id))
            .await?
            .map(Appointment::from_relations)
            .transpose()
            .map_err(Into::into)
    }

    /// Creates an appointment for an existing vessel.
    pub async fn create(&self, params: AppointmentParams) -> Result<Appointment, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;

        if uow
            .repository::<entity::vessel::Entity>()
            .get_by_id(params.vessel_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(format!(
                "Vessel {} not found",
                params.vessel_id
            )));
        }

        let mut model = entity::appointment::ActiveModel::default();
        params.apply(&mut model);
        let appointment = uow
            .repository::<entity::appointment::Entity>()
            .add(model)
            .await?;

        complete(uow).await?;

        // Fetch with vessel for the response
        self.get_by_id(appointment.id)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment not found after creation"))
    }

    /// Replaces every field of an appointment and returns it reloaded with its relations.
    /// Returns None if the appointment doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: AppointmentParams,
    ) -> Result<Option<Appointment>, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;

        let Some(existing) = uow
            .repository::<entity::appointment::Entity>()
            .get_by_id(id)
            .await?
        else {
            return Ok(None);
        };

        if existing.vessel_id != params.vessel_id
            && uow
                .repository::<entity::vessel::Entity>()
                .get_by_id(params.vessel_id)
                .await?
                .is_none()
        {
            return Err(AppError::not_found(format!(
                "Vessel {} not found",
                params.vessel_id
            )));
        }

        let mut model = existing.into_active_model();
        params.apply(&mut model);
        uow.repository::<entity::appointment::Entity>()
            .update(model)
            .await?;

        complete(uow).await?;

        self.get_by_id(id).await
    }

    /// Deletes an appointment and, through the foreign key, all of its tasks.
    /// Returns false if the appointment doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let repo = uow.repository::<entity::appointment::Entity>();

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        repo.delete(existing).await?;

        complete(uow).await?;

        Ok(true)
    }
}
