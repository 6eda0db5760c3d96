use sea_orm::{DatabaseConnection, IntoActiveModel};

use crate::server::{
    data::{repository::Repository, unit_of_work::UnitOfWork},
    error::AppError,
    model::{
        params::VesselsSpecificationParams,
        vessel::{Vessel, VesselParams},
    },
    service::complete,
    specification::vessel::vessels_specification,
};

pub struct VesselService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VesselService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Vessels matching the name search, ordered by name.
    ///
    /// An empty result is reported as `NotFound`.
    pub async fn list(&self, params: &VesselsSpecificationParams) -> Result<Vec<Vessel>, AppError> {
        let repo = Repository::<_, entity::vessel::Entity>::new(self.db);

        let vessels = repo.list_with_spec(&vessels_specification(params)).await?;

        if vessels.is_empty() {
            return Err(AppError::NotFound(None));
        }

        Ok(vessels.into_iter().map(Vessel::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Vessel>, AppError> {
        let repo = Repository::<_, entity::vessel::Entity>::new(self.db);

        Ok(repo.get_by_id(id).await?.map(Vessel::from_entity))
    }

    pub async fn create(&self, params: VesselParams) -> Result<Vessel, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;

        let mut model = entity::vessel::ActiveModel::default();
        params.apply(&mut model);
        let vessel = uow.repository::<entity::vessel::Entity>().add(model).await?;

        complete(uow).await?;

        Ok(Vessel::from_entity(vessel))
    }

    /// Replaces every field of a vessel. Returns `None` if it doesn't exist.
    pub async fn update(&self, id: i32, params: VesselParams) -> Result<Option<Vessel>, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let repo = uow.repository::<entity::vessel::Entity>();

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        params.apply(&mut model);
        let vessel = repo.update(model).await?;

        complete(uow).await?;

        Ok(Some(Vessel::from_entity(vessel)))
    }

    /// Deletes a vessel together with its appointments and their tasks.
    /// Returns false if the vessel doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let repo = uow.repository::<entity::vessel::Entity>();

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        repo.delete(existing).await?;

        complete(uow).await?;

        Ok(true)
    }
}
