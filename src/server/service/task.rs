use sea_orm::{DatabaseConnection, IntoActiveModel};

use crate::server::{
    data::{repository::Repository, unit_of_work::UnitOfWork},
    error::AppError,
    model::{
        params::TasksSpecificationParams,
        task::{PaginatedTasks, Task, TaskParams},
    },
    service::complete,
    specification::task::tasks_with_pagination_specification,
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One page of tasks plus the total matching the same filter.
    ///
    /// Returns `NotFound` when the page is empty.
    pub async fn get_paginated(
        &self,
        params: &TasksSpecificationParams,
    ) -> Result<PaginatedTasks, AppError> {
        let repo = Repository::<_, entity::task::Entity>::new(self.db);
        let spec = tasks_with_pagination_specification(params);

        let rows = repo.list_with_spec(&spec).await?;

        if rows.is_empty() {
            return Err(AppError::NotFound(None));
        }

        let total_items = repo.count(&spec.for_count()).await?;
        let pagination = params.pagination();

        Ok(PaginatedTasks {
            page_index: pagination.page_index,
            page_size: pagination.take(),
            total_items,
            tasks: rows
                .into_iter()
                .map(Task::from_entity)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Task>, AppError> {
        let repo = Repository::<_, entity::task::Entity>::new(self.db);

        repo.get_by_id(id)
            .await?
            .map(Task::from_entity)
            .transpose()
            .map_err(Into::into)
    }

    /// Creates a task on an existing appointment.
    pub async fn create(&self, params: TaskParams) -> Result<Task, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;

        if uow
            .repository::<entity::appointment::Entity>()
            .get_by_id(params.appointment_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(format!(
                "Appointment {} not found",
                params.appointment_id
            )));
        }

        let mut model = entity::task::ActiveModel::default();
        params.apply(&mut model);
        let task = uow.repository::<entity::task::Entity>().add(model).await?;

        complete(uow).await?;

        Ok(Task::from_entity(task)?)
    }

    /// Replaces every field of a task. Returns None if the task doesn't exist.
    pub async fn update(&self, id: i32, params: TaskParams) -> Result<Option<Task>, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;

        let Some(existing) = uow.repository::<entity::task::Entity>().get_by_id(id).await? else {
            return Ok(None);
        };

        if existing.appointment_id != params.appointment_id
            && uow
                .repository::<entity::appointment::Entity>()
                .get_by_id(params.appointment_id)
                .await?
                .is_none()
        {
            return Err(AppError::not_found(format!(
                "Appointment {} not found",
                params.appointment_id
            )));
        }

        let mut model = existing.into_active_model();
        params.apply(&mut model);
        let task = uow.repository::<entity::task::Entity>().update(model).await?;

        complete(uow).await?;

        Ok(Some(Task::from_entity(task)?))
    }

    /// Returns false if the task doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let repo = uow.repository::<entity::task::Entity>();

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        repo.delete(existing).await?;

        complete(uow).await?;

        Ok(true)
    }
}
