//! Task factory for creating test task entities.

use crate::{factory::helpers::next_id, fixture};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, IntoActiveModel};

/// Factory for creating test tasks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let task = TaskFactory::new(db, appointment.id).status(2).build().await?;
/// ```
pub struct TaskFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    model: entity::task::Model,
}

impl<'a, C: ConnectionTrait> TaskFactory<'a, C> {
    /// Creates a new factory from the fixture defaults with a unique name.
    pub fn new(db: &'a C, appointment_id: i32) -> Self {
        let mut model = fixture::task::entity(appointment_id);
        model.name = format!("Task {}", next_id());
        Self { db, model }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn status(mut self, code: i32) -> Self {
        self.model.status = code;
        self
    }

    pub fn when_to_complete(mut self, code: i32) -> Self {
        self.model.when_to_complete = code;
        self
    }

    pub fn deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.model.deadline = deadline;
        self
    }

    /// Builds and inserts the task entity into the database.
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        let mut active = self.model.into_active_model().reset_all();
        active.id = ActiveValue::NotSet;
        active.insert(self.db).await
    }
}

/// Creates a task with default values on the given appointment.
pub async fn create_task<C: ConnectionTrait>(
    db: &C,
    appointment_id: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, appointment_id).build().await
}

/// Creates a task with a specific status code on the given appointment.
pub async fn create_task_with_status<C: ConnectionTrait>(
    db: &C,
    appointment_id: i32,
    status: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, appointment_id)
        .status(status)
        .build()
        .await
}
