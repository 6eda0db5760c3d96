//! Task domain model and write parameters.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue;

use crate::{
    model::task::{CreateOrUpdateTaskDto, PaginatedTasksDto, TaskDto},
    server::{
        error::{internal::InternalError, validation::ValidationError},
        model::enums::{EnumCode, TaskStatus, WhenToComplete},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: TaskStatus,
    pub when_to_complete: WhenToComplete,
    pub appointment_id: i32,
}

impl Task {
    /// Converts a stored row, failing if an enum column holds an unknown code.
    pub fn from_entity(entity: entity::task::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            deadline: entity.deadline,
            status: TaskStatus::from_stored(entity.status)?,
            when_to_complete: WhenToComplete::from_stored(entity.when_to_complete)?,
            appointment_id: entity.appointment_id,
        })
    }

    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            name: self.name,
            description: self.description,
            deadline: self.deadline,
            status: self.status.code(),
            when_to_complete: self.when_to_complete.code(),
            appointment_id: self.appointment_id,
        }
    }
}

/// One page of tasks with the number of tasks matching the same filter.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedTasks {
    pub page_index: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub tasks: Vec<Task>,
}

impl PaginatedTasks {
    pub fn into_dto(self) -> PaginatedTasksDto {
        PaginatedTasksDto {
            page_index: self.page_index,
            page_size: self.page_size,
            total_items: self.total_items,
            data: self.tasks.into_iter().map(Task::into_dto).collect(),
        }
    }
}

/// Validated fields written when creating or updating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskParams {
    pub name: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: TaskStatus,
    pub when_to_complete: WhenToComplete,
    pub appointment_id: i32,
}

impl TaskParams {
    /// Validates the request body, rejecting unknown enum codes.
    pub fn from_dto(dto: CreateOrUpdateTaskDto) -> Result<Self, ValidationError> {
        if dto.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }

        Ok(Self {
            status: TaskStatus::parse(dto.status)?,
            when_to_complete: WhenToComplete::parse(dto.when_to_complete)?,
            name: dto.name,
            description: dto.description,
            deadline: dto.deadline,
            appointment_id: dto.appointment_id,
        })
    }

    /// Overwrites every mapped column of `model`.
    pub fn apply(self, model: &mut entity::task::ActiveModel) {
        model.name = ActiveValue::Set(self.name);
        model.description = ActiveValue::Set(self.description);
        model.deadline = ActiveValue::Set(self.deadline);
        model.status = ActiveValue::Set(self.status.code());
        model.when_to_complete = ActiveValue::Set(self.when_to_complete.code());
        model.appointment_id = ActiveValue::Set(self.appointment_id);
    }
}
