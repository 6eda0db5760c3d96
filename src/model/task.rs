use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Task as returned to clients. Enum fields carry their integer codes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: i32,
    pub when_to_complete: i32,
    pub appointment_id: i32,
}

/// Request body for creating or updating a task.
///
/// `status` and `when_to_complete` are validated against their enums before
/// anything is written.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrUpdateTaskDto {
    pub name: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: i32,
    pub when_to_complete: i32,
    pub appointment_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TaskToReturnDto {
    pub task: TaskDto,
}

/// One page of tasks.
///
/// `total_items` counts every task matching the filter, not just this page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedTasksDto {
    pub page_index: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub data: Vec<TaskDto>,
}
