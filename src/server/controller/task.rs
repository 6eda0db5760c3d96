use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiErrorDto, ResponseDto},
        task::{CreateOrUpdateTaskDto, PaginatedTasksDto, TaskToReturnDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{ApiJson, ApiPath, ApiQuery},
        },
        model::{params::TasksSpecificationParams, task::TaskParams},
        service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// Get one page of tasks, optionally restricted to an appointment.
///
/// Page indexes start at 1. Page sizes are clamped to `2..=50` and default to 30.
///
/// # Returns
/// - `200 OK` - The page plus the total number of matching tasks
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - The page is empty
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    params(
        ("appointmentId" = Option<i32>, Query, description = "Only tasks of this appointment"),
        ("pageIndex" = Option<u64>, Query, description = "Page number starting at 1 (default: 1)"),
        ("pageSize" = Option<i64>, Query, description = "Items per page (default: 30, clamped to 2..=50)")
    ),
    responses(
        (status = 200, description = "One page of tasks", body = PaginatedTasksDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Page is empty", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(params): ApiQuery<TasksSpecificationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let page = TaskService::new(&state.db).get_paginated(&params).await?;

    Ok(Json(ResponseDto::ok(page.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "The task", body = TaskToReturnDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Task not found", body = ApiErrorDto)
    ),
)]
pub async fn get_task(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Some(task) = TaskService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound(None));
    };

    Ok(Json(ResponseDto::ok(TaskToReturnDto {
        task: task.into_dto(),
    })))
}

/// Create a task on an existing appointment.
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateOrUpdateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskToReturnDto),
        (status = 400, description = "Invalid task data", body = ApiErrorDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Appointment not found", body = ApiErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<CreateOrUpdateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = TaskParams::from_dto(payload)?;
    let task = TaskService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::ok(TaskToReturnDto {
            task: task.into_dto(),
        })),
    ))
}

#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    request_body = CreateOrUpdateTaskDto,
    responses(
        (status = 200, description = "Task updated", body = TaskToReturnDto),
        (status = 400, description = "Invalid task data", body = ApiErrorDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Task or appointment not found", body = ApiErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<CreateOrUpdateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = TaskParams::from_dto(payload)?;
    let Some(task) = TaskService::new(&state.db).update(id, params).await? else {
        return Err(AppError::NotFound(None));
    };

    Ok(Json(ResponseDto::ok(TaskToReturnDto {
        task: task.into_dto(),
    })))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Task not found", body = ApiErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if !TaskService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(None));
    }

    Ok(StatusCode::NO_CONTENT)
}
