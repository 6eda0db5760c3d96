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
        appointment::{AppointmentToReturnDto, AppointmentsDto, CreateOrUpdateAppointmentDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{ApiJson, ApiPath, ApiQuery},
        },
        model::{appointment::AppointmentParams, params::AppointmentsSpecificationParams},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

/// List appointments with their vessel and tasks.
///
/// Without filters every appointment is returned. Results are ordered by estimated
/// time of arrival, then berthing, then status.
///
/// # Returns
/// - `200 OK` - Matching appointments
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Nothing matched the filters
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    params(
        ("vesselId" = Option<i32>, Query, description = "Only appointments of this vessel"),
        ("type" = Option<i32>, Query, description = "Appointment type code"),
        ("port" = Option<i32>, Query, description = "Port code"),
        ("done" = Option<bool>, Query, description = "Only finished appointments"),
        ("cancelled" = Option<bool>, Query, description = "Only cancelled appointments")
    ),
    responses(
        (status = 200, description = "Matching appointments", body = AppointmentsDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "No appointment matched", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(params): ApiQuery<AppointmentsSpecificationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let appointments = AppointmentService::new(&state.db).list(&params).await?;

    Ok(Json(ResponseDto::ok(AppointmentsDto {
        appointments: appointments.into_iter().map(|a| a.into_dto()).collect(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "The appointment with its vessel and tasks", body = AppointmentToReturnDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Appointment not found", body = ApiErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Some(appointment) = AppointmentService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound(None));
    };

    Ok(Json(ResponseDto::ok(AppointmentToReturnDto {
        appointment: appointment.into_dto(),
    })))
}

/// Create an appointment for an existing vessel.
///
/// # Returns
/// - `201 Created` - The appointment reloaded with its vessel
/// - `400 Bad Request` - Unknown type, operation, port or status code
/// - `404 Not Found` - The vessel doesn't exist
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    request_body = CreateOrUpdateAppointmentDto,
    responses(
        (status = 201, description = "Appointment created", body = AppointmentToReturnDto),
        (status = 400, description = "Invalid appointment data", body = ApiErrorDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Vessel not found", body = ApiErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<CreateOrUpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = AppointmentParams::from_dto(payload)?;
    let appointment = AppointmentService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::ok(AppointmentToReturnDto {
            appointment: appointment.into_dto(),
        })),
    ))
}

#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = CreateOrUpdateAppointmentDto,
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentToReturnDto),
        (status = 400, description = "Invalid appointment data", body = ApiErrorDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Appointment or vessel not found", body = ApiErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<CreateOrUpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = AppointmentParams::from_dto(payload)?;
    let Some(appointment) = AppointmentService::new(&state.db)
        .update(id, params)
        .await?
    else {
        return Err(AppError::NotFound(None));
    };

    Ok(Json(ResponseDto::ok(AppointmentToReturnDto {
        appointment: appointment.into_dto(),
    })))
}

/// Delete an appointment and its tasks.
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Appointment not found", body = ApiErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if !AppointmentService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(None));
    }

    Ok(StatusCode::NO_CONTENT)
}
