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
        vessel::{RegisterOrUpdateVesselDto, VesselToReturnDto, VesselsDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{ApiJson, ApiPath, ApiQuery},
        },
        model::{params::VesselsSpecificationParams, vessel::VesselParams},
        service::vessel::VesselService,
        state::AppState,
    },
};

/// Tag for grouping vessel endpoints in OpenAPI documentation
pub static VESSEL_TAG: &str = "vessel";

/// List vessels, optionally filtered by a case-insensitive name search.
///
/// # Returns
/// - `200 OK` - Matching vessels ordered by name
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No vessel matched
#[utoipa::path(
    get,
    path = "/api/vessels",
    tag = VESSEL_TAG,
    params(
        ("nameSearch" = Option<String>, Query, description = "Substring of the vessel name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Matching vessels", body = VesselsDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "No vessel matched", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn get_vessels(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(params): ApiQuery<VesselsSpecificationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let vessels = VesselService::new(&state.db).list(&params).await?;

    Ok(Json(ResponseDto::ok(VesselsDto {
        vessels: vessels.into_iter().map(|v| v.into_dto()).collect(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/vessels/{id}",
    tag = VESSEL_TAG,
    params(("id" = i32, Path, description = "Vessel ID")),
    responses(
        (status = 200, description = "The vessel", body = VesselToReturnDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Vessel not found", body = ApiErrorDto)
    ),
)]
pub async fn get_vessel(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Some(vessel) = VesselService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound(None));
    };

    Ok(Json(ResponseDto::ok(VesselToReturnDto {
        vessel: vessel.into_dto(),
    })))
}

/// Register a vessel.
///
/// # Returns
/// - `201 Created` - The stored vessel
/// - `400 Bad Request` - Empty name
#[utoipa::path(
    post,
    path = "/api/vessels",
    tag = VESSEL_TAG,
    request_body = RegisterOrUpdateVesselDto,
    responses(
        (status = 201, description = "Vessel registered", body = VesselToReturnDto),
        (status = 400, description = "Invalid vessel data", body = ApiErrorDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto)
    ),
)]
pub async fn create_vessel(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<RegisterOrUpdateVesselDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = VesselParams::from_dto(payload)?;
    let vessel = VesselService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::ok(VesselToReturnDto {
            vessel: vessel.into_dto(),
        })),
    ))
}

#[utoipa::path(
    put,
    path = "/api/vessels/{id}",
    tag = VESSEL_TAG,
    params(("id" = i32, Path, description = "Vessel ID")),
    request_body = RegisterOrUpdateVesselDto,
    responses(
        (status = 200, description = "Vessel updated", body = VesselToReturnDto),
        (status = 400, description = "Invalid vessel data", body = ApiErrorDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Vessel not found", body = ApiErrorDto)
    ),
)]
pub async fn update_vessel(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<RegisterOrUpdateVesselDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = VesselParams::from_dto(payload)?;
    let Some(vessel) = VesselService::new(&state.db).update(id, params).await? else {
        return Err(AppError::NotFound(None));
    };

    Ok(Json(ResponseDto::ok(VesselToReturnDto {
        vessel: vessel.into_dto(),
    })))
}

/// Delete a vessel together with its appointments and their tasks.
#[utoipa::path(
    delete,
    path = "/api/vessels/{id}",
    tag = VESSEL_TAG,
    params(("id" = i32, Path, description = "Vessel ID")),
    responses(
        (status = 204, description = "Vessel deleted"),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Vessel not found", body = ApiErrorDto)
    ),
)]
pub async fn delete_vessel(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if !VesselService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(None));
    }

    Ok(StatusCode::NO_CONTENT)
}
