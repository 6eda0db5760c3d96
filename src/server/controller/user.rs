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
        user::{
            CreateOrUpdateUserDto, PasswordDto, UpdatePasswordDto, UserToReturnDto, UsersDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            extract::{ApiJson, ApiPath},
        },
        model::user::{RegisterUserParams, UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every account ordered by name.
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All accounts", body = UsersDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 403, description = "User is not an admin", body = ApiErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok(Json(ResponseDto::ok(UsersDto {
        users: users.into_iter().map(|u| u.into_dto()).collect(),
    })))
}

/// Get the logged-in account.
#[utoipa::path(
    get,
    path = "/api/users/current",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The caller's account", body = UserToReturnDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 404, description = "Account no longer exists", body = ApiErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(Json(ResponseDto::ok(UserToReturnDto {
        user: User::from_entity(user).into_dto(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "The account", body = UserToReturnDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 403, description = "User is not an admin", body = ApiErrorDto),
        (status = 404, description = "Account not found", body = ApiErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Some(user) = UserService::new(&state.db).get_by_id(&id).await? else {
        return Err(AppError::NotFound(None));
    };

    Ok(Json(ResponseDto::ok(UserToReturnDto {
        user: user.into_dto(),
    })))
}

/// Register a new account.
///
/// # Access Control
/// - `Admin` - Only admins can register accounts
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Missing field or email already registered
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateOrUpdateUserDto,
    responses(
        (status = 201, description = "Account registered", body = UserToReturnDto),
        (status = 400, description = "Invalid data or duplicate email", body = ApiErrorDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 403, description = "User is not an admin", body = ApiErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<CreateOrUpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = RegisterUserParams::from_dto(payload)?;
    let user = UserService::new(&state.db).register(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseDto::ok(UserToReturnDto {
            user: user.into_dto(),
        })),
    ))
}

/// Change an account's name and email.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    request_body = CreateOrUpdateUserDto,
    responses(
        (status = 200, description = "Account updated", body = UserToReturnDto),
        (status = 400, description = "Invalid data or duplicate email", body = ApiErrorDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 403, description = "User is not an admin", body = ApiErrorDto),
        (status = 404, description = "Account not found", body = ApiErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<String>,
    ApiJson(payload): ApiJson<CreateOrUpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateUserParams::from_dto(payload)?;
    let Some(user) = UserService::new(&state.db).update(&id, params).await? else {
        return Err(AppError::NotFound(None));
    };

    Ok(Json(ResponseDto::ok(UserToReturnDto {
        user: user.into_dto(),
    })))
}

/// Change the logged-in account's password.
#[utoipa::path(
    put,
    path = "/api/users/password",
    tag = USER_TAG,
    request_body = UpdatePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Current password is wrong or new password is empty", body = ApiErrorDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto)
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db)
        .change_password(user, &payload.current_password, &payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Replace another account's password with a generated one.
///
/// The new password is returned once and never stored in clear text.
///
/// # Access Control
/// - `Admin` - Only admins can reset passwords, and not their own
#[utoipa::path(
    post,
    path = "/api/users/{id}/password_reset",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "The generated password", body = PasswordDto),
        (status = 400, description = "Attempted on the caller's own account", body = ApiErrorDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 403, description = "User is not an admin", body = ApiErrorDto),
        (status = 404, description = "Account not found", body = ApiErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Some(password) = UserService::new(&state.db)
        .reset_password(&caller.id, &id)
        .await?
    else {
        return Err(AppError::NotFound(None));
    };

    Ok(Json(ResponseDto::ok(PasswordDto { password })))
}

/// Delete another account.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, description = "Attempted on the caller's own account", body = ApiErrorDto),
        (status = 401, description = "User not authenticated", body = ApiErrorDto),
        (status = 403, description = "User is not an admin", body = ApiErrorDto),
        (status = 404, description = "Account not found", body = ApiErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    ApiPath(id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if !UserService::new(&state.db).delete(&caller.id, &id).await? {
        return Err(AppError::NotFound(None));
    }

    Ok(StatusCode::NO_CONTENT)
}
