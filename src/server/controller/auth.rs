use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiErrorDto, ResponseDto},
        user::{LoginDto, TokenDto, UserResponseDto},
    },
    server::{
        error::{internal::InternalError, AppError},
        middleware::{extract::ApiJson, session::AuthSession},
        model::user::User,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Stores the account id in the session and returns the account together with the
/// session token. Unknown emails and wrong passwords fail identically.
///
/// # Returns
/// - `200 OK` - Account and session token
/// - `401 Unauthorized` - Invalid login or password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserResponseDto),
        (status = 401, description = "Invalid login or password", body = ApiErrorDto),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
    security(()),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.login, &payload.password)
        .await?;

    let auth_session = AuthSession::new(&session);
    auth_session.set_user_id(&user.id).await?;
    let token = auth_session
        .token()
        .await?
        .ok_or(InternalError::SessionWithoutId)?;

    Ok(Json(ResponseDto::ok(UserResponseDto {
        user: User::from_entity(user).into_dto(),
        token: TokenDto { token },
    })))
}

/// Log out, deleting the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ApiErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}
