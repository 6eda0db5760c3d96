//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. It wraps
//! the domain-specific errors and implements `IntoResponse`, rendering every failure
//! inside the standard `ResponseDto` envelope with the matching status code.

pub mod auth;
pub mod config;
pub mod internal;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ResponseDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError,
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Most variants convert automatically through `#[from]`. Authentication errors
/// choose their own status codes; infrastructure failures all collapse into a
/// 500 response with the generic message while the details are logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Input rejected before anything was written.
    ///
    /// Results in 400 Bad Request with the validation message.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Unexpected state inside the application, such as a corrupt stored enum code.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found, or a listing matched nothing.
    ///
    /// Results in 404 Not Found. `None` uses the default "No content found" message.
    #[error("{}", .0.as_deref().unwrap_or("No content found"))]
    NotFound(Option<String>),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// A unit of work committed without affecting any row.
    ///
    /// Results in 400 Bad Request with the default message.
    #[error("No rows were affected by the operation")]
    PersistenceFailed,
}

impl AppError {
    /// Creates a `NotFound` error carrying a custom message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(Some(message.into()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Renders a failure envelope with the given status and optional custom message.
pub(crate) fn failure_response(status: StatusCode, message: Option<String>) -> Response {
    (
        status,
        Json(ResponseDto::<()>::failure(status.as_u16(), message)),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `ValidationErr` and `PersistenceFailed`
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(message) => failure_response(StatusCode::NOT_FOUND, message),
            Self::BadRequest(message) => failure_response(StatusCode::BAD_REQUEST, Some(message)),
            Self::ValidationErr(err) => {
                tracing::debug!("Rejected request: {}", err);
                failure_response(StatusCode::BAD_REQUEST, Some(err.to_string()))
            }
            Self::PersistenceFailed => failure_response(StatusCode::BAD_REQUEST, None),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns the generic "Internal error" message so implementation
/// details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        failure_response(StatusCode::INTERNAL_SERVER_ERROR, None)
    }
}
