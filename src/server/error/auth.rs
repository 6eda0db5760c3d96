use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::failure_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The caller never logged in or the session expired. Results in 401 Unauthorized.
    #[error("No user found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in 404 Not Found.
    #[error("User {0} from session was not found in database")]
    UserNotInDatabase(String),

    /// The user lacks a required permission.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of what was attempted, logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// Unknown email or wrong password.
    ///
    /// Both cases share one message so the response does not reveal which
    /// accounts exist. Results in 401 Unauthorized.
    #[error("Invalid login or password")]
    InvalidCredentials,

    /// An administrator attempted an action on their own account that is only
    /// allowed on other accounts (password reset, deletion).
    ///
    /// Results in 400 Bad Request.
    #[error("Cannot {0} your own account")]
    SelfAction(&'static str),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level; client-facing messages stay generic.
///
/// # Returns
/// - 400 Bad Request - For `SelfAction`
/// - 401 Unauthorized - For `UserNotInSession` and `InvalidCredentials`
/// - 403 Forbidden - For `AccessDenied`
/// - 404 Not Found - For `UserNotInDatabase`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => failure_response(StatusCode::UNAUTHORIZED, None),
            Self::UserNotInDatabase(_) => failure_response(StatusCode::NOT_FOUND, None),
            Self::AccessDenied(_, _) => failure_response(StatusCode::FORBIDDEN, None),
            Self::InvalidCredentials => {
                failure_response(StatusCode::UNAUTHORIZED, Some(self.to_string()))
            }
            Self::SelfAction(_) => failure_response(StatusCode::BAD_REQUEST, Some(self.to_string())),
        }
    }
}
