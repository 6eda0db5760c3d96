use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error part of the response envelope.
///
/// `message` is `null` on success and carries either a custom message or the
/// default message for the response status on failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDto {
    pub message: Option<String>,
}

impl ApiErrorDto {
    /// Builds the error for `status_code`, preferring `message` over the default.
    pub fn new(status_code: u16, message: Option<String>) -> Self {
        Self {
            message: message.or_else(|| default_message_for_status(status_code).map(String::from)),
        }
    }
}

/// Default client-facing message for an HTTP status code.
pub fn default_message_for_status(status_code: u16) -> Option<&'static str> {
    match status_code {
        400 => Some("Bad request"),
        401 => Some("Not authorized"),
        403 => Some("Forbidden"),
        404 => Some("No content found"),
        500 => Some("Internal error"),
        _ => None,
    }
}

/// Envelope wrapping every response body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: ApiErrorDto,
}

impl<T> ResponseDto<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: ApiErrorDto::default(),
        }
    }

    pub fn failure(status_code: u16, message: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: ApiErrorDto::new(status_code, message),
        }
    }
}
