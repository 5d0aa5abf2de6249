use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope shared by every successful, not-found, and no-content response.
///
/// `status` is only present on the success shape; `data` is always present and
/// serialises as `null` when there is nothing to return.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub result: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Some(StatusCode::OK.as_u16()),
            result: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Not-found is still delivered with HTTP 200; clients key off `result`.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: None,
            result: false,
            message: message.into(),
            data: None,
        }
    }

    /// Pair with `StatusCode::NO_CONTENT` when returning from a handler.
    pub fn no_content(message: impl Into<String>) -> Self {
        Self {
            status: None,
            result: true,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Envelope for rejected requests and unexpected failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    pub result: bool,
    pub message: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn rejected(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST.as_u16(),
            result: false,
            message: message.into(),
            error: error.into(),
        }
    }

    pub fn exception(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            result: false,
            message: "Internal Server Error".to_string(),
            error: error.into(),
        }
    }
}
