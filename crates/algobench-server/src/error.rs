//! HTTP error responses.

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use algobench_core::calculator::AlgoError;

/// Message returned for a missing, null, or empty max-subarray body.
pub const EMPTY_INPUT: &str = "Input array cannot be null or empty";

/// Error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// An error that renders as a JSON response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// 400 with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// 404 with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// 500 with the given message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AlgoError> for ApiError {
    fn from(err: AlgoError) -> Self {
        let status = match err {
            AlgoError::InvalidInput(_) | AlgoError::Overflow(_) => StatusCode::BAD_REQUEST,
            AlgoError::UnknownStrategy(_) => StatusCode::NOT_FOUND,
            AlgoError::LimitExceeded { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AlgoError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            AlgoError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            AlgoError::Mismatch | AlgoError::Calculation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
        } else {
            tracing::debug!(status = %self.status, error = %self.message, "request rejected");
        }
        let body = ErrorBody {
            error: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
