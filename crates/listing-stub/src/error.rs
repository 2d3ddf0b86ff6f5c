//! API error types and conversions

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),
    /// 404 Not Found
    NotFound(String),
}

/// Error body in the listing service's format
#[derive(Serialize)]
struct ErrorResponse {
    result: ErrorResult,
    status: String,
}

#[derive(Serialize)]
struct ErrorResult {
    message: String,
    messages: serde_json::Map<String, serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        tracing::debug!(status = status.as_u16(), %message, "API client error");

        let body = Json(ErrorResponse {
            result: ErrorResult {
                message,
                messages: serde_json::Map::new(),
            },
            status: status.as_u16().to_string(),
        });

        (status, body).into_response()
    }
}
