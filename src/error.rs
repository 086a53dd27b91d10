// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::ml::ModelError;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request (malformed or out-of-range form fields)
    BadRequest(String),

    // 401 Unauthorized
    AuthError(String),

    // 422 Unprocessable Entity (topic outside the trained vocabulary)
    UnknownTopic(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AuthError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::UnknownTopic(topic) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Unknown topic '{}'", topic),
            ),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Converts `ModelError` into the matching `AppError`.
/// An out-of-vocabulary topic is the caller's fault; everything else
/// (broken artifacts, impossible class indices) is ours.
impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownTopic(topic) => AppError::UnknownTopic(topic),
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}

/// Converts `csv::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on dataset reads.
impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}
