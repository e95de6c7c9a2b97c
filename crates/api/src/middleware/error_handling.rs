//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! TutorMatch API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error
//! handling experience across the entire API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tutormatch_core::errors::AvailabilityError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific [`AvailabilityError`] instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub AvailabilityError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            AvailabilityError::NotFound(_) => StatusCode::NOT_FOUND,
            AvailabilityError::MissingField(_)
            | AvailabilityError::InvalidTimeOrder { .. }
            | AvailabilityError::MalformedTime(_)
            | AvailabilityError::Validation(_) => StatusCode::BAD_REQUEST,
            // The request was well-formed; the collection's current state
            // forbids the write.
            AvailabilityError::CapacityExceeded { .. } => StatusCode::CONFLICT,
            AvailabilityError::Database(_) | AvailabilityError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows using the `?` operator with functions that return
/// `Result<T, AvailabilityError>` in handlers returning
/// `Result<T, AppError>`.
impl From<AvailabilityError> for AppError {
    fn from(err: AvailabilityError) -> Self {
        AppError(err)
    }
}

/// Wraps infrastructure failures from `eyre`-returning layers as database
/// errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AvailabilityError::Database(err))
    }
}
