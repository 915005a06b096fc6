//! # REST API Interface Layer
//!
//! HTTP endpoints for the consulting room scheduler, one router per resource:
//!
//! - `/api/rooms` - room registry
//! - `/api/selection` - slot gestures and cancel
//! - `/api/booking` - form validation and confirmation
//! - `/api/reservations` - filtered lists and the history table
//! - `/api/calendar` - week and day grids
//!
//! Domain refusals and malformed bodies become 4xx responses with an
//! [`ErrorResponse`] body.

pub mod booking_apis;
pub mod calendar_apis;
pub mod mappers;
pub mod reservation_apis;
pub mod room_apis;
pub mod selection_apis;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;

use crate::domain::models::SlotValidationError;

/// Build an error response with a machine-readable code
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    let body = ErrorResponse {
        error: message.into(),
        code: code.to_string(),
    };
    (status, Json(body)).into_response()
}

pub(crate) fn slot_validation_response(error: &SlotValidationError) -> Response {
    let code = match error {
        SlotValidationError::InvalidTimestamp(_) => "invalid_timestamp",
        SlotValidationError::EmptyTimeRange { .. } => "empty_time_range",
        SlotValidationError::UnknownRoom(_) => "unknown_room",
    };
    error_response(StatusCode::BAD_REQUEST, code, error.to_string())
}

/// Malformed or mistyped JSON bodies, e.g. an unknown frequency
pub(crate) fn json_rejection_response(rejection: JsonRejection) -> Response {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    error_response(StatusCode::BAD_REQUEST, "invalid_request", rejection.body_text())
}
