//! # REST API for the Booking Dialog
//!
//! Endpoints for validating the practitioner name and confirming a booking.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use tracing::{error, info, warn};

use super::{error_response, json_rejection_response};
use super::mappers::reservation_mapper::ReservationMapper;
use crate::domain::models::BookingError;
use crate::AppState;
use shared::{ConfirmBookingRequest, ValidateBookingRequest};

/// Create a router for booking dialog APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/booking/validate", post(validate_booking))
        .route("/booking/confirm", post(confirm_booking))
}

/// Validate the dialog input; the confirm control stays disabled while invalid
pub async fn validate_booking(
    State(state): State<AppState>,
    payload: Result<Json<ValidateBookingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return json_rejection_response(rejection),
    };
    info!("POST /api/booking/validate - request: {:?}", request);

    let validation = state.booking_service.validate_name(&request.practitioner_name);
    (StatusCode::OK, Json(validation)).into_response()
}

/// Book the slot the dialog is open for
pub async fn confirm_booking(
    State(state): State<AppState>,
    payload: Result<Json<ConfirmBookingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return json_rejection_response(rejection),
    };
    info!("POST /api/booking/confirm - request: {:?}", request);

    match state
        .booking_service
        .confirm(&request.practitioner_name, request.frequency)
        .await
    {
        Ok(reservation) => {
            let room_title = state.rooms.title_for(reservation.resource_id);
            let response = ReservationMapper::to_create_response(reservation, &room_title);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => booking_error_response(e),
    }
}

fn booking_error_response(e: BookingError) -> Response {
    match e {
        BookingError::NoPendingSelection | BookingError::SelectionNotConfirmed => {
            warn!("Booking refused: {}", e);
            error_response(StatusCode::CONFLICT, "invalid_selection", e.to_string())
        }
        BookingError::InvalidName => {
            warn!("Booking refused: {}", e);
            error_response(StatusCode::UNPROCESSABLE_ENTITY, "invalid_name", e.to_string())
        }
        BookingError::Storage(ref source) => {
            error!("Failed to store reservation: {:#}", source);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "Error storing reservation",
            )
        }
    }
}
