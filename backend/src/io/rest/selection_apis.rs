//! # REST API for Slot Selection
//!
//! Endpoints for applying calendar clicks, reading the selector state and
//! cancelling the pending selection.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{info, warn};

use super::mappers::selection_mapper::SelectionMapper;
use super::{json_rejection_response, slot_validation_response};
use crate::AppState;
use shared::SelectSlotRequest;

/// Create a router for slot selection APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/selection", get(get_selection).post(select_slot))
        .route("/selection/cancel", post(cancel_selection))
}

/// Current selector state, for re-rendering the highlighted cell and dialog
pub async fn get_selection(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/selection");

    let snapshot = state.booking_service.current_selection().await;
    (StatusCode::OK, Json(SelectionMapper::to_state_response(snapshot)))
}

/// Apply a click on a calendar cell
pub async fn select_slot(
    State(state): State<AppState>,
    payload: Result<Json<SelectSlotRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return json_rejection_response(rejection),
    };
    info!("POST /api/selection - request: {:?}", request);

    let candidate = match SelectionMapper::to_domain(&request) {
        Ok(candidate) => candidate,
        Err(e) => {
            warn!("Rejected slot gesture: {}", e);
            return slot_validation_response(&e);
        }
    };

    match state.booking_service.select(candidate).await {
        Ok(result) => (StatusCode::OK, Json(SelectionMapper::to_select_response(result))).into_response(),
        Err(e) => slot_validation_response(&e),
    }
}

/// Close the booking dialog and clear the pending selection
pub async fn cancel_selection(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/selection/cancel");

    state.booking_service.cancel().await;
    let snapshot = state.booking_service.current_selection().await;
    (StatusCode::OK, Json(SelectionMapper::to_state_response(snapshot)))
}
