//! # REST API for Consulting Rooms
//!
//! Lists the rooms a slot can be booked in.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::info;

use crate::AppState;
use shared::{Room, RoomListResponse};

/// Create a router for room related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/rooms", get(list_rooms))
}

/// List the bookable consulting rooms
pub async fn list_rooms(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/rooms");

    let rooms = state
        .rooms
        .all()
        .iter()
        .map(|room| Room {
            id: room.id,
            title: room.title.clone(),
        })
        .collect();

    (StatusCode::OK, Json(RoomListResponse { rooms }))
}
