//! # REST API for Reservations
//!
//! Endpoints for listing reservations by room and month, and for the
//! reservation history table.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};

use super::error_response;
use super::mappers::reservation_mapper::ReservationMapper;
use super::mappers::selection_mapper::parse_date;
use crate::domain::RoomFilter;
use crate::AppState;
use shared::ReservationHistoryResponse;

// Query parameters for the reservation list API
#[derive(Debug, Deserialize)]
pub struct ReservationListQuery {
    /// "all" or a room id
    pub room: Option<String>,
    /// Any date in the month of interest
    pub month: Option<String>,
}

// Query parameters for the reservation history API
#[derive(Debug, Deserialize)]
pub struct ReservationHistoryQuery {
    pub month: Option<String>,
}

/// Create a router for reservation listing APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reservations", get(list_reservations))
        .route("/reservations/history", get(get_reservation_history))
}

pub(crate) fn parse_room_filter(room: Option<&str>) -> Result<RoomFilter, Response> {
    match room {
        None => Ok(RoomFilter::All),
        Some(value) => value
            .parse::<RoomFilter>()
            .map_err(|e| error_response(StatusCode::BAD_REQUEST, "invalid_room_filter", e.to_string())),
    }
}

pub(crate) fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, Response> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_date(raw).map(Some).ok_or_else(|| {
            error_response(
                StatusCode::BAD_REQUEST,
                "invalid_date",
                format!("Invalid date '{}': expected YYYY-MM-DD", raw),
            )
        }),
    }
}

/// List reservations filtered by room and month
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationListQuery>,
) -> impl IntoResponse {
    info!("GET /api/reservations - query: {:?}", query);

    let room = match parse_room_filter(query.room.as_deref()) {
        Ok(room) => room,
        Err(response) => return response,
    };
    let month = match parse_optional_date(query.month.as_deref()) {
        Ok(month) => month,
        Err(response) => return response,
    };

    match state.reservation_view_service.list(room, month).await {
        Ok(reservations) => {
            (StatusCode::OK, Json(ReservationMapper::to_list_response(reservations))).into_response()
        }
        Err(e) => {
            error!("Failed to list reservations: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "Error listing reservations",
            )
        }
    }
}

/// Rows for the reservation history table
pub async fn get_reservation_history(
    State(state): State<AppState>,
    Query(query): Query<ReservationHistoryQuery>,
) -> impl IntoResponse {
    info!("GET /api/reservations/history - query: {:?}", query);

    let month = match parse_optional_date(query.month.as_deref()) {
        Ok(month) => month,
        Err(response) => return response,
    };

    match state.reservation_view_service.history_rows(month).await {
        Ok(rows) => {
            let response = ReservationHistoryResponse {
                month: month.map(|date| date.format("%Y-%m").to_string()),
                rows,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to build reservation history: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "Error building reservation history",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Reservation;
    use crate::domain::SequentialIdGenerator;
    use crate::storage::{InMemoryReservationStore, ReservationStore};
    use crate::{config::AppConfig, create_router, initialize_backend, initialize_backend_with};
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{Duration, NaiveDateTime};
    use shared::{ErrorResponse, Frequency, ReservationListResponse};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    async fn seeded_app() -> Result<axum::Router, Box<dyn std::error::Error>> {
        let store = Arc::new(InMemoryReservationStore::new());
        let seed = [
            ("r1", 1, at(2024, 2, 1, 9)),
            ("r2", 3, at(2024, 2, 15, 14)),
            ("r3", 3, at(2024, 3, 16, 15)),
            ("r4", 2, at(2024, 2, 10, 11)),
        ];
        for (id, room, start) in seed {
            store
                .append(Reservation {
                    id: id.to_string(),
                    title: format!("Reservation: {}", id),
                    start,
                    end: start + Duration::hours(1),
                    resource_id: room,
                    practitioner_name: format!("Dr. {}", id),
                    frequency: Frequency::Eventual,
                })
                .await?;
        }
        let state = initialize_backend_with(store, Arc::new(SequentialIdGenerator::new()));
        Ok(create_router(state, &AppConfig::default())?)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        app: axum::Router,
        uri: &str,
    ) -> Result<(StatusCode, T), Box<dyn std::error::Error>> {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty())?)
            .await?;
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&body)?))
    }

    fn ids(response: &ReservationListResponse) -> Vec<&str> {
        response.reservations.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_all() -> Result<(), Box<dyn std::error::Error>> {
        let app = seeded_app().await?;
        let (status, all): (_, ReservationListResponse) = get_json(app.clone(), "/api/reservations").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&all), vec!["r1", "r2", "r3", "r4"]);

        let (_, explicit): (_, ReservationListResponse) =
            get_json(app, "/api/reservations?room=all").await?;
        assert_eq!(explicit, all);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_by_room_and_month() -> Result<(), Box<dyn std::error::Error>> {
        let app = seeded_app().await?;

        let (_, room3): (_, ReservationListResponse) =
            get_json(app.clone(), "/api/reservations?room=3").await?;
        assert_eq!(ids(&room3), vec!["r2", "r3"]);

        let (_, february): (_, ReservationListResponse) =
            get_json(app.clone(), "/api/reservations?month=2024-02-20").await?;
        assert_eq!(ids(&february), vec!["r1", "r2", "r4"]);

        let (_, both): (_, ReservationListResponse) =
            get_json(app, "/api/reservations?room=3&month=2024-02").await?;
        assert_eq!(ids(&both), vec!["r2"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_rejects_bad_filters() -> Result<(), Box<dyn std::error::Error>> {
        let app = seeded_app().await?;

        let (status, error): (_, ErrorResponse) =
            get_json(app.clone(), "/api/reservations?room=lobby").await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.code, "invalid_room_filter");

        let (status, error): (_, ErrorResponse) =
            get_json(app, "/api/reservations?month=soon").await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.code, "invalid_date");
        Ok(())
    }

    #[tokio::test]
    async fn test_history_for_month() -> Result<(), Box<dyn std::error::Error>> {
        let app = seeded_app().await?;
        let (status, history): (_, ReservationHistoryResponse) =
            get_json(app, "/api/reservations/history?month=2024-02-01").await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(history.month.as_deref(), Some("2024-02"));
        let rooms: Vec<&str> = history.rows.iter().map(|row| row.room.as_str()).collect();
        assert_eq!(rooms, vec!["Consulting Room 1", "Consulting Room 2", "Consulting Room 3"]);
        assert_eq!(history.rows[2].date, "15/02/2024");
        assert_eq!(history.rows[2].time, "14:00");
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_store_history() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(initialize_backend(), &AppConfig::default())?;
        let (_, history): (_, ReservationHistoryResponse) =
            get_json(app, "/api/reservations/history").await?;
        assert_eq!(history.month, None);
        assert!(history.rows.is_empty());
        Ok(())
    }
}
