//! # REST API for Calendar Views
//!
//! Week and day grids the calendar renders, with booked cells and the pending
//! selection marked.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::{error, info};

use super::error_response;
use super::reservation_apis::{parse_optional_date, parse_room_filter};
use crate::AppState;

// Query parameters for the week grid
#[derive(Debug, Deserialize)]
pub struct WeekViewQuery {
    /// Any day of the week to show; defaults to today
    pub date: Option<String>,
    pub room: Option<String>,
}

// Query parameters for the day grid
#[derive(Debug, Deserialize)]
pub struct DayViewQuery {
    pub date: Option<String>,
}

/// Create a router for calendar grid APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calendar/week", get(get_week_view))
        .route("/calendar/day", get(get_day_view))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Week grid for one room or for every room
pub async fn get_week_view(
    State(state): State<AppState>,
    Query(query): Query<WeekViewQuery>,
) -> impl IntoResponse {
    info!("GET /api/calendar/week - query: {:?}", query);

    let anchor = match parse_optional_date(query.date.as_deref()) {
        Ok(date) => date.unwrap_or_else(today),
        Err(response) => return response,
    };
    let room = match parse_room_filter(query.room.as_deref()) {
        Ok(room) => room,
        Err(response) => return response,
    };

    let reservations = match state.reservation_view_service.all().await {
        Ok(reservations) => reservations,
        Err(e) => {
            error!("Failed to load reservations for week view: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "Error loading reservations",
            );
        }
    };
    let pending = state.booking_service.pending().await;

    let week = state
        .calendar_service
        .week_view(anchor, room, &reservations, pending);
    (StatusCode::OK, Json(week)).into_response()
}

/// Day grid with one column per room
pub async fn get_day_view(
    State(state): State<AppState>,
    Query(query): Query<DayViewQuery>,
) -> impl IntoResponse {
    info!("GET /api/calendar/day - query: {:?}", query);

    let date = match parse_optional_date(query.date.as_deref()) {
        Ok(date) => date.unwrap_or_else(today),
        Err(response) => return response,
    };

    let reservations = match state.reservation_view_service.all().await {
        Ok(reservations) => reservations,
        Err(e) => {
            error!("Failed to load reservations for day view: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                "Error loading reservations",
            );
        }
    };
    let pending = state.booking_service.pending().await;

    let day = state.calendar_service.day_view(date, &reservations, pending);
    (StatusCode::OK, Json(day)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, create_router, initialize_backend};
    use axum::body::Body;
    use axum::http::{header, Request};
    use shared::{DayViewResponse, ErrorResponse, WeekViewResponse};
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, body: &str) -> Result<Request<Body>, axum::http::Error> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: axum::response::Response,
    ) -> Result<T, Box<dyn std::error::Error>> {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    #[tokio::test]
    async fn test_week_view_for_room() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(initialize_backend(), &AppConfig::default())?;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendar/week?date=2024-02-01&room=2")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let week: WeekViewResponse = read_json(response).await?;
        assert_eq!(week.week_start, "2024-01-29");
        assert_eq!(week.room_id, Some(2));
        assert_eq!(week.days.len(), 7);
        assert!(week.days.iter().all(|day| day.slots.iter().all(|slot| slot.resource_id == Some(2))));
        Ok(())
    }

    #[tokio::test]
    async fn test_unscoped_week_highlights_pending_slot() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(initialize_backend(), &AppConfig::default())?;
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/selection",
                r#"{"start":"2024-02-01T09:00:00","end":"2024-02-01T10:00:00","resource_id":2}"#,
            )?)
            .await?;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendar/week?date=2024-02-01")
                    .body(Body::empty())?,
            )
            .await?;
        let week: WeekViewResponse = read_json(response).await?;

        assert_eq!(week.room_id, None);
        let selected: Vec<&str> = week
            .days
            .iter()
            .flat_map(|day| day.slots.iter())
            .filter(|slot| slot.selected)
            .map(|slot| slot.start.as_str())
            .collect();
        assert_eq!(selected, vec!["2024-02-01T09:00:00"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_week_view_rejects_bad_date() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(initialize_backend(), &AppConfig::default())?;
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendar/week?date=yesterday")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = read_json(response).await?;
        assert_eq!(error.code, "invalid_date");
        Ok(())
    }

    #[tokio::test]
    async fn test_day_view_marks_pending_selection() -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(initialize_backend(), &AppConfig::default())?;

        let select = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/selection",
                r#"{"start":"2024-02-01T10:00:00","end":"2024-02-01T11:00:00","resource_id":3}"#,
            )?)
            .await?;
        assert_eq!(select.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendar/day?date=2024-02-01")
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let day: DayViewResponse = read_json(response).await?;
        assert_eq!(day.columns.len(), 5);
        let selected: Vec<(u32, &str)> = day
            .columns
            .iter()
            .flat_map(|column| {
                column
                    .slots
                    .iter()
                    .filter(|slot| slot.selected)
                    .map(move |slot| (column.room.id, slot.start.as_str()))
            })
            .collect();
        assert_eq!(selected, vec![(3, "2024-02-01T10:00:00")]);
        Ok(())
    }
}
