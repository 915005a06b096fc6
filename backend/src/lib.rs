//! # Consulting Rooms Backend
//!
//! Scheduling backend for a small set of consulting rooms. Practitioners pick a
//! slot on a calendar, click it a second time to open the booking dialog, enter
//! their name and a frequency, and the booking is stored for the session.
//!
//! ## Architecture
//!
//! ```text
//! Calendar frontend (external)
//!     ↓
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (selection, booking, views)
//!     ↓
//! Storage Layer (in-memory reservation store)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{
    BookingService, CalendarService, ReservationIdGenerator, ReservationViewService, RoomRegistry,
    UuidIdGenerator,
};
use crate::io::rest;
use crate::storage::{InMemoryReservationStore, ReservationStore};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub rooms: RoomRegistry,
    pub booking_service: BookingService,
    pub reservation_view_service: ReservationViewService,
    pub calendar_service: CalendarService,
}

/// Initialize the backend with an empty in-memory store
pub fn initialize_backend() -> AppState {
    initialize_backend_with(
        Arc::new(InMemoryReservationStore::new()),
        Arc::new(UuidIdGenerator),
    )
}

/// Initialize the backend on top of a given store and id source
pub fn initialize_backend_with(
    store: Arc<dyn ReservationStore>,
    ids: Arc<dyn ReservationIdGenerator>,
) -> AppState {
    info!("Setting up room registry");
    let rooms = RoomRegistry::default();

    info!("Setting up domain model");
    let booking_service = BookingService::with_id_generator(store.clone(), rooms.clone(), ids);
    let reservation_view_service = ReservationViewService::new(store, rooms.clone());
    let calendar_service = CalendarService::new(rooms.clone());

    AppState {
        rooms,
        booking_service,
        reservation_view_service,
        calendar_service,
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", config.cors_origin))?;

    // CORS setup to allow the calendar frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .merge(rest::room_apis::router())
        .merge(rest::selection_apis::router())
        .merge(rest::booking_apis::router())
        .merge(rest::reservation_apis::router())
        .merge(rest::calendar_apis::router());

    let mut router = Router::new().nest("/api", api_routes);
    if let Some(dir) = &config.static_dir {
        info!("Serving static files from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    Ok(router.layer(cors).with_state(app_state))
}
