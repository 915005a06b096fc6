//! Reservation view logic for the calendar and the reservation history table.
//!
//! All views are recomputed from a store snapshot on every call. Filters keep the
//! store's insertion order; only the history table sorts by start time.
//!
//! ## Filters
//!
//! - **Room**: one room id, or the `all` sentinel for no filtering
//! - **Month**: same calendar month and year as a reference date
//! - **Day / Week**: reservations overlapping a day, or its Monday-based week

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use super::models::Reservation;
use super::room_registry::RoomRegistry;
use crate::storage::ReservationStore;
use shared::ReservationHistoryRow;

/// Room filter selected in the calendar toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomFilter {
    #[default]
    All,
    Room(u32),
}

impl RoomFilter {
    pub fn matches(&self, reservation: &Reservation) -> bool {
        match self {
            RoomFilter::All => true,
            RoomFilter::Room(room_id) => reservation.resource_id == *room_id,
        }
    }

    pub fn room_id(&self) -> Option<u32> {
        match self {
            RoomFilter::All => None,
            RoomFilter::Room(room_id) => Some(*room_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid room filter '{0}': expected 'all' or a room id")]
pub struct RoomFilterParseError(pub String);

impl FromStr for RoomFilter {
    type Err = RoomFilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            return Ok(RoomFilter::All);
        }
        value
            .parse::<u32>()
            .map(RoomFilter::Room)
            .map_err(|_| RoomFilterParseError(value.to_string()))
    }
}

impl fmt::Display for RoomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomFilter::All => write!(f, "all"),
            RoomFilter::Room(room_id) => write!(f, "{}", room_id),
        }
    }
}

/// Reservations in the given room, or all of them for [`RoomFilter::All`]
pub fn by_room(reservations: &[Reservation], filter: RoomFilter) -> Vec<Reservation> {
    reservations
        .iter()
        .filter(|reservation| filter.matches(reservation))
        .cloned()
        .collect()
}

/// Reservations starting in the same month and year as `date`.
///
/// Without a date nothing is filtered. The day of month is ignored.
pub fn by_month(reservations: &[Reservation], date: Option<NaiveDate>) -> Vec<Reservation> {
    match date {
        None => reservations.to_vec(),
        Some(date) => reservations
            .iter()
            .filter(|reservation| {
                reservation.start.year() == date.year() && reservation.start.month() == date.month()
            })
            .cloned()
            .collect(),
    }
}

/// Reservations overlapping `date`, including ones spilling in from the day before
pub fn by_day(reservations: &[Reservation], date: NaiveDate) -> Vec<Reservation> {
    let start = date.and_time(NaiveTime::MIN);
    overlapping(reservations, start, start + Duration::days(1))
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Reservations overlapping the Monday-based week containing `date`
pub fn by_week(reservations: &[Reservation], date: NaiveDate) -> Vec<Reservation> {
    let start = week_start(date).and_time(NaiveTime::MIN);
    overlapping(reservations, start, start + Duration::days(7))
}

fn overlapping(reservations: &[Reservation], start: NaiveDateTime, end: NaiveDateTime) -> Vec<Reservation> {
    reservations
        .iter()
        .filter(|reservation| reservation.overlaps(start, end))
        .cloned()
        .collect()
}

/// Service answering view queries against the reservation store
#[derive(Clone)]
pub struct ReservationViewService {
    store: Arc<dyn ReservationStore>,
    rooms: RoomRegistry,
}

impl ReservationViewService {
    pub fn new(store: Arc<dyn ReservationStore>, rooms: RoomRegistry) -> Self {
        Self { store, rooms }
    }

    /// Every reservation in insertion order
    pub async fn all(&self) -> Result<Vec<Reservation>> {
        self.store.all().await
    }

    /// Reservations matching both the room and month filters
    pub async fn list(&self, room: RoomFilter, month: Option<NaiveDate>) -> Result<Vec<Reservation>> {
        let all = self.store.all().await?;
        let filtered = by_month(&by_room(&all, room), month);
        info!(
            "Listing reservations: room={}, month={:?}, {} of {} match",
            room,
            month.map(|date| date.format("%Y-%m").to_string()),
            filtered.len(),
            all.len()
        );
        Ok(filtered)
    }

    /// Rows for the reservation history table, oldest first
    pub async fn history_rows(&self, month: Option<NaiveDate>) -> Result<Vec<ReservationHistoryRow>> {
        let mut reservations = by_month(&self.store.all().await?, month);
        reservations.sort_by_key(|reservation| reservation.start);

        Ok(reservations
            .into_iter()
            .map(|reservation| ReservationHistoryRow {
                date: reservation.start.format("%d/%m/%Y").to_string(),
                time: reservation.start.format("%H:%M").to_string(),
                room: self.rooms.title_for(reservation.resource_id),
                practitioner_name: reservation.practitioner_name,
                frequency: reservation.frequency,
                reservation_id: reservation.id,
            })
            .collect())
    }
}
