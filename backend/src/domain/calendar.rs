//! Calendar grid logic for the consulting room scheduler.
//!
//! Builds the cell layout the calendar renders: a Monday-based week for one
//! room (or all rooms), and a single day with one column per room. Each cell is
//! a bookable slot; its start, end and room are exactly what the calendar sends
//! back as a select gesture. The UI only draws what this module returns.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use shared::{
    CalendarDayColumn, CalendarRoomColumn, CalendarSlot, DayViewResponse, Room as SharedRoom,
    WeekViewResponse,
};

use super::models::{PendingSelection, Reservation};
use super::reservation_view::{by_day, by_room, by_week, week_start, RoomFilter};
use super::room_registry::RoomRegistry;

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Visible hours and slot size of the two calendar views
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarViewConfig {
    pub week_first_hour: u32,
    pub week_last_hour: u32,
    pub day_first_hour: u32,
    pub day_last_hour: u32,
    pub step_minutes: u32,
}

impl Default for CalendarViewConfig {
    fn default() -> Self {
        Self {
            week_first_hour: 7,
            week_last_hour: 23,
            day_first_hour: 8,
            day_last_hour: 20,
            step_minutes: 60,
        }
    }
}

/// Calendar service that derives grid layouts from reservations
#[derive(Clone)]
pub struct CalendarService {
    config: CalendarViewConfig,
    rooms: RoomRegistry,
}

impl CalendarService {
    pub fn new(rooms: RoomRegistry) -> Self {
        Self::with_config(rooms, CalendarViewConfig::default())
    }

    pub fn with_config(rooms: RoomRegistry, config: CalendarViewConfig) -> Self {
        Self { config, rooms }
    }

    /// Week grid (Monday to Sunday) around `anchor`.
    ///
    /// Scoped to a room, cells carry that room's id and only its reservations;
    /// with [`RoomFilter::All`] cells have no room and list every reservation.
    /// The pending selection is marked in either case.
    pub fn week_view(
        &self,
        anchor: NaiveDate,
        room: RoomFilter,
        reservations: &[Reservation],
        pending: Option<PendingSelection>,
    ) -> WeekViewResponse {
        let first_day = week_start(anchor);
        let in_week = by_room(&by_week(reservations, anchor), room);
        let days = (0..7)
            .map(|offset| {
                let date = first_day + Duration::days(offset);
                CalendarDayColumn {
                    date: date.format("%Y-%m-%d").to_string(),
                    weekday: date.format("%A").to_string(),
                    slots: self.slots_for_day(
                        date,
                        self.config.week_first_hour,
                        self.config.week_last_hour,
                        room.room_id(),
                        &in_week,
                        pending,
                    ),
                }
            })
            .collect();

        tracing::debug!("Built week view from {} for room {}", first_day, room);

        WeekViewResponse {
            week_start: first_day.format("%Y-%m-%d").to_string(),
            week_end: (first_day + Duration::days(6)).format("%Y-%m-%d").to_string(),
            room_id: room.room_id(),
            days,
        }
    }

    /// Day grid with one column per registered room
    pub fn day_view(
        &self,
        date: NaiveDate,
        reservations: &[Reservation],
        pending: Option<PendingSelection>,
    ) -> DayViewResponse {
        let on_day = by_day(reservations, date);
        let columns = self
            .rooms
            .all()
            .iter()
            .map(|room| CalendarRoomColumn {
                room: SharedRoom {
                    id: room.id,
                    title: room.title.clone(),
                },
                slots: self.slots_for_day(
                    date,
                    self.config.day_first_hour,
                    self.config.day_last_hour,
                    Some(room.id),
                    &by_room(&on_day, RoomFilter::Room(room.id)),
                    pending,
                ),
            })
            .collect();

        DayViewResponse {
            date: date.format("%Y-%m-%d").to_string(),
            columns,
        }
    }

    fn slots_for_day(
        &self,
        date: NaiveDate,
        first_hour: u32,
        last_hour: u32,
        resource_id: Option<u32>,
        reservations: &[Reservation],
        pending: Option<PendingSelection>,
    ) -> Vec<CalendarSlot> {
        let midnight = date.and_time(NaiveTime::MIN);
        let window_end = midnight + Duration::hours(last_hour as i64);
        let step = Duration::minutes(self.config.step_minutes.max(1) as i64);

        let mut slots = Vec::new();
        let mut start = midnight + Duration::hours(first_hour as i64);
        while start + step <= window_end {
            let end = start + step;
            slots.push(CalendarSlot {
                start: start.format(DATE_TIME_FORMAT).to_string(),
                end: end.format(DATE_TIME_FORMAT).to_string(),
                resource_id,
                reservation_ids: overlapping_ids(reservations, start, end),
                selected: is_pending(pending, start, end, resource_id),
            });
            start = end;
        }
        slots
    }
}

fn overlapping_ids(reservations: &[Reservation], start: NaiveDateTime, end: NaiveDateTime) -> Vec<String> {
    reservations
        .iter()
        .filter(|reservation| reservation.overlaps(start, end))
        .map(|reservation| reservation.id.clone())
        .collect()
}

fn is_pending(
    pending: Option<PendingSelection>,
    start: NaiveDateTime,
    end: NaiveDateTime,
    resource_id: Option<u32>,
) -> bool {
    // Unscoped cells have no room, so only the time range is compared
    pending.map_or(false, |pending| {
        pending.start == start
            && pending.end == end
            && resource_id.map_or(true, |id| pending.resource_id == id)
    })
}
