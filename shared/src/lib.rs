use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared recurrence cadence of a booking.
///
/// Recorded on the reservation only; no repeated occurrences are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One-off booking
    #[default]
    Eventual,
    /// Every two weeks
    #[serde(alias = "quincenal")]
    Biweekly,
    /// Every week
    #[serde(alias = "semanal")]
    Weekly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Eventual => "eventual",
            Frequency::Biweekly => "biweekly",
            Frequency::Weekly => "weekly",
        };
        write!(f, "{}", label)
    }
}

/// A bookable consulting room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomListResponse {
    pub rooms: Vec<Room>,
}

/// Slot gesture emitted by the calendar when a cell is clicked.
///
/// Timestamps are wall-clock times, e.g. `2024-02-01T09:00:00`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectSlotRequest {
    pub start: String,
    pub end: String,
    pub resource_id: u32,
}

/// The single in-progress, not yet confirmed slot choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingSelection {
    pub start: String,
    pub end: String,
    pub resource_id: u32,
}

/// State of the slot selector as seen by the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    Idle,
    Highlighted,
    Confirmed,
}

/// Result of a single select gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionOutcome {
    /// Slot is previewed, the dialog stays closed
    Highlighted,
    /// Same slot clicked again, the booking dialog opens
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectSlotResponse {
    pub outcome: SelectionOutcome,
    pub pending: PendingSelection,
    pub dialog_open: bool,
    /// Caption for the booking dialog, e.g. "Consulting Room 2 - 09:00 to 10:00"
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionStateResponse {
    pub state: SelectionState,
    pub pending: Option<PendingSelection>,
    pub dialog_open: bool,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateBookingRequest {
    pub practitioner_name: String,
}

/// Validation result for the booking dialog. The confirm control stays
/// disabled while `is_valid` is false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingFormValidation {
    pub is_valid: bool,
    pub errors: Vec<BookingFormError>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BookingFormError {
    EmptyPractitionerName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmBookingRequest {
    pub practitioner_name: String,
    #[serde(default)]
    pub frequency: Frequency,
}

/// A confirmed booking record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub resource_id: u32,
    pub practitioner_name: String,
    pub frequency: Frequency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReservationResponse {
    pub reservation: Reservation,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationListResponse {
    pub reservations: Vec<Reservation>,
}

/// One line of the reservation history table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationHistoryRow {
    pub reservation_id: String,
    /// "dd/mm/yyyy"
    pub date: String,
    /// "HH:MM"
    pub time: String,
    pub room: String,
    pub practitioner_name: String,
    pub frequency: Frequency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationHistoryResponse {
    /// "YYYY-MM" when a month filter was applied
    pub month: Option<String>,
    pub rows: Vec<ReservationHistoryRow>,
}

/// A single cell of the calendar grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSlot {
    pub start: String,
    pub end: String,
    /// Room the cell books; absent in an unscoped week view
    pub resource_id: Option<u32>,
    pub reservation_ids: Vec<String>,
    /// True when the cell equals the pending selection
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDayColumn {
    /// "YYYY-MM-DD"
    pub date: String,
    pub weekday: String,
    pub slots: Vec<CalendarSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekViewResponse {
    pub week_start: String,
    pub week_end: String,
    pub room_id: Option<u32>,
    pub days: Vec<CalendarDayColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarRoomColumn {
    pub room: Room,
    pub slots: Vec<CalendarSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayViewResponse {
    pub date: String,
    pub columns: Vec<CalendarRoomColumn>,
}

/// Error body returned by the REST layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
