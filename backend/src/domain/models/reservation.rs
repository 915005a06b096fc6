use chrono::NaiveDateTime;
use shared::Frequency;

/// A confirmed booking. Created once by the booking flow and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub resource_id: u32,
    pub practitioner_name: String,
    pub frequency: Frequency,
}

impl Reservation {
    /// Whether the half-open range `[start, end)` intersects this reservation
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && start < self.end
    }
}

/// Reasons a confirm action is refused. None of them change any state.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("No slot is selected")]
    NoPendingSelection,
    #[error("Selected slot has not been confirmed; click it again to open the booking dialog")]
    SelectionNotConfirmed,
    #[error("Practitioner name cannot be empty")]
    InvalidName,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
