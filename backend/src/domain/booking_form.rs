//! Booking dialog logic: practitioner name validation and reservation construction.
//!
//! The confirm control in the dialog stays disabled until the name is valid, so
//! `build_reservation` is only reached with a non-blank name.

use super::id_generator::ReservationIdGenerator;
use super::models::{PendingSelection, Reservation, Room};
use shared::{BookingFormError, BookingFormValidation, Frequency};

#[derive(Debug, Clone, Default)]
pub struct BookingForm;

impl BookingForm {
    pub fn new() -> Self {
        Self
    }

    /// True iff the trimmed name is non-empty
    pub fn validate(&self, practitioner_name: &str) -> bool {
        !practitioner_name.trim().is_empty()
    }

    /// Validation result in the shape the dialog renders
    pub fn validate_form(&self, practitioner_name: &str) -> BookingFormValidation {
        let mut errors = Vec::new();
        if !self.validate(practitioner_name) {
            errors.push(BookingFormError::EmptyPractitionerName);
        }

        BookingFormValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Build the reservation for a confirmed selection.
    ///
    /// Only side effect is drawing an id from `ids`.
    pub fn build_reservation(
        &self,
        pending: &PendingSelection,
        practitioner_name: &str,
        frequency: Frequency,
        ids: &dyn ReservationIdGenerator,
    ) -> Reservation {
        let name = practitioner_name.trim().to_string();
        Reservation {
            id: ids.next_id(),
            title: format!("Reservation: {}", name),
            start: pending.start,
            end: pending.end,
            resource_id: pending.resource_id,
            practitioner_name: name,
            frequency,
        }
    }

    /// Dialog caption, e.g. "Consulting Room 2 - 09:00 to 10:00"
    pub fn summary(&self, pending: &PendingSelection, room: Option<&Room>) -> String {
        let room_title = room
            .map(|room| room.title.clone())
            .unwrap_or_else(|| format!("Room {}", pending.resource_id));
        format!(
            "{} - {} to {}",
            room_title,
            pending.start.format("%H:%M"),
            pending.end.format("%H:%M")
        )
    }
}
