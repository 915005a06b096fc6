//! Booking flow: slot gestures in, reservations out.
//!
//! Ties the slot selector, the booking form and the reservation store
//! together. The selector lives behind an async mutex; confirm holds it across
//! the store append so a gesture can never interleave with a booking.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::booking_form::BookingForm;
use super::id_generator::{ReservationIdGenerator, UuidIdGenerator};
use super::models::{BookingError, PendingSelection, Reservation, SlotValidationError};
use super::room_registry::RoomRegistry;
use super::slot_selector::{SelectorState, SlotSelector};
use crate::storage::ReservationStore;
use shared::{BookingFormValidation, Frequency, SelectionOutcome};

/// Snapshot of the selector for the calendar
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSnapshot {
    pub state: SelectorState,
    pub dialog_open: bool,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectResult {
    pub outcome: SelectionOutcome,
    pub pending: PendingSelection,
    pub dialog_open: bool,
    pub summary: String,
}

#[derive(Clone)]
pub struct BookingService {
    selector: Arc<Mutex<SlotSelector>>,
    store: Arc<dyn ReservationStore>,
    ids: Arc<dyn ReservationIdGenerator>,
    rooms: RoomRegistry,
    form: BookingForm,
}

impl BookingService {
    /// Create a booking service with random reservation ids
    pub fn new(store: Arc<dyn ReservationStore>, rooms: RoomRegistry) -> Self {
        Self::with_id_generator(store, rooms, Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(
        store: Arc<dyn ReservationStore>,
        rooms: RoomRegistry,
        ids: Arc<dyn ReservationIdGenerator>,
    ) -> Self {
        Self {
            selector: Arc::new(Mutex::new(SlotSelector::new())),
            store,
            ids,
            rooms,
            form: BookingForm::new(),
        }
    }

    /// Apply a click on a calendar cell.
    ///
    /// Candidates naming an unknown room are rejected before any comparison
    /// and leave the selection untouched.
    pub async fn select(&self, candidate: PendingSelection) -> Result<SelectResult, SlotValidationError> {
        if !self.rooms.contains(candidate.resource_id) {
            warn!("Rejected selection for unknown room {}", candidate.resource_id);
            return Err(SlotValidationError::UnknownRoom(candidate.resource_id));
        }

        let mut selector = self.selector.lock().await;
        let outcome = selector.select(candidate);
        info!(
            "📅 Slot {} - {} in room {}: {:?}",
            candidate.start, candidate.end, candidate.resource_id, outcome
        );

        Ok(SelectResult {
            outcome,
            pending: candidate,
            dialog_open: selector.is_dialog_open(),
            summary: self.summary(&candidate),
        })
    }

    /// Close the dialog and drop the pending selection
    pub async fn cancel(&self) -> Option<PendingSelection> {
        let cleared = self.selector.lock().await.cancel();
        match &cleared {
            Some(pending) => info!("Cancelled selection in room {}", pending.resource_id),
            None => info!("Cancel with no pending selection"),
        }
        cleared
    }

    pub async fn current_selection(&self) -> SelectionSnapshot {
        let selector = self.selector.lock().await;
        SelectionSnapshot {
            state: selector.state(),
            dialog_open: selector.is_dialog_open(),
            summary: selector.pending().map(|pending| self.summary(&pending)),
        }
    }

    pub async fn pending(&self) -> Option<PendingSelection> {
        self.selector.lock().await.pending()
    }

    pub fn validate_name(&self, practitioner_name: &str) -> BookingFormValidation {
        self.form.validate_form(practitioner_name)
    }

    /// Book the slot the dialog is open for.
    ///
    /// Refusals leave both the selection and the store unchanged. On success
    /// the reservation is appended and the selection is cleared.
    pub async fn confirm(
        &self,
        practitioner_name: &str,
        frequency: Frequency,
    ) -> Result<Reservation, BookingError> {
        let mut selector = self.selector.lock().await;

        let pending = match (selector.confirmed(), selector.pending()) {
            (Some(pending), _) => pending,
            (None, Some(_)) => {
                warn!("Confirm ignored: selection is only highlighted");
                return Err(BookingError::SelectionNotConfirmed);
            }
            (None, None) => {
                warn!("Confirm ignored: no pending selection");
                return Err(BookingError::NoPendingSelection);
            }
        };

        if !self.form.validate(practitioner_name) {
            warn!("Confirm ignored: practitioner name is blank");
            return Err(BookingError::InvalidName);
        }

        let reservation =
            self.form
                .build_reservation(&pending, practitioner_name, frequency, self.ids.as_ref());
        self.store.append(reservation.clone()).await?;
        selector.cancel();

        info!(
            "Booked {} for {} in room {} ({})",
            reservation.id, reservation.practitioner_name, reservation.resource_id, reservation.frequency
        );
        Ok(reservation)
    }

    fn summary(&self, pending: &PendingSelection) -> String {
        self.form.summary(pending, self.rooms.get(pending.resource_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id_generator::SequentialIdGenerator;
    use crate::storage::InMemoryReservationStore;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn slot(hour: u32, room: u32) -> PendingSelection {
        PendingSelection::new(at(hour), at(hour + 1), room).unwrap()
    }

    fn service() -> (BookingService, Arc<InMemoryReservationStore>) {
        let store = Arc::new(InMemoryReservationStore::new());
        let service = BookingService::with_id_generator(
            store.clone(),
            RoomRegistry::default(),
            Arc::new(SequentialIdGenerator::new()),
        );
        (service, store)
    }

    struct FailingStore;

    #[async_trait]
    impl ReservationStore for FailingStore {
        async fn append(&self, _reservation: Reservation) -> anyhow::Result<()> {
            Err(anyhow!("disk full"))
        }

        async fn all(&self) -> anyhow::Result<Vec<Reservation>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_first_click_highlights_without_dialog() -> anyhow::Result<()> {
        let (service, _) = service();
        let result = service.select(slot(9, 2)).await?;

        assert_eq!(result.outcome, SelectionOutcome::Highlighted);
        assert!(!result.dialog_open);
        assert_eq!(result.summary, "Consulting Room 2 - 09:00 to 10:00");
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_room_is_rejected_and_state_kept() -> anyhow::Result<()> {
        let (service, _) = service();
        service.select(slot(9, 2)).await?;

        let result = service.select(slot(9, 6)).await;
        assert_eq!(result, Err(SlotValidationError::UnknownRoom(6)));
        assert_eq!(service.pending().await, Some(slot(9, 2)));
        Ok(())
    }

    #[tokio::test]
    async fn test_end_to_end_booking() -> anyhow::Result<()> {
        let (service, store) = service();
        service.select(slot(9, 2)).await?;
        let second = service.select(slot(9, 2)).await?;
        assert_eq!(second.outcome, SelectionOutcome::Confirmed);
        assert!(second.dialog_open);

        let reservation = service.confirm("Dr. Lee", Frequency::Weekly).await?;
        assert_eq!(reservation.resource_id, 2);
        assert_eq!(reservation.practitioner_name, "Dr. Lee");
        assert_eq!(reservation.frequency, Frequency::Weekly);

        assert_eq!(store.all().await?, vec![reservation]);
        assert_eq!(service.pending().await, None);
        assert_eq!(service.current_selection().await.state, SelectorState::Idle);
        Ok(())
    }

    #[tokio::test]
    async fn test_confirm_without_selection_is_noop() -> anyhow::Result<()> {
        let (service, store) = service();
        let result = service.confirm("Dr. Lee", Frequency::Eventual).await;

        assert!(matches!(result, Err(BookingError::NoPendingSelection)));
        assert!(store.all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_confirm_after_single_click_is_noop() -> anyhow::Result<()> {
        let (service, store) = service();
        service.select(slot(9, 2)).await?;
        let result = service.confirm("Dr. Lee", Frequency::Eventual).await;

        assert!(matches!(result, Err(BookingError::SelectionNotConfirmed)));
        assert!(store.all().await?.is_empty());
        assert_eq!(service.pending().await, Some(slot(9, 2)));
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_name_keeps_dialog_open() -> anyhow::Result<()> {
        let (service, store) = service();
        service.select(slot(9, 2)).await?;
        service.select(slot(9, 2)).await?;

        let result = service.confirm("   ", Frequency::Eventual).await;
        assert!(matches!(result, Err(BookingError::InvalidName)));
        assert!(store.all().await?.is_empty());
        assert!(service.current_selection().await.dialog_open);
        Ok(())
    }

    #[tokio::test]
    async fn test_cancel_clears_selection() -> anyhow::Result<()> {
        let (service, store) = service();
        service.select(slot(9, 2)).await?;
        service.select(slot(9, 2)).await?;

        assert_eq!(service.cancel().await, Some(slot(9, 2)));
        assert_eq!(service.pending().await, None);
        assert!(matches!(
            service.confirm("Dr. Lee", Frequency::Eventual).await,
            Err(BookingError::NoPendingSelection)
        ));
        assert!(store.all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_overlapping_bookings_are_both_stored() -> anyhow::Result<()> {
        let (service, store) = service();
        for name in ["Dr. Lee", "Dr. Pérez"] {
            service.select(slot(9, 2)).await?;
            service.select(slot(9, 2)).await?;
            service.confirm(name, Frequency::Eventual).await?;
        }

        let ids: Vec<String> = store.all().await?.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["reservation::000001", "reservation::000002"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_selection() -> anyhow::Result<()> {
        let service = BookingService::new(Arc::new(FailingStore), RoomRegistry::default());
        service.select(slot(9, 2)).await?;
        service.select(slot(9, 2)).await?;

        let result = service.confirm("Dr. Lee", Frequency::Eventual).await;
        assert!(matches!(result, Err(BookingError::Storage(_))));
        assert!(service.current_selection().await.dialog_open);
        Ok(())
    }
}
