//! # Storage Traits
//!
//! Storage abstraction used by the booking flow and the reservation views.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Reservation;

/// Ordered, append-only collection of reservations.
///
/// Implementations must keep insertion order and must not deduplicate or
/// reject overlapping reservations.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Add a reservation to the end of the collection
    async fn append(&self, reservation: Reservation) -> Result<()>;

    /// Snapshot of every reservation in insertion order.
    ///
    /// Later appends are not reflected in a snapshot already returned.
    async fn all(&self) -> Result<Vec<Reservation>>;
}
