use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use tracing::debug;

use super::traits::ReservationStore;
use crate::domain::models::Reservation;

/// Session-scoped reservation store backed by a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryReservationStore {
    reservations: Arc<RwLock<Vec<Reservation>>>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn append(&self, reservation: Reservation) -> Result<()> {
        let mut reservations = self
            .reservations
            .write()
            .map_err(|_| anyhow!("Reservation store lock poisoned"))?;
        debug!(
            "Appending reservation {} at position {}",
            reservation.id,
            reservations.len()
        );
        reservations.push(reservation);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Reservation>> {
        let reservations = self
            .reservations
            .read()
            .map_err(|_| anyhow!("Reservation store lock poisoned"))?;
        Ok(reservations.clone())
    }
}
