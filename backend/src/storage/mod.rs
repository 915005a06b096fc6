//! # Storage Module
//!
//! Holds reservation records for the running session.
//!
//! The domain layer only sees the [`ReservationStore`] trait, so the in-memory
//! store can be replaced by a persistent backend without touching the selection
//! or booking logic. Nothing is written to disk; all reservations are lost when
//! the process exits.

pub mod memory;
pub mod traits;

pub use memory::InMemoryReservationStore;
pub use traits::ReservationStore;
