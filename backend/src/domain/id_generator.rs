//! Reservation id generation.
//!
//! Ids look like `reservation::<suffix>`. Production uses random UUIDs; tests
//! use the sequential generator to get predictable ids.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

pub trait ReservationIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl ReservationIdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        format!("reservation::{}", Uuid::new_v4())
    }
}

/// Monotonic ids starting at 1
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationIdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let next = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("reservation::{:06}", next)
    }
}
