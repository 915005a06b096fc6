//! # Domain Module
//!
//! Business rules of the consulting room scheduler, independent of HTTP.
//!
//! - **Room Registry**: the fixed set of bookable rooms
//! - **Slot Selector**: two-click select/confirm state machine
//! - **Booking Form**: practitioner name validation and reservation construction
//! - **Booking Service**: runs the flow from gesture to stored reservation
//! - **Reservation View**: room/month/day/week filters and the history table
//! - **Calendar**: week and day grids for the renderer

pub mod booking_form;
pub mod booking_service;
pub mod calendar;
pub mod id_generator;
pub mod models;
pub mod reservation_view;
pub mod room_registry;
pub mod slot_selector;

pub use booking_form::BookingForm;
pub use booking_service::{BookingService, SelectResult, SelectionSnapshot};
pub use calendar::{CalendarService, CalendarViewConfig};
pub use id_generator::{ReservationIdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use reservation_view::{ReservationViewService, RoomFilter};
pub use room_registry::RoomRegistry;
pub use slot_selector::{SelectorState, SlotSelector};
