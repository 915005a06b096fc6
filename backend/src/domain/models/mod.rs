pub mod reservation;
pub mod room;
pub mod selection;

pub use reservation::{BookingError, Reservation};
pub use room::Room;
pub use selection::{PendingSelection, SlotValidationError};
