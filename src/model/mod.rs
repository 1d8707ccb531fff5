//! Data model types for seat maps.

mod field;
mod seat;
mod status;

pub use field::{FieldSnapshot, SeatField, ToggleOutcome, MAX_DIMENSION};
pub use seat::{Seat, SeatPos};
pub use status::SeatStatus;
