//! Seat status and its selection transitions.

use serde::{Deserialize, Serialize};

/// Booking state of a single seat.
///
/// Exactly one status holds per seat. Only `Free` and `Selected` are
/// user-selectable; every other status is fixed from the field's point of view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum SeatStatus {
    /// Placeholder cell with no seat to sell.
    Empty,
    /// Available for selection.
    #[default]
    Free,
    /// Picked by the user in the current session.
    Selected,
    /// Booked, not yet issued.
    Ordered,
    /// Ticket issued.
    Issued,
    /// Blocked from sale.
    NotAvailable,
}

impl SeatStatus {
    /// All statuses in declaration order.
    pub const ALL: [SeatStatus; 6] = [
        SeatStatus::Empty,
        SeatStatus::Free,
        SeatStatus::Selected,
        SeatStatus::Ordered,
        SeatStatus::Issued,
        SeatStatus::NotAvailable,
    ];

    /// Status after a selection toggle, or `None` if the seat is not selectable.
    pub fn toggled(self) -> Option<SeatStatus> {
        match self {
            SeatStatus::Free => Some(SeatStatus::Selected),
            SeatStatus::Selected => Some(SeatStatus::Free),
            SeatStatus::Empty
            | SeatStatus::Ordered
            | SeatStatus::Issued
            | SeatStatus::NotAvailable => None,
        }
    }

    /// Check if the user may toggle this seat.
    pub fn is_selectable(self) -> bool {
        self.toggled().is_some()
    }

    /// Single-character glyph used by text layouts.
    pub fn glyph(self) -> char {
        match self {
            SeatStatus::Empty => 'E',
            SeatStatus::Free => 'A',
            SeatStatus::Selected => 'X',
            SeatStatus::Ordered => 'U',
            SeatStatus::Issued => 'R',
            SeatStatus::NotAvailable => 'S',
        }
    }

    /// Parse a layout glyph.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            'E' => Some(SeatStatus::Empty),
            'A' => Some(SeatStatus::Free),
            'X' => Some(SeatStatus::Selected),
            'U' => Some(SeatStatus::Ordered),
            'R' => Some(SeatStatus::Issued),
            'S' => Some(SeatStatus::NotAvailable),
            _ => None,
        }
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatStatus::Empty => write!(f, "empty"),
            SeatStatus::Free => write!(f, "free"),
            SeatStatus::Selected => write!(f, "selected"),
            SeatStatus::Ordered => write!(f, "ordered"),
            SeatStatus::Issued => write!(f, "issued"),
            SeatStatus::NotAvailable => write!(f, "not available"),
        }
    }
}
