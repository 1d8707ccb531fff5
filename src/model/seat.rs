//! Seat definition representing a single cell of the grid.

use super::SeatStatus;
use serde::{Deserialize, Serialize};

/// Zero-based grid position. The identity key of a seat within its field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct SeatPos {
    pub x: i32,
    pub y: i32,
}

impl SeatPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for SeatPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single seat positioned on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Grid column (zero-based).
    pub x: i32,
    /// Grid row (zero-based).
    pub y: i32,
    /// Display row number shown to the user (one-based).
    pub row: u32,
    /// Display place number within the row (one-based).
    pub place: u32,
    /// Free-form metadata.
    pub info: String,
    /// Ticket price.
    pub price: f64,
    /// Current booking status.
    pub status: SeatStatus,
}

impl Seat {
    /// Create a new seat with empty info.
    pub fn new(x: i32, y: i32, row: u32, place: u32, price: f64, status: SeatStatus) -> Self {
        Self {
            x,
            y,
            row,
            place,
            info: String::new(),
            price,
            status,
        }
    }

    /// Attach metadata.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    /// Grid position of this seat.
    pub fn pos(&self) -> SeatPos {
        SeatPos::new(self.x, self.y)
    }

    /// Check if the user may toggle this seat.
    pub fn is_selectable(&self) -> bool {
        self.status.is_selectable()
    }

    /// Check if the seat is currently selected.
    pub fn is_selected(&self) -> bool {
        self.status == SeatStatus::Selected
    }

    /// Label for display, e.g. "row 3, place 12".
    pub fn label(&self) -> String {
        format!("row {}, place {}", self.row, self.place)
    }
}
