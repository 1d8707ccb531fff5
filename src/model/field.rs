//! SeatField - the seat grid and its selection state machine.

use super::{Seat, SeatPos, SeatStatus};
use crate::error::{Result, SeatError};
use crate::events::{ListenerSet, SeatListener};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use tracing::{debug, info};

/// Largest grid bound. Seat coordinates are `i32`, so no seat can lie beyond it.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Result of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// No seat at the requested position.
    NotFound,
    /// The seat exists but is not selectable.
    Unchanged(SeatStatus),
    /// Status flipped between `Free` and `Selected`.
    Changed { from: SeatStatus, to: SeatStatus },
}

impl ToggleOutcome {
    /// Check if a status changed.
    pub fn is_changed(&self) -> bool {
        matches!(self, ToggleOutcome::Changed { .. })
    }
}

/// Fixed-size seat grid with change listeners.
///
/// Seats are identified by their grid position. The collection is fixed at
/// construction; only seat status changes afterwards, and only through
/// [`SeatField::toggle_selection`].
#[derive(Debug)]
pub struct SeatField {
    rows: u32,
    columns: u32,
    /// Seats in construction order.
    seats: Vec<Seat>,
    /// Position -> index into `seats`.
    index: HashMap<SeatPos, usize>,
    listeners: ListenerSet,
}

/// Serializable view of a field (for debug output).
#[derive(Debug, Clone, Serialize)]
pub struct FieldSnapshot {
    pub rows: u32,
    pub columns: u32,
    pub seats: Vec<Seat>,
    pub selected: Vec<SeatPos>,
    pub selected_total: f64,
}

impl SeatField {
    /// Build a field from its bounds and full seat list.
    ///
    /// Fails if a bound is zero or above [`MAX_DIMENSION`], a seat lies
    /// outside `[0, columns) x [0, rows)`, two seats share a position, or a
    /// price is negative or not finite.
    pub fn new(rows: u32, columns: u32, seats: Vec<Seat>) -> Result<Self> {
        if rows == 0 || columns == 0 || rows > MAX_DIMENSION || columns > MAX_DIMENSION {
            return Err(SeatError::InvalidDimensions { rows, columns });
        }

        let mut index = HashMap::with_capacity(seats.len());
        for (i, seat) in seats.iter().enumerate() {
            if !in_bounds(seat.x, seat.y, rows, columns) {
                return Err(SeatError::OutOfBounds {
                    x: seat.x,
                    y: seat.y,
                    columns,
                    rows,
                });
            }
            if !seat.price.is_finite() || seat.price < 0.0 {
                return Err(SeatError::InvalidPrice {
                    x: seat.x,
                    y: seat.y,
                    price: seat.price,
                });
            }
            if index.insert(seat.pos(), i).is_some() {
                return Err(SeatError::DuplicatePosition {
                    x: seat.x,
                    y: seat.y,
                });
            }
        }

        info!("Seat field {}x{} with {} seat(s)", columns, rows, seats.len());

        Ok(Self {
            rows,
            columns,
            seats,
            index,
            listeners: ListenerSet::new(),
        })
    }

    /// Build a field with no seats.
    pub fn empty(rows: u32, columns: u32) -> Result<Self> {
        Self::new(rows, columns, Vec::new())
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// All seats in construction order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Seat at grid position `(x, y)`, if any. Out-of-range coordinates yield `None`.
    pub fn find_seat_at(&self, x: i32, y: i32) -> Option<&Seat> {
        if !in_bounds(x, y, self.rows, self.columns) {
            return None;
        }
        self.seat(SeatPos::new(x, y))
    }

    /// Seat at a position, if any.
    pub fn seat(&self, pos: SeatPos) -> Option<&Seat> {
        self.index.get(&pos).map(|&i| &self.seats[i])
    }

    /// Check whether a seat is present at `pos`.
    pub fn contains(&self, pos: SeatPos) -> bool {
        self.index.contains_key(&pos)
    }

    /// Flip the seat at `pos` between `Free` and `Selected`.
    ///
    /// Listeners are notified only when the status actually changed. Missing
    /// seats and non-selectable seats are silent no-ops.
    pub fn toggle_selection(&mut self, pos: SeatPos) -> ToggleOutcome {
        let Some(&i) = self.index.get(&pos) else {
            debug!("Toggle at {}: no seat", pos);
            return ToggleOutcome::NotFound;
        };

        let seat = &mut self.seats[i];
        let from = seat.status;
        let Some(to) = from.toggled() else {
            debug!("Toggle at {}: {} seat is not selectable", pos, from);
            return ToggleOutcome::Unchanged(from);
        };
        seat.status = to;

        debug!("Toggle at {}: {} -> {}", pos, from, to);
        self.listeners.notify(&self.seats[i]);

        ToggleOutcome::Changed { from, to }
    }

    /// Toggle the seat sharing `seat`'s position.
    pub fn toggle_seat(&mut self, seat: &Seat) -> ToggleOutcome {
        self.toggle_selection(seat.pos())
    }

    /// Register a change listener. Returns `false` if already registered.
    pub fn add_listener(&mut self, listener: Rc<dyn SeatListener>) -> bool {
        let added = self.listeners.subscribe(listener);
        debug!(added, count = self.listeners.len(), "Add listener");
        added
    }

    /// Remove a change listener. Returns `false` if it was not registered.
    pub fn remove_listener<L: SeatListener + ?Sized>(&mut self, listener: &Rc<L>) -> bool {
        let removed = self.listeners.unsubscribe(listener);
        debug!(removed, count = self.listeners.len(), "Remove listener");
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Currently selected seats in construction order.
    pub fn selected_seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| s.is_selected())
    }

    /// Sum of the prices of all selected seats.
    pub fn selected_total(&self) -> f64 {
        self.selected_seats().map(|s| s.price).sum()
    }

    /// Number of seats per status. Statuses with no seats are omitted.
    pub fn status_counts(&self) -> BTreeMap<SeatStatus, usize> {
        let mut counts = BTreeMap::new();
        for seat in &self.seats {
            *counts.entry(seat.status).or_insert(0) += 1;
        }
        counts
    }

    /// Copy the field state into a serializable snapshot.
    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            rows: self.rows,
            columns: self.columns,
            seats: self.seats.clone(),
            selected: self.selected_seats().map(Seat::pos).collect(),
            selected_total: self.selected_total(),
        }
    }
}

fn in_bounds(x: i32, y: i32, rows: u32, columns: u32) -> bool {
    x >= 0 && y >= 0 && (x as u32) < columns && (y as u32) < rows
}
