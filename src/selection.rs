//! Positional selection tracking driven by field notifications.

use crate::events::SeatListener;
use crate::model::{Seat, SeatField, SeatPos};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Keeps the set of selected seat positions in sync with a field.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    selected: RefCell<BTreeSet<SeatPos>>,
}

impl SelectionTracker {
    /// Create a tracker seeded with the field's current selection and register it.
    pub fn attach(field: &mut SeatField) -> Rc<Self> {
        let tracker = Rc::new(Self {
            selected: RefCell::new(field.selected_seats().map(Seat::pos).collect()),
        });
        field.add_listener(tracker.clone());
        tracker
    }

    /// Selected positions, ordered by column then row.
    pub fn positions(&self) -> Vec<SeatPos> {
        self.selected.borrow().iter().copied().collect()
    }

    pub fn contains(&self, pos: SeatPos) -> bool {
        self.selected.borrow().contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.selected.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.borrow().is_empty()
    }
}

impl SeatListener for SelectionTracker {
    fn on_seat_changed(&self, seat: &Seat) {
        let mut selected = self.selected.borrow_mut();
        if seat.is_selected() {
            selected.insert(seat.pos());
        } else {
            selected.remove(&seat.pos());
        }
    }
}
