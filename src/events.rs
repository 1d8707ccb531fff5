//! Change notification for seat fields.
//!
//! Listeners are shared as `Rc<dyn SeatListener>` and identified by pointer,
//! so the same instance can only be registered once. Notification runs
//! synchronously on the calling thread; a panicking listener unwinds into the
//! caller of the mutating operation.

use crate::model::Seat;
use std::fmt;
use std::rc::Rc;

/// Receiver of seat status changes.
pub trait SeatListener {
    /// Called after `seat` changed status.
    fn on_seat_changed(&self, seat: &Seat);
}

impl<F> SeatListener for F
where
    F: Fn(&Seat),
{
    fn on_seat_changed(&self, seat: &Seat) {
        self(seat)
    }
}

/// Set of registered listeners without duplicates.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Rc<dyn SeatListener>>,
}

/// Address of the listener, ignoring vtable metadata.
fn listener_addr<L: SeatListener + ?Sized>(listener: &Rc<L>) -> *const () {
    Rc::as_ptr(listener) as *const ()
}

impl ListenerSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Returns `false` if it was already present.
    pub fn subscribe(&mut self, listener: Rc<dyn SeatListener>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Remove a listener. Returns `false` if it was not present.
    pub fn unsubscribe<L: SeatListener + ?Sized>(&mut self, listener: &Rc<L>) -> bool {
        let addr = listener_addr(listener);
        let before = self.listeners.len();
        self.listeners.retain(|l| listener_addr(l) != addr);
        self.listeners.len() != before
    }

    /// Check whether a listener is registered.
    pub fn contains<L: SeatListener + ?Sized>(&self, listener: &Rc<L>) -> bool {
        let addr = listener_addr(listener);
        self.listeners.iter().any(|l| listener_addr(l) == addr)
    }

    /// Invoke every listener with `seat`.
    pub fn notify(&self, seat: &Seat) {
        for listener in &self.listeners {
            listener.on_seat_changed(seat);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.listeners.len())
            .finish()
    }
}
