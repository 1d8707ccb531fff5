//! seatmap - Seat map model with selection toggling and hit-testing.
//!
//! A [`SeatField`] owns a fixed grid of [`Seat`]s and a set of change
//! listeners. The only mutation is [`SeatField::toggle_selection`], which flips
//! a seat between free and selected and notifies listeners synchronously.
//! [`GridLayout`] maps pixels to grid cells so a host view can turn a tap
//! into a toggle.
//!
//! # Example
//!
//! ```
//! use seatmap::{parse_layout, LayoutOptions, SeatPos, SelectionTracker, ToggleOutcome};
//!
//! let mut field = parse_layout("AAU/A_R", &LayoutOptions::new(120.0)).unwrap();
//! let selection = SelectionTracker::attach(&mut field);
//!
//! assert!(field.toggle_selection(SeatPos::new(1, 0)).is_changed());
//! assert!(matches!(
//!     field.toggle_selection(SeatPos::new(2, 0)),
//!     ToggleOutcome::Unchanged(_)
//! ));
//! assert_eq!(selection.positions(), vec![SeatPos::new(1, 0)]);
//! assert_eq!(field.selected_total(), 120.0);
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod generator;
pub mod layout;
pub mod model;
pub mod parser;
pub mod sample;
pub mod selection;
pub mod validation;

// Re-exports for convenience
pub use config::{LayoutConfig, SampleConfig};
pub use error::{ErrorCode, Result, SeatError};
pub use events::{ListenerSet, SeatListener};
pub use generator::{generate_legend, generate_text_map};
pub use layout::{GridLayout, Padding, Rect};
pub use model::{
    FieldSnapshot, Seat, SeatField, SeatPos, SeatStatus, ToggleOutcome, MAX_DIMENSION,
};
pub use parser::{parse_layout, parse_layout_file, LayoutOptions};
pub use sample::{preview_field, random_field};
pub use selection::SelectionTracker;
pub use validation::{validate_field, ValidationResult};
