//! Seat layout parser module.

mod layout;

pub use layout::{parse_layout, parse_layout_file, LayoutOptions, GAP, ROW_SEPARATOR};
