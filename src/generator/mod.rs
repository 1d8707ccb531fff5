//! Text output generator module.

mod text_map;

pub use text_map::{generate_legend, generate_text_map};
