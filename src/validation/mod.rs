//! Seat field validation module.

mod validate;

pub use validate::{validate_field, ValidationResult};
