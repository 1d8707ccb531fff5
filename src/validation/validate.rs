//! Consistency checks over a constructed seat field.
//!
//! Hard invariants (bounds, unique positions, valid prices) are enforced by
//! [`SeatField::new`]. The checks here cover what a field can legally hold
//! but a ticket desk would still reject or want flagged.

use crate::model::{SeatField, SeatStatus};
use std::collections::HashMap;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Validate a seat field.
pub fn validate_field(field: &SeatField) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if field.is_empty() {
        result.add_warning(format!(
            "Field {}x{}: No seats defined",
            field.columns(),
            field.rows()
        ));
        return result;
    }

    // Display numbering must identify a seat unambiguously
    let mut numbering: HashMap<(u32, u32), (i32, i32)> = HashMap::new();
    let mut zero_priced = 0usize;
    for seat in field.seats() {
        if let Some(&(x, y)) = numbering.get(&(seat.row, seat.place)) {
            result.add_error(format!(
                "Seats ({}, {}) and ({}, {}) are both numbered {}",
                x,
                y,
                seat.x,
                seat.y,
                seat.label()
            ));
        } else {
            numbering.insert((seat.row, seat.place), (seat.x, seat.y));
        }

        if seat.row == 0 || seat.place == 0 {
            result.add_warning(format!(
                "Seat ({}, {}): Display numbering should start at 1, got {}",
                seat.x,
                seat.y,
                seat.label()
            ));
        }

        if seat.status == SeatStatus::Free && seat.price == 0.0 {
            zero_priced += 1;
        }
    }

    if zero_priced > 0 {
        result.add_warning(format!("{} free seat(s) have zero price", zero_priced));
    }

    if !field.seats().iter().any(|s| s.is_selectable()) {
        result.add_warning("No selectable seats");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Seat;

    fn seat(x: i32, y: i32, status: SeatStatus) -> Seat {
        Seat::new(x, y, y as u32 + 1, x as u32 + 1, 10.0, status)
    }

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_add_error() {
        let mut result = ValidationResult::ok();
        result.add_warning("This is a warning");
        assert!(result.passed); // Warnings don't fail validation
        result.add_error("This is an error");
        assert!(!result.passed);
    }

    #[test]
    fn test_validate_clean_field() {
        let field = SeatField::new(
            1,
            2,
            vec![seat(0, 0, SeatStatus::Free), seat(1, 0, SeatStatus::Ordered)],
        )
        .unwrap();
        let result = validate_field(&field);
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_empty_field() {
        let field = SeatField::empty(5, 5).unwrap();
        let result = validate_field(&field);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validate_duplicate_numbering() {
        let mut a = seat(0, 0, SeatStatus::Free);
        let mut b = seat(1, 0, SeatStatus::Free);
        a.place = 3;
        b.place = 3;
        let field = SeatField::new(1, 2, vec![a, b]).unwrap();

        let result = validate_field(&field);
        assert!(!result.passed);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("row 1, place 3"));
    }

    #[test]
    fn test_validate_warnings() {
        let mut zero = seat(0, 0, SeatStatus::Free);
        zero.price = 0.0;
        let mut unnumbered = seat(1, 0, SeatStatus::Issued);
        unnumbered.place = 0;
        let field = SeatField::new(1, 2, vec![zero, unnumbered]).unwrap();

        let result = validate_field(&field);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_validate_zero_prices_reported_once() {
        let seats = (0..4)
            .map(|x| {
                let mut s = seat(x, 0, SeatStatus::Free);
                s.price = 0.0;
                s
            })
            .collect();
        let field = SeatField::new(1, 4, seats).unwrap();

        let result = validate_field(&field);
        assert!(result.passed);
        assert_eq!(result.warnings, vec!["4 free seat(s) have zero price".to_string()]);
    }

    #[test]
    fn test_validate_no_selectable_seats() {
        let field = SeatField::new(1, 1, vec![seat(0, 0, SeatStatus::Issued)]).unwrap();
        let result = validate_field(&field);
        assert!(result.passed);
        assert_eq!(result.warnings, vec!["No selectable seats".to_string()]);
    }
}
