//! Text map generation for seat fields.

use crate::model::{SeatField, SeatPos, SeatStatus};
use crate::parser::GAP;
use std::fmt::Write;

/// Render the field as one line of glyphs per grid row.
///
/// Uses the same glyphs as the layout parser, so the output parses back into
/// a field with identical positions and statuses.
pub fn generate_text_map(field: &SeatField) -> String {
    let mut output = String::new();

    for y in 0..field.rows() as i32 {
        for x in 0..field.columns() as i32 {
            let glyph = field
                .seat(SeatPos::new(x, y))
                .map_or(GAP, |seat| seat.status.glyph());
            output.push(glyph);
        }
        output.push('\n');
    }

    output
}

/// Glyph legend with per-status seat counts.
pub fn generate_legend(field: &SeatField) -> String {
    let counts = field.status_counts();
    let mut output = String::new();

    for status in SeatStatus::ALL {
        let count = counts.get(&status).copied().unwrap_or(0);
        writeln!(output, "{}  {:<14}{}", status.glyph(), status.to_string(), count).unwrap();
    }
    writeln!(output, "{}  no seat", GAP).unwrap();

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Seat;
    use crate::parser::{parse_layout, LayoutOptions};

    #[test]
    fn test_text_map_snapshot() {
        let field = SeatField::new(
            2,
            3,
            vec![
                Seat::new(0, 0, 1, 1, 0.0, SeatStatus::Free),
                Seat::new(2, 0, 1, 2, 0.0, SeatStatus::Ordered),
                Seat::new(1, 1, 2, 1, 0.0, SeatStatus::NotAvailable),
            ],
        )
        .unwrap();

        insta::assert_snapshot!(generate_text_map(&field), @r"
        A_U
        _S_
        ");
    }

    #[test]
    fn test_text_map_reflects_toggle() {
        let mut field = parse_layout("AAR", &LayoutOptions::default()).unwrap();
        field.toggle_selection(SeatPos::new(1, 0));
        assert_eq!(generate_text_map(&field), "AXR\n");
    }

    #[test]
    fn test_text_map_parses_back() {
        let layout = "AUR_\nSEX_\n__AA\n";
        let field = parse_layout(layout, &LayoutOptions::default()).unwrap();
        assert_eq!(generate_text_map(&field), layout);
    }

    #[test]
    fn test_legend_counts() {
        let field = parse_layout("AAU_", &LayoutOptions::default()).unwrap();
        let legend = generate_legend(&field);
        let lines: Vec<&str> = legend.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "A  free          2");
        assert_eq!(lines[3], "U  ordered       1");
        assert_eq!(lines[6], "_  no seat");
    }
}
