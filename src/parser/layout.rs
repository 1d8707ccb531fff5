//! Seat layout string parser.
//!
//! A layout is a sequence of rows separated by `/` or newlines. Each
//! character in a row is one grid cell:
//!
//! | Glyph | Cell |
//! |-------|------|
//! | `A` | free seat |
//! | `U` | ordered seat |
//! | `R` | issued seat |
//! | `S` | not-available seat |
//! | `E` | empty seat |
//! | `X` | selected seat |
//! | `_` | gap (no seat) |
//!
//! Spaces and tabs are ignored. Rows that contain no cells are skipped.

use crate::error::{Result, SeatError};
use crate::model::{Seat, SeatField, SeatStatus};
use std::path::Path;
use tracing::debug;

/// Gap glyph: a cell with no seat.
pub const GAP: char = '_';

/// Row separator in single-line layouts.
pub const ROW_SEPARATOR: char = '/';

/// Values applied to every parsed seat.
#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    /// Price for every seat.
    pub price: f64,
    /// Info text for every seat.
    pub info: String,
}

impl LayoutOptions {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            ..Default::default()
        }
    }
}

/// Parse a layout file into a seat field.
pub fn parse_layout_file(path: &Path, options: &LayoutOptions) -> Result<SeatField> {
    if !path.exists() {
        return Err(SeatError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(SeatError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_layout(&content, options)
}

/// Parse layout text into a seat field.
///
/// The grid has one row per non-empty layout row and as many columns as the
/// longest row. Display rows are numbered from 1 by grid row; places are
/// numbered from 1 by seat within the row, skipping gaps.
pub fn parse_layout(content: &str, options: &LayoutOptions) -> Result<SeatField> {
    let mut seats = Vec::new();
    let mut rows: u32 = 0;
    let mut columns: u32 = 0;

    let lines = content
        .split(|c: char| c == '\n' || c == ROW_SEPARATOR)
        .map(|line| line.trim_end_matches('\r'));

    for (line_idx, line) in lines.enumerate() {
        let mut x: u32 = 0;
        let mut place: u32 = 0;

        for (col_idx, c) in line.chars().enumerate() {
            if c == ' ' || c == '\t' {
                continue;
            }

            if c != GAP {
                let status = SeatStatus::from_glyph(c).ok_or(SeatError::InvalidLayoutChar {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    ch: c,
                })?;
                place += 1;
                seats.push(
                    Seat::new(x as i32, rows as i32, rows + 1, place, options.price, status)
                        .with_info(options.info.clone()),
                );
            }
            x += 1;
        }

        if x > 0 {
            rows += 1;
            columns = columns.max(x);
        }
    }

    debug!("Parsed layout: {} rows, {} columns, {} seats", rows, columns, seats.len());

    SeatField::new(rows, columns, seats)
}
