//! Cell geometry for drawing a seat field and resolving taps to seats.
//!
//! Pixel space has its origin at the top-left with Y increasing downward;
//! grid row 0 is the top row.

use crate::config::LayoutConfig;
use crate::model::{Seat, SeatField, SeatPos, MAX_DIMENSION};

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle at the origin with the given size.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Half-open containment: left/top edges inside, right/bottom outside.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left && px < self.right && py >= self.top && py < self.bottom
    }

    /// Shrink by padding on each side.
    pub fn inset(&self, padding: &Padding) -> Self {
        Self::new(
            self.left + padding.left,
            self.top + padding.top,
            self.right - padding.right,
            self.bottom - padding.bottom,
        )
    }
}

/// Padding around the drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    /// Same padding on every side.
    pub fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Square-cell grid placed inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Area covered by the grid, centered in the viewport.
    pub field_rect: Rect,
    /// Edge length of one cell.
    pub cell_size: f32,
    /// Inset applied to each side of a cell when drawing it.
    pub cell_padding: f32,
    pub rows: u32,
    pub columns: u32,
}

impl GridLayout {
    /// Preferred view size (width, height) for a grid at the configured cell size.
    pub fn desired_size(
        rows: u32,
        columns: u32,
        config: &LayoutConfig,
        padding: &Padding,
    ) -> (f32, f32) {
        (
            columns as f32 * config.desired_cell_size + padding.horizontal(),
            rows as f32 * config.desired_cell_size + padding.vertical(),
        )
    }

    /// Fit the largest square cells into `viewport` and center the grid.
    ///
    /// A degenerate viewport or grid yields a zero cell size, for which every
    /// hit test misses.
    pub fn fit(viewport: Rect, rows: u32, columns: u32, config: &LayoutConfig) -> Self {
        let width = viewport.width().max(0.0);
        let height = viewport.height().max(0.0);

        let usable = |n: u32| n > 0 && n <= MAX_DIMENSION;
        let cell_size = if usable(rows) && usable(columns) {
            (width / columns as f32).min(height / rows as f32)
        } else {
            0.0
        };

        let field_width = cell_size * columns as f32;
        let field_height = cell_size * rows as f32;
        let left = viewport.left + (width - field_width) / 2.0;
        let top = viewport.top + (height - field_height) / 2.0;

        Self {
            field_rect: Rect::new(left, top, left + field_width, top + field_height),
            cell_size,
            cell_padding: cell_size * config.cell_padding_ratio,
            rows,
            columns,
        }
    }

    /// Fit a grid sized for `field` into `viewport`.
    pub fn for_field(viewport: Rect, field: &SeatField, config: &LayoutConfig) -> Self {
        Self::fit(viewport, field.rows(), field.columns(), config)
    }

    /// Drawing rectangle of a cell, inset by the cell padding.
    pub fn cell_rect(&self, pos: SeatPos) -> Rect {
        let left = self.field_rect.left + pos.x as f32 * self.cell_size + self.cell_padding;
        let top = self.field_rect.top + pos.y as f32 * self.cell_size + self.cell_padding;
        Rect::new(
            left,
            top,
            left + self.cell_size - self.cell_padding * 2.0,
            top + self.cell_size - self.cell_padding * 2.0,
        )
    }

    /// Grid cell under a pixel, or `None` outside the grid.
    pub fn cell_at(&self, px: f32, py: f32) -> Option<SeatPos> {
        if self.cell_size <= 0.0 || !self.field_rect.contains(px, py) {
            return None;
        }

        let x = ((px - self.field_rect.left) / self.cell_size).floor() as i32;
        let y = ((py - self.field_rect.top) / self.cell_size).floor() as i32;

        // Float rounding at the far edge can land one past the last cell.
        let x = x.min(self.columns as i32 - 1);
        let y = y.min(self.rows as i32 - 1);

        Some(SeatPos::new(x, y))
    }

    /// Seat under a pixel, if the cell holds one.
    pub fn hit_test<'a>(&self, field: &'a SeatField, px: f32, py: f32) -> Option<&'a Seat> {
        self.cell_at(px, py).and_then(|pos| field.seat(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::model::SeatStatus;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn test_desired_size() {
        let (w, h) = GridLayout::desired_size(4, 5, &config(), &Padding::uniform(8.0));
        assert!(approx_eq(w, 66.0));
        assert!(approx_eq(h, 56.0));
    }

    #[test]
    fn test_fit_centers_square_cells() {
        // 5 columns x 2 rows in a 200x200 view: cells are 40px, grid 200x80.
        let layout = GridLayout::fit(Rect::from_size(200.0, 200.0), 2, 5, &config());
        assert!(approx_eq(layout.cell_size, 40.0));
        assert!(approx_eq(layout.cell_padding, 8.0));
        assert!(approx_eq(layout.field_rect.left, 0.0));
        assert!(approx_eq(layout.field_rect.top, 60.0));
        assert!(approx_eq(layout.field_rect.height(), 80.0));
    }

    #[test]
    fn test_fit_respects_viewport_offset() {
        let viewport = Rect::from_size(120.0, 100.0).inset(&Padding::uniform(10.0));
        let layout = GridLayout::fit(viewport, 4, 4, &config());
        assert!(approx_eq(layout.cell_size, 20.0));
        assert!(approx_eq(layout.field_rect.left, 20.0));
        assert!(approx_eq(layout.field_rect.top, 10.0));
    }

    #[test]
    fn test_cell_rect_is_inset_on_all_sides() {
        let layout = GridLayout::fit(Rect::from_size(100.0, 100.0), 10, 10, &config());
        let rect = layout.cell_rect(SeatPos::new(2, 3));
        assert!(approx_eq(rect.left, 22.0));
        assert!(approx_eq(rect.top, 32.0));
        assert!(approx_eq(rect.right, 28.0));
        assert!(approx_eq(rect.bottom, 38.0));
    }

    #[test]
    fn test_cell_at() {
        let layout = GridLayout::fit(Rect::from_size(100.0, 100.0), 10, 10, &config());
        assert_eq!(layout.cell_at(0.0, 0.0), Some(SeatPos::new(0, 0)));
        assert_eq!(layout.cell_at(25.0, 99.9), Some(SeatPos::new(2, 9)));
        assert_eq!(layout.cell_at(100.0, 50.0), None);
        assert_eq!(layout.cell_at(-0.1, 50.0), None);
    }

    #[test]
    fn test_degenerate_layout_never_hits() {
        let layout = GridLayout::fit(Rect::from_size(0.0, 0.0), 3, 3, &config());
        assert_eq!(layout.cell_at(0.0, 0.0), None);

        let layout = GridLayout::fit(Rect::from_size(100.0, 100.0), 0, 0, &config());
        assert_eq!(layout.cell_at(50.0, 50.0), None);

        let layout = GridLayout::fit(Rect::from_size(100.0, 100.0), 1, u32::MAX, &config());
        assert_eq!(layout.cell_at(50.0, 50.0), None);
    }

    #[test]
    fn test_hit_test_sparse_field() {
        let field = SeatField::new(
            2,
            2,
            vec![Seat::new(1, 1, 2, 1, 5.0, SeatStatus::Free)],
        )
        .unwrap();
        let layout = GridLayout::for_field(Rect::from_size(20.0, 20.0), &field, &config());

        assert_eq!(layout.hit_test(&field, 15.0, 15.0).map(Seat::pos), Some(SeatPos::new(1, 1)));
        assert!(layout.hit_test(&field, 5.0, 5.0).is_none());
    }
}
