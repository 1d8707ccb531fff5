//! Configuration constants and settings for seat maps.

/// Default number of grid rows for sample fields.
pub const DEFAULT_ROWS: u32 = 44;

/// Default number of grid columns for sample fields.
pub const DEFAULT_COLUMNS: u32 = 44;

/// Upper bound (exclusive) for randomly generated prices.
pub const MAX_SAMPLE_PRICE: u32 = 1_000_000;

/// Preferred cell edge length in pixels when measuring.
pub const DESIRED_CELL_SIZE: f32 = 10.0;

/// Cell inset as a fraction of the cell size.
pub const CELL_PADDING_RATIO: f32 = 0.2;

/// Price used by the preview field.
pub const PREVIEW_PRICE: f64 = 100.0;

/// Info text attached to sample seats.
pub const SAMPLE_INFO: &str = "sample";

/// Pixel geometry settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Preferred cell edge length in pixels.
    pub desired_cell_size: f32,
    /// Cell inset as a fraction of the cell size.
    pub cell_padding_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            desired_cell_size: DESIRED_CELL_SIZE,
            cell_padding_ratio: CELL_PADDING_RATIO,
        }
    }
}

impl LayoutConfig {
    /// Create a layout configuration with a custom cell size.
    pub fn new(desired_cell_size: f32) -> Self {
        Self {
            desired_cell_size,
            ..Default::default()
        }
    }
}

/// Settings for randomly generated fields.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Grid rows.
    pub rows: u32,
    /// Grid columns.
    pub columns: u32,
    /// Upper bound (exclusive) for prices.
    pub max_price: u32,
    /// Info text for every seat.
    pub info: String,
    /// Fixed seed for reproducible fields.
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            max_price: MAX_SAMPLE_PRICE,
            info: SAMPLE_INFO.to_string(),
            seed: None,
        }
    }
}

impl SampleConfig {
    /// Create a sample configuration for a grid size.
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            ..Default::default()
        }
    }

    /// Set a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    /// Pixel comparison epsilon.
    pub const EPS: f32 = 0.0001;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }
}
