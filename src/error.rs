//! Error types for seat map construction and layout parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for seat map processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Layout parse error (-3)
    ParseError = -3,
    /// Zero-sized grid (E100)
    InvalidDimensions = 100,
    /// Seat outside the grid (E101)
    OutOfBounds = 101,
    /// Two seats on one cell (E102)
    DuplicatePosition = 102,
    /// Negative or non-finite price (E103)
    InvalidPrice = 103,
}

/// Main error type for seat map operations.
#[derive(Debug, Error)]
pub enum SeatError {
    #[error("Invalid grid dimensions: {rows} rows x {columns} columns")]
    InvalidDimensions { rows: u32, columns: u32 },

    #[error("Seat ({x}, {y}) lies outside the {columns} x {rows} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        columns: u32,
        rows: u32,
    },

    #[error("More than one seat at ({x}, {y})")]
    DuplicatePosition { x: i32, y: i32 },

    #[error("Invalid price {price} for seat ({x}, {y})")]
    InvalidPrice { x: i32, y: i32, price: f64 },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Unknown layout character '{ch}' at line {line}, column {column}")]
    InvalidLayoutChar { line: usize, column: usize, ch: char },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SeatError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SeatError::InvalidDimensions { .. } => ErrorCode::InvalidDimensions,
            SeatError::OutOfBounds { .. } => ErrorCode::OutOfBounds,
            SeatError::DuplicatePosition { .. } => ErrorCode::DuplicatePosition,
            SeatError::InvalidPrice { .. } => ErrorCode::InvalidPrice,
            SeatError::FileNotFound { .. } => ErrorCode::FileNotFound,
            SeatError::EmptyFile { .. } => ErrorCode::EmptyFile,
            SeatError::InvalidLayoutChar { .. } => ErrorCode::ParseError,
            SeatError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for seat map operations.
pub type Result<T> = std::result::Result<T, SeatError>;
