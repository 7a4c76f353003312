//! # Partition Errors
//!
//! Error types for partition construction and editing.

use thiserror::Error;

/// Errors that can occur while building or editing a partition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PartitionError {
    /// A footprint dimension was zero, negative or not finite.
    #[error("Invalid footprint {axis}: {value}")]
    InvalidFootprint { axis: &'static str, value: f64 },

    /// Row or column count was zero.
    #[error("Invalid resolution: {rows} rows × {cols} cols")]
    InvalidResolution { rows: usize, cols: usize },

    /// A cell index was outside the current resolution.
    #[error("Cell ({row}, {col}) is outside a {rows} × {cols} partition")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A requested cell size was NaN or infinite.
    #[error("Cell size must be finite: {0}")]
    NonFiniteSize(f64),

    /// A row's cell depths no longer add up to the footprint depth.
    #[error("Row {row} sums to {sum}, expected {expected}")]
    RowSumMismatch { row: usize, sum: f64, expected: f64 },

    /// The row widths no longer add up to the footprint width.
    #[error("Rows span {sum}, expected {expected}")]
    WidthSumMismatch { sum: f64, expected: f64 },
}

impl PartitionError {
    /// Creates an out-of-bounds error for the given cell and resolution.
    pub fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::CellOutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }
}
