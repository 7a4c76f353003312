//! # Partition Editor
//!
//! The single supported edit: resize one cell along the depth axis and hand
//! the difference to one neighbour in the same row, so the row keeps spanning
//! the full footprint depth.

use config::constants::{EPSILON, MIN_CELL_SIZE};

use crate::error::PartitionError;
use crate::partition::Partition;

/// Result of a resize request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeOutcome {
    /// The edit was applied to `(row, col)` and `neighbor` absorbed `-delta`.
    Applied {
        row: usize,
        col: usize,
        neighbor: usize,
        old_size: f64,
        new_size: f64,
        delta: f64,
    },
    /// Nothing changed: single-cell row, zero delta, or a cell pair too
    /// small to hold two minimum-size cells.
    Unchanged,
}

impl ResizeOutcome {
    /// Returns true if the partition was modified.
    pub fn is_applied(&self) -> bool {
        matches!(self, ResizeOutcome::Applied { .. })
    }
}

/// Picks the cell that absorbs a resize of `col` in a row of `len` cells.
///
/// The next cell is preferred; the last cell borrows from its predecessor.
/// A single-cell row has no neighbour.
pub fn neighbor_of(col: usize, len: usize) -> Option<usize> {
    if len < 2 || col >= len {
        None
    } else if col + 1 < len {
        Some(col + 1)
    } else {
        Some(col - 1)
    }
}

impl Partition {
    /// Sets the depth of cell `(row, col)` to `new_size`, subtracting the
    /// delta from its neighbour (see [`neighbor_of`]). Other rows are
    /// untouched.
    ///
    /// `new_size` is clamped so that neither the cell nor its neighbour ends
    /// up smaller than [`MIN_CELL_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::CellOutOfBounds`] for an index outside the
    /// current resolution and [`PartitionError::NonFiniteSize`] for NaN or
    /// infinite sizes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grid_partition::Partition;
    ///
    /// let mut partition = Partition::uniform(2, 2, 100.0, 100.0).unwrap();
    /// partition.resize_cell(0, 0, 70.0).unwrap();
    /// assert_eq!(partition.cell(0, 1).unwrap().depth, 30.0);
    /// assert_eq!(partition.row_sum(0), Some(100.0));
    /// ```
    pub fn resize_cell(
        &mut self,
        row: usize,
        col: usize,
        new_size: f64,
    ) -> Result<ResizeOutcome, PartitionError> {
        self.resize_cell_with_min(row, col, new_size, MIN_CELL_SIZE)
    }

    /// Like [`Partition::resize_cell`], but neither cell may end up smaller
    /// than `min_size` (never less than [`MIN_CELL_SIZE`]).
    ///
    /// Callers that place walls on the cell boundaries pass the wall
    /// thickness here, so two dividers around one cell cannot collide.
    ///
    /// ```rust
    /// use grid_partition::Partition;
    ///
    /// let mut partition = Partition::uniform(2, 2, 100.0, 100.0).unwrap();
    /// partition.resize_cell_with_min(0, 0, 99.0, 3.0).unwrap();
    /// assert_eq!(partition.cell(0, 1).unwrap().depth, 3.0);
    /// ```
    pub fn resize_cell_with_min(
        &mut self,
        row: usize,
        col: usize,
        new_size: f64,
        min_size: f64,
    ) -> Result<ResizeOutcome, PartitionError> {
        let min_size = if min_size.is_finite() {
            min_size.max(MIN_CELL_SIZE)
        } else {
            MIN_CELL_SIZE
        };
        let resolution = self.resolution();
        let band = self
            .rows_mut()
            .get_mut(row)
            .ok_or_else(|| PartitionError::out_of_bounds(row, col, resolution.rows, resolution.cols))?;
        if col >= band.cells.len() {
            return Err(PartitionError::out_of_bounds(
                row,
                col,
                resolution.rows,
                band.cells.len(),
            ));
        }
        if !new_size.is_finite() {
            return Err(PartitionError::NonFiniteSize(new_size));
        }

        let Some(neighbor) = neighbor_of(col, band.cells.len()) else {
            tracing::debug!(row, col, "single-cell row cannot be resized");
            return Ok(ResizeOutcome::Unchanged);
        };

        let old_size = band.cells[col];
        let pair = old_size + band.cells[neighbor];
        if pair < 2.0 * min_size {
            tracing::debug!(row, col, pair, min_size, "cell pair too small to redistribute");
            return Ok(ResizeOutcome::Unchanged);
        }

        let clamped = new_size.clamp(min_size, pair - min_size);
        if clamped != new_size {
            tracing::warn!(
                row,
                col,
                requested = new_size,
                applied = clamped,
                "resize clamped to keep neighbour at minimum size"
            );
        }

        let delta = clamped - old_size;
        if delta.abs() < EPSILON {
            return Ok(ResizeOutcome::Unchanged);
        }

        band.cells[col] = clamped;
        band.cells[neighbor] -= delta;

        tracing::debug!(row, col, neighbor, old_size, new_size = clamped, "resized cell");

        Ok(ResizeOutcome::Applied {
            row,
            col,
            neighbor,
            old_size,
            new_size: clamped,
            delta,
        })
    }
}

/// Free-function form of [`Partition::resize_cell`].
pub fn resize_cell(
    partition: &mut Partition,
    row: usize,
    col: usize,
    new_size: f64,
) -> Result<ResizeOutcome, PartitionError> {
    partition.resize_cell(row, col, new_size)
}
