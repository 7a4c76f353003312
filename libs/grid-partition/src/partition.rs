//! # Partition Model
//!
//! An ordered table of rows, each an ordered list of cells, that exactly
//! covers a [`Footprint`].
//!
//! Rows are bands along the width axis (axis A); every cell in a row shares
//! the row's width. Cells subdivide the row along the depth axis (axis B) and
//! their depths always sum to the footprint depth.

use config::constants::EPSILON;
use serde::Serialize;

use crate::error::PartitionError;
use crate::footprint::{Footprint, Resolution};

/// The `(axis A, axis B)` size pair of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellSize {
    /// Size along the width axis, shared by the whole row.
    pub width: f64,
    /// Size along the depth axis, specific to this cell.
    pub depth: f64,
}

/// One band of the partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub(crate) width: f64,
    pub(crate) cells: Vec<f64>,
}

impl Row {
    /// Width of the band (axis A).
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Depths of the cells in this band (axis B), front to back.
    #[inline]
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Number of cells in the band.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the band has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of the cell depths.
    pub fn depth_sum(&self) -> f64 {
        self.cells.iter().sum()
    }
}

/// A variable-resolution partition of a fixed footprint.
///
/// Always fully populated for its resolution. Created by [`Partition::build`]
/// and edited in place by [`Partition::resize_cell`].
///
/// # Example
///
/// ```rust
/// use grid_partition::Partition;
///
/// let partition = Partition::uniform(2, 2, 100.0, 100.0).unwrap();
/// let cell = partition.cell(0, 1).unwrap();
/// assert_eq!((cell.width, cell.depth), (50.0, 50.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Partition {
    footprint: Footprint,
    rows: Vec<Row>,
}

impl Partition {
    /// Builds the uniform partition for a resolution and footprint.
    ///
    /// Every row is `width / rows` wide and every cell `depth / cols` deep.
    /// Deterministic: the same inputs always produce bit-identical output.
    pub fn build(resolution: Resolution, footprint: Footprint) -> Self {
        let row_width = footprint.width / resolution.rows as f64;
        let cell_depth = footprint.depth / resolution.cols as f64;

        let rows = (0..resolution.rows)
            .map(|_| Row {
                width: row_width,
                cells: vec![cell_depth; resolution.cols],
            })
            .collect();

        tracing::debug!(
            rows = resolution.rows,
            cols = resolution.cols,
            width = footprint.width,
            depth = footprint.depth,
            "built uniform partition"
        );

        Self { footprint, rows }
    }

    /// Validating form of [`Partition::build`] taking raw values.
    pub fn uniform(
        rows: usize,
        cols: usize,
        width: f64,
        depth: f64,
    ) -> Result<Self, PartitionError> {
        let resolution = Resolution::new(rows, cols)?;
        let footprint = Footprint::new(width, depth)?;
        Ok(Self::build(resolution, footprint))
    }

    /// The footprint this partition covers.
    #[inline]
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Current row and column counts.
    pub fn resolution(&self) -> Resolution {
        Resolution {
            rows: self.rows.len(),
            cols: self.rows.first().map_or(0, Row::len),
        }
    }

    /// All rows, in order along the width axis.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the row at `index`, if any.
    #[inline]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Returns the size pair of cell `(row, col)`, if it exists.
    pub fn cell(&self, row: usize, col: usize) -> Option<CellSize> {
        let band = self.rows.get(row)?;
        band.cells.get(col).map(|&depth| CellSize {
            width: band.width,
            depth,
        })
    }

    /// Sum of the cell depths of row `index`.
    pub fn row_sum(&self, index: usize) -> Option<f64> {
        self.rows.get(index).map(Row::depth_sum)
    }

    /// Iterates over every cell as `(row, col, size)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellSize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, band)| {
            band.cells.iter().enumerate().map(move |(j, &depth)| {
                (
                    i,
                    j,
                    CellSize {
                        width: band.width,
                        depth,
                    },
                )
            })
        })
    }

    /// Depth of the shallowest cell.
    pub fn min_cell_depth(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|band| band.cells.iter().copied())
            .fold(f64::INFINITY, f64::min)
    }

    /// Returns true while the partition still equals the uniform layout for
    /// its resolution and footprint.
    pub fn is_uniform(&self) -> bool {
        let resolution = self.resolution();
        let row_width = self.footprint.width / resolution.rows as f64;
        let cell_depth = self.footprint.depth / resolution.cols as f64;

        self.rows.iter().all(|band| {
            (band.width - row_width).abs() < EPSILON
                && band.cells.iter().all(|d| (d - cell_depth).abs() < EPSILON)
        })
    }

    /// Verifies that every row spans the full footprint depth and that the
    /// row widths add up to the footprint width.
    pub fn check_invariants(&self) -> Result<(), PartitionError> {
        let tolerance = EPSILON * self.footprint.depth.max(1.0);
        for (index, band) in self.rows.iter().enumerate() {
            let sum = band.depth_sum();
            if (sum - self.footprint.depth).abs() > tolerance {
                return Err(PartitionError::RowSumMismatch {
                    row: index,
                    sum,
                    expected: self.footprint.depth,
                });
            }
        }

        let width_sum: f64 = self.rows.iter().map(Row::width).sum();
        if (width_sum - self.footprint.width).abs() > EPSILON * self.footprint.width.max(1.0) {
            return Err(PartitionError::WidthSumMismatch {
                sum: width_sum,
                expected: self.footprint.width,
            });
        }
        Ok(())
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }
}

/// Builds the uniform partition from raw values.
///
/// Shorthand for [`Partition::uniform`].
///
/// # Example
///
/// ```rust
/// let partition = grid_partition::build(3, 4, 90.0, 120.0).unwrap();
/// assert_eq!(partition.row_sum(2), Some(120.0));
/// ```
pub fn build(rows: usize, cols: usize, width: f64, depth: f64) -> Result<Partition, PartitionError> {
    Partition::uniform(rows, cols, width, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_cells() {
        let partition = Partition::uniform(2, 2, 100.0, 100.0).unwrap();
        for (_, _, cell) in partition.cells() {
            assert_eq!(cell, CellSize { width: 50.0, depth: 50.0 });
        }
        assert_eq!(partition.cells().count(), 4);
    }

    #[test]
    fn test_rectangular_resolution() {
        let partition = Partition::uniform(3, 5, 90.0, 200.0).unwrap();
        assert_eq!(partition.resolution(), Resolution { rows: 3, cols: 5 });
        assert_eq!(partition.rows().len(), 3);
        for band in partition.rows() {
            assert_relative_eq!(band.width(), 30.0);
            assert_eq!(band.len(), 5);
            assert_relative_eq!(band.depth_sum(), 200.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_row_sums_hold_for_awkward_divisions() {
        let partition = Partition::uniform(7, 9, 333.0, 497.0).unwrap();
        assert!(partition.check_invariants().is_ok());
        for i in 0..7 {
            assert!((partition.row_sum(i).unwrap() - 497.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let a = Partition::uniform(4, 6, 123.4, 56.7).unwrap();
        let b = Partition::uniform(4, 6, 123.4, 56.7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_min_cell_depth() {
        let mut partition = Partition::uniform(2, 4, 100.0, 100.0).unwrap();
        assert_relative_eq!(partition.min_cell_depth(), 25.0);
        partition.resize_cell(1, 2, 40.0).unwrap();
        assert_relative_eq!(partition.min_cell_depth(), 10.0);
    }

    #[test]
    fn test_fresh_partition_is_uniform() {
        assert!(Partition::uniform(3, 3, 100.0, 100.0).unwrap().is_uniform());
    }

    #[test]
    fn test_out_of_range_lookup() {
        let partition = Partition::uniform(2, 3, 10.0, 10.0).unwrap();
        assert!(partition.cell(2, 0).is_none());
        assert!(partition.cell(0, 3).is_none());
        assert!(partition.row_sum(5).is_none());
    }

    #[test]
    fn test_single_strip_builds() {
        let partition = Partition::uniform(1, 1, 10.0, 20.0).unwrap();
        assert_eq!(partition.cell(0, 0), Some(CellSize { width: 10.0, depth: 20.0 }));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(build(0, 2, 10.0, 10.0).is_err());
        assert!(build(2, 2, -10.0, 10.0).is_err());
    }

    #[test]
    fn test_invariant_violation_detected() {
        let mut partition = Partition::uniform(2, 2, 100.0, 100.0).unwrap();
        partition.rows_mut()[1].cells[0] = 10.0;
        assert_eq!(
            partition.check_invariants().unwrap_err(),
            PartitionError::RowSumMismatch {
                row: 1,
                sum: 60.0,
                expected: 100.0
            }
        );
    }
}
