//! # Footprint and Resolution
//!
//! The fixed outer rectangle being subdivided and the number of divisions
//! along each axis.

use serde::{Deserialize, Serialize};

use crate::error::PartitionError;

/// The rectangular outer boundary (width × depth) in millimetres.
///
/// Width runs along the X axis (the row direction), depth along Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub depth: f64,
}

impl Footprint {
    /// Creates a footprint, rejecting non-positive or non-finite sizes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grid_partition::Footprint;
    ///
    /// let footprint = Footprint::new(120.0, 80.0).unwrap();
    /// assert_eq!(footprint.width, 120.0);
    /// assert!(Footprint::new(0.0, 80.0).is_err());
    /// ```
    pub fn new(width: f64, depth: f64) -> Result<Self, PartitionError> {
        check_dimension("width", width)?;
        check_dimension("depth", depth)?;
        Ok(Self { width, depth })
    }

    /// Half extents along X and Z.
    #[inline]
    pub fn half_extents(&self) -> (f64, f64) {
        (self.width / 2.0, self.depth / 2.0)
    }
}

fn check_dimension(axis: &'static str, value: f64) -> Result<(), PartitionError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PartitionError::InvalidFootprint { axis, value })
    }
}

/// Division counts: `rows` bands along the width axis, `cols` cells per row
/// along the depth axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub rows: usize,
    pub cols: usize,
}

impl Resolution {
    /// Creates a resolution, rejecting zero counts.
    pub fn new(rows: usize, cols: usize) -> Result<Self, PartitionError> {
        if rows == 0 || cols == 0 {
            return Err(PartitionError::InvalidResolution { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of internal divider placements a full layout produces:
    /// `(rows − 1) × cols + rows × (cols − 1)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grid_partition::Resolution;
    ///
    /// assert_eq!(Resolution::new(3, 3).unwrap().internal_divider_count(), 12);
    /// assert_eq!(Resolution::new(1, 4).unwrap().internal_divider_count(), 3);
    /// ```
    pub fn internal_divider_count(&self) -> usize {
        (self.rows - 1) * self.cols + self.rows * (self.cols - 1)
    }
}
