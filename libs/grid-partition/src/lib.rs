//! # Grid Partition
//!
//! Variable-resolution 2D partition of a fixed-size rectangle.
//!
//! ## Architecture
//!
//! ```text
//! Footprint + Resolution → build (uniform) → Partition ⇄ resize_cell
//! ```
//!
//! ## Invariants
//!
//! - Every cell in a row shares the row's width
//! - Every row's cell depths sum to the footprint depth, before and after edits
//! - A rebuild discards all edits and restores the uniform layout
//!
//! ## Usage
//!
//! ```rust
//! use grid_partition::{Partition, ResizeOutcome};
//!
//! let mut partition = Partition::uniform(2, 2, 100.0, 100.0).unwrap();
//! let outcome = partition.resize_cell(0, 0, 70.0).unwrap();
//! assert!(outcome.is_applied());
//! assert_eq!(partition.cell(0, 1).unwrap().depth, 30.0);
//! ```

pub mod editor;
pub mod error;
pub mod footprint;
pub mod partition;

pub use editor::{neighbor_of, resize_cell, ResizeOutcome};
pub use error::PartitionError;
pub use footprint::{Footprint, Resolution};
pub use partition::{build, CellSize, Partition, Row};
