//! # Grid Layout
//!
//! Turns a [`grid_partition::Partition`] into positioned boxes.
//!
//! ## Architecture
//!
//! ```text
//! Partition + WallOptions → layout  → [WallPlacement] (outer walls, dividers)
//! Footprint + height      → housing → [WallPlacement] (floor, walls, handle)
//! ```
//!
//! Layout is a pure function of its inputs. Everything is centered on the
//! footprint origin, X along width, Z along depth, Y up.
//!
//! ## Usage
//!
//! ```rust
//! use grid_layout::{layout, PlacementKind, WallOptions};
//! use grid_partition::Partition;
//!
//! let partition = Partition::uniform(2, 2, 100.0, 100.0).unwrap();
//! let options = WallOptions { wall_thickness: 1.0, height: 10.0, generate_outer_walls: false };
//! let walls = layout(&partition, &options);
//! assert_eq!(walls.len(), 4);
//! assert!(walls.iter().all(|w| matches!(w.kind, PlacementKind::Divider(_))));
//! ```

pub mod housing;
pub mod placement;
pub mod walls;

pub use housing::{housing, HandleGeometry};
pub use placement::{Bounds, DividerAxis, HousingPart, PlacementKind, WallPlacement};
pub use walls::{expected_count, layout, WallOptions};
