//! # Config Crate
//!
//! Centralized configuration constants for the drawer grid pipeline.
//! Parameter ranges, defaults, tolerances and housing dimensions are defined
//! here so the partition, layout and mesh crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DIMENSION_RANGE, EPSILON, MIN_CELL_SIZE};
//!
//! // Validate a slider value before it reaches the layout engine
//! assert!(DIMENSION_RANGE.contains(120.0));
//!
//! // Cells never shrink below the minimum size
//! assert!(MIN_CELL_SIZE > EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Dependency-Free**: Pure constants and small validation helpers

pub mod constants;
