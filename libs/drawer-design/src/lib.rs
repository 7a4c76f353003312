//! # Drawer Design
//!
//! The configuration context for a parametric drawer insert: validated
//! parameters, the current partition with its cell edits, and the placement
//! list derived from them.
//!
//! ## Architecture
//!
//! ```text
//! ParamsUpdate ─→ DesignSession ─→ Partition (grid-partition)
//!                      │
//!                      ├─→ layout + housing (grid-layout) ─→ [WallPlacement]
//!                      └─→ scene / export_stl (grid-mesh)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use drawer_design::{DesignParams, DesignSession, ParamsUpdate};
//!
//! let mut session = DesignSession::new(DesignParams::default()).unwrap();
//! session.update(&ParamsUpdate { rows: Some(3), cols: Some(3), ..Default::default() }).unwrap();
//! session.resize_cell(0, 0, 50.0).unwrap();
//! session.refresh();
//!
//! let stl = session.export_stl(false).unwrap();
//! assert!(stl.starts_with(b"solid mesh"));
//! ```

pub mod error;
pub mod params;
pub mod session;

pub use error::{DesignError, DesignResult};
pub use params::{DesignParams, ParamsUpdate};
pub use session::{DesignSession, LayoutRequest, LayoutResult, UpdateOutcome};
