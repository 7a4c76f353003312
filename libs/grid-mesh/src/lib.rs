//! # Grid Mesh
//!
//! Turns wall placements into triangle meshes and STL files.
//!
//! ## Architecture
//!
//! ```text
//! [WallPlacement] → assemble → Scene (one coloured box per placement)
//!                                 ├─ render_mesh → GPU buffers
//!                                 └─ export_mesh → STL
//! ```
//!
//! The STL is the concatenation of closed boxes; no boolean union is
//! performed.
//!
//! ## Usage
//!
//! ```rust
//! use grid_layout::{layout, WallOptions};
//! use grid_mesh::{assemble, to_stl_bytes, Palette};
//! use grid_partition::Partition;
//!
//! let partition = Partition::uniform(2, 2, 100.0, 100.0).unwrap();
//! let options = WallOptions { wall_thickness: 1.0, height: 10.0, generate_outer_walls: false };
//! let scene = assemble(&layout(&partition, &options), &Palette::default()).unwrap();
//! let stl = to_stl_bytes(&scene.export_mesh(), true).unwrap();
//! assert_eq!(stl.len(), 84 + 4 * 12 * 50);
//! ```

pub mod assemble;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod stl;

pub use assemble::{assemble, instantiate, Palette, Scene, ScenePart};
pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use stl::{save_stl, to_stl_bytes, write_stl_ascii, write_stl_binary};
