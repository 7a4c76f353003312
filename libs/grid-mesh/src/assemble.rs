//! # Scene Assembler
//!
//! Instantiates one box mesh per [`WallPlacement`], coloured by what the
//! placement is. Tessellation runs on the rayon pool; output order always
//! matches input order.

use config::constants::{DEFAULT_COLOR, HANDLE_COLOR, HOUSING_COLOR, MAX_TRIANGLES};
use grid_layout::{HousingPart, PlacementKind, WallPlacement};
use rayon::prelude::*;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::primitives::create_box;

/// Material colours by placement kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Outer walls and dividers.
    pub grid: [f32; 4],
    /// Housing floor and walls.
    pub housing: [f32; 4],
    /// Handle posts and bar.
    pub handle: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: DEFAULT_COLOR,
            housing: HOUSING_COLOR,
            handle: HANDLE_COLOR,
        }
    }
}

impl Palette {
    /// Default palette with a custom grid colour.
    pub fn with_grid(grid: [f32; 4]) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    pub fn color_for(&self, kind: PlacementKind) -> [f32; 4] {
        match kind {
            PlacementKind::OuterWall | PlacementKind::Divider(_) => self.grid,
            PlacementKind::Housing(HousingPart::HandlePost | HousingPart::HandleBar) => {
                self.handle
            }
            PlacementKind::Housing(_) => self.housing,
        }
    }
}

/// One instantiated placement.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePart {
    pub kind: PlacementKind,
    pub mesh: Mesh,
}

/// The assembled model, one part per placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    parts: Vec<ScenePart>,
}

impl Scene {
    #[inline]
    pub fn parts(&self) -> &[ScenePart] {
        &self.parts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Total triangle count over all parts.
    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.triangle_count()).sum()
    }

    /// Concatenates the parts accepted by `filter` into one mesh.
    pub fn merged(&self, filter: impl Fn(PlacementKind) -> bool) -> Mesh {
        let selected: Vec<_> = self.parts.iter().filter(|p| filter(p.kind)).collect();
        let vertex_count = selected.iter().map(|p| p.mesh.vertex_count()).sum();
        let triangle_count = selected.iter().map(|p| p.mesh.triangle_count()).sum();

        selected
            .into_iter()
            .fold(Mesh::with_capacity(vertex_count, triangle_count), |mut acc, part| {
                acc.merge(&part.mesh);
                acc
            })
    }

    /// Every part merged, for display.
    pub fn render_mesh(&self) -> Mesh {
        self.merged(|_| true)
    }

    /// The grid parts merged, for file export. Housing is display-only.
    pub fn export_mesh(&self) -> Mesh {
        self.merged(|kind| !kind.is_housing())
    }
}

/// Instantiates one box per placement.
///
/// Degenerate placements are skipped with a debug log, matching the layout
/// generators.
///
/// # Errors
///
/// Returns [`MeshError::TooManyTriangles`] if the scene would exceed
/// [`MAX_TRIANGLES`].
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use grid_layout::{PlacementKind, WallPlacement};
/// use grid_mesh::{assemble, Palette};
///
/// let wall = WallPlacement::along_depth(PlacementKind::OuterWall, 1.0, 10.0, 50.0, DVec3::ZERO);
/// let scene = assemble(&[wall], &Palette::default()).unwrap();
/// assert_eq!(scene.triangle_count(), 12);
/// ```
pub fn assemble(placements: &[WallPlacement], palette: &Palette) -> MeshResult<Scene> {
    let count = placements.len() * 12;
    if count > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count,
            max: MAX_TRIANGLES,
        });
    }

    let parts: Vec<ScenePart> = placements
        .par_iter()
        .filter_map(|placement| match instantiate(placement, palette) {
            Ok(part) => Some(part),
            Err(err) => {
                tracing::debug!(kind = ?placement.kind, %err, "skipping placement");
                None
            }
        })
        .collect();

    tracing::debug!(
        placements = placements.len(),
        parts = parts.len(),
        "assembled scene"
    );

    Ok(Scene { parts })
}

/// Builds the coloured, positioned box for one placement.
pub fn instantiate(placement: &WallPlacement, palette: &Palette) -> MeshResult<ScenePart> {
    let mut mesh = create_box(placement.local_size())?;
    mesh.transform(&placement.transform());
    mesh.compute_normals();
    mesh.set_uniform_color(palette.color_for(placement.kind));

    Ok(ScenePart {
        kind: placement.kind,
        mesh,
    })
}
