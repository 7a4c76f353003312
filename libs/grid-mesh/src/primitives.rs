//! # Box Primitive
//!
//! Every wall, divider and housing part is an axis-aligned box in its local
//! frame.

use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Creates a box centered on the origin.
///
/// 8 vertices and 12 triangles (2 per face), wound counter-clockwise seen
/// from outside so face normals point outward.
///
/// # Example
///
/// ```rust
/// use grid_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::new(1.0, 10.0, 50.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(size: DVec3) -> MeshResult<Mesh> {
    if !size.is_finite() || size.cmple(DVec3::ZERO).any() {
        return Err(MeshError::degenerate(format!(
            "Box size must be positive: {size:?}"
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);
    let max = size / 2.0;
    let min = -max;

    // Bottom (z = min.z): 0..4, top (z = max.z): 4..8
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // -Z
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);
    // +Z
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);
    // -Y
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);
    // +Y
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);
    // -X
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);
    // +X
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}
