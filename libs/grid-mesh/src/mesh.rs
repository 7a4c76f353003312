//! # Mesh Data Structure
//!
//! Indexed triangle mesh with optional per-vertex colours and normals.

use config::constants::{DEFAULT_COLOR, EPSILON};
use glam::{DMat4, DVec3};

use crate::error::{MeshError, MeshResult};

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the STL and WASM boundaries.
///
/// # Example
///
/// ```rust
/// use grid_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    /// RGBA per vertex, f32 for the GPU
    colors: Option<Vec<[f32; 4]>>,
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            colors: None,
            normals: None,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices, counter-clockwise seen from outside.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Corner positions of triangle `index`.
    pub fn triangle_positions(&self, index: usize) -> Option<[DVec3; 3]> {
        let [a, b, c] = *self.triangles.get(index)?;
        Some([
            *self.vertices.get(a as usize)?,
            *self.vertices.get(b as usize)?,
            *self.vertices.get(c as usize)?,
        ])
    }

    /// Unit normal of triangle `index` from its winding, or zero for a
    /// sliver.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        self.triangle_positions(index)
            .map(|[a, b, c]| (b - a).cross(c - a).normalize_or_zero())
            .unwrap_or(DVec3::ZERO)
    }

    /// Sets a uniform colour for all vertices.
    pub fn set_uniform_color(&mut self, color: [f32; 4]) {
        self.colors = Some(vec![color; self.vertices.len()]);
    }

    pub fn colors(&self) -> Option<&[[f32; 4]]> {
        self.colors.as_deref()
    }

    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes smooth vertex normals by accumulating face normals.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let normal = (v1 - v0).cross(v2 - v0);

            for &index in tri {
                normals[index as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Axis-aligned bounding box as `(min, max)`; zero for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        // Normals use the inverse transpose
        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                *n = normal_matrix.transform_vector3(*n).normalize_or_zero();
            }
        }
    }

    /// Appends `other`, offsetting its indices.
    ///
    /// Colours survive if either side has them; the uncoloured side is
    /// filled with [`DEFAULT_COLOR`]. Normals survive only if every
    /// non-empty side has them.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        let own_count = self.vertices.len();

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );

        self.colors = match (self.colors.take(), &other.colors) {
            (None, None) => None,
            (Some(mut own), Some(theirs)) => {
                own.extend_from_slice(theirs);
                Some(own)
            }
            (Some(mut own), None) => {
                own.resize(own_count + other.vertices.len(), DEFAULT_COLOR);
                Some(own)
            }
            (None, Some(theirs)) => {
                let mut colors = vec![DEFAULT_COLOR; own_count];
                colors.extend_from_slice(theirs);
                Some(colors)
            }
        };

        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut own), Some(theirs)) => {
                own.extend_from_slice(theirs);
                Some(own)
            }
            // An empty mesh has no vertices to lack normals for
            (None, Some(theirs)) if own_count == 0 => Some(theirs.clone()),
            (own, None) if other.vertices.is_empty() => own,
            _ => None,
        };
    }

    /// Checks that every index is in range and no triangle has zero area.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len() as u32;

        for (index, tri) in self.triangles.iter().enumerate() {
            if tri.iter().any(|&v| v >= vertex_count) {
                return Err(MeshError::validation(format!(
                    "triangle {index} references a missing vertex: {tri:?}"
                )));
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::validation(format!(
                    "triangle {index} repeats a vertex: {tri:?}"
                )));
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            if (v1 - v0).cross(v2 - v0).length() < EPSILON {
                return Err(MeshError::validation(format!(
                    "triangle {index} has zero area"
                )));
            }
        }

        if let Some(colors) = &self.colors {
            if colors.len() != self.vertices.len() {
                return Err(MeshError::validation(format!(
                    "{} colours for {} vertices",
                    colors.len(),
                    self.vertices.len()
                )));
            }
        }

        Ok(())
    }

    /// Flattened `[x, y, z, ...]` positions for the GPU.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Flattened `[i0, i1, i2, ...]` indices for the GPU.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Flattened normals for the GPU, if computed.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }

    /// Flattened `[r, g, b, a, ...]` colours for the GPU, if set.
    pub fn colors_f32(&self) -> Option<Vec<f32>> {
        self.colors
            .as_ref()
            .map(|colors| colors.iter().flatten().copied().collect())
    }
}
