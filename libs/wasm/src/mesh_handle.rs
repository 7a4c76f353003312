//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use grid_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// A handle to rendered mesh data, accessed from JavaScript as typed arrays.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const designer = new DrawerDesigner();
/// const mesh = designer.render();
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setAttribute('color', new THREE.BufferAttribute(mesh.colors(), 4));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Option<Vec<f32>>,
    /// Vertex colors as [r, g, b, a, ...]
    colors: Option<Vec<f32>>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the vertex normals as a Float32Array, if available.
    pub fn normals(&self) -> Option<js_sys::Float32Array> {
        self.normals
            .as_ref()
            .map(|n| js_sys::Float32Array::from(&n[..]))
    }

    /// Returns the vertex colors as a Float32Array, if available.
    ///
    /// Length: vertex_count * 4
    pub fn colors(&self) -> Option<js_sys::Float32Array> {
        self.colors
            .as_ref()
            .map(|c| js_sys::Float32Array::from(&c[..]))
    }

    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Copies the GPU buffers out of a mesh.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32(),
            colors: mesh.colors_f32(),
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }

    /// Position buffer, for hosts that stay in Rust.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    pub fn color_buffer(&self) -> Option<&[f32]> {
        self.colors.as_deref()
    }
}
